use house_hunt_core::comparison::property::MILESTONE_YEARS;
use house_hunt_core::comparison::{ComparisonRow, PropertyProjection};
use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::display_scalar;


/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(map);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            print_flat_object(res_map);

            for (key, val) in res_map {
                match (key.as_str(), val) {
                    ("table", Value::Array(rows)) => {
                        println!("\nSide-by-Side Comparison:");
                        print_transposed_table(rows);
                    }
                    ("per_property", Value::Array(rows)) => {
                        print_property_summaries(rows);
                        println!("\n(monthly series omitted; use --output json)");
                    }
                    (k, Value::Array(rows)) if rows.first().is_some_and(Value::is_object) => {
                        println!("\n{k}:");
                        print_array_table(rows);
                    }
                    _ => {}
                }
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", display_scalar(result)),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Scalar fields and scalar arrays as Field / Value rows.
fn print_flat_object(map: &Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut any = false;
    for (key, val) in map {
        if let Some(cell) = flat_cell(val) {
            builder.push_record([key.as_str(), &cell]);
            any = true;
        }
    }
    if any {
        println!("{}", Table::from(builder));
    }
}

fn flat_cell(value: &Value) -> Option<String> {
    match value {
        Value::Array(arr) if arr.iter().all(|v| !v.is_object() && !v.is_array()) => Some(
            arr.iter()
                .map(display_scalar)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Array(_) | Value::Object(_) => None,
        _ => Some(display_scalar(value)),
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first
            .iter()
            .filter(|(_, v)| flat_cell(v).is_some())
            .map(|(k, _)| k.clone())
            .collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).and_then(flat_cell).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", display_scalar(item));
        }
    }
}

/// Monthly cost split and horizon milestones for each listing.
fn print_property_summaries(rows: &[Value]) {
    let parsed: Result<Vec<PropertyProjection>, _> =
        serde_json::from_value(Value::Array(rows.to_vec()));
    let Ok(projections) = parsed else {
        return;
    };

    for p in &projections {
        println!("\n{}:", p.address);
        let mut builder = Builder::default();
        builder.push_record(["Item", "Monthly", "Share %"]);
        for (name, share) in p.cost_breakdown.components() {
            builder.push_record([
                name.to_string(),
                share.monthly.round_dp(2).to_string(),
                share.share_pct.round_dp(1).to_string(),
            ]);
        }
        println!("{}", Table::from(builder));

        let mut builder = Builder::default();
        builder.push_record(["Year", "Month", "Value", "Equity", "Change %"]);
        for m in MILESTONE_YEARS.iter().filter_map(|&y| p.milestone(y)) {
            builder.push_record([
                m.year.to_string(),
                m.month.to_string(),
                m.value.round_dp(0).to_string(),
                m.equity.round_dp(0).to_string(),
                m.value_change_pct.round_dp(2).to_string(),
            ]);
        }
        println!("{}", Table::from(builder));
    }
}

/// One column per listing, one row per display field.
///
/// Falls back to the raw keys when the rows are not comparison rows.
fn print_transposed_table(rows: &[Value]) {
    let parsed: Result<Vec<ComparisonRow>, _> = serde_json::from_value(Value::Array(rows.to_vec()));
    let Ok(comparison) = parsed else {
        print_array_table(rows);
        return;
    };
    if comparison.is_empty() {
        println!("(empty)");
        return;
    }

    let cells: Vec<[String; 17]> = comparison.iter().map(ComparisonRow::values).collect();
    let mut builder = Builder::default();
    for (i, label) in ComparisonRow::labels().iter().enumerate() {
        let mut record = vec![label.to_string()];
        record.extend(cells.iter().map(|c| c[i].clone()));
        builder.push_record(record);
    }

    println!("{}", Table::from(builder));
}
