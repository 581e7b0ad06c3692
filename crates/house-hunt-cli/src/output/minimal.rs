use serde_json::Value;

use super::display_scalar;

/// Print just the key answer value from the output.
///
/// Looks for well-known result fields in order of priority, then falls back
/// to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["monthly_payment", "final_value"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", display_scalar(val));
                    return;
                }
            }
        }

        // Comparison: one line per listing with its total monthly cost
        if let Some(Value::Array(rows)) = map.get("table") {
            for row in rows {
                if let (Some(id), Some(total)) = (row.get("listing_id"), row.get("total_monthly")) {
                    println!("{}: {}", display_scalar(id), display_scalar(total));
                }
            }
            return;
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, display_scalar(val));
            return;
        }
    }

    if let Value::Array(items) = result_obj {
        println!("{} entries", items.len());
        return;
    }

    println!("{}", display_scalar(result_obj));
}
