use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use house_hunt_core::comparison::parameters::{
    DEFAULT_APPRECIATION_PCT, DEFAULT_HORIZON_YEARS, DEFAULT_RATE_PCT, DEFAULT_TERM_YEARS,
};
use house_hunt_core::comparison::{
    analyze_comparison, ComparisonInput, LoanParameters, MarketParameters,
};

use super::parse_down_pct;
use crate::input;

/// Arguments for a side-by-side comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to a full comparison input (listings, loan, market) as JSON
    #[arg(long, conflicts_with = "catalog")]
    pub input: Option<String>,

    /// Path to a listing catalog (JSON, or YAML by extension). Defaults to the bundled sample
    #[arg(long)]
    pub catalog: Option<String>,

    /// Annual interest rate in percent
    #[arg(long, default_value_t = DEFAULT_RATE_PCT)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long, default_value_t = DEFAULT_TERM_YEARS)]
    pub term: u32,

    /// Annual appreciation in percent; may be negative
    #[arg(long, default_value_t = DEFAULT_APPRECIATION_PCT, allow_hyphen_values = true)]
    pub appreciation: Decimal,

    /// Projection horizon in years
    #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
    pub horizon: u32,

    /// Down payment for one listing as ID=PCT; repeatable
    #[arg(long = "down", value_parser = parse_down_pct)]
    pub down: Vec<(String, Decimal)>,

    /// Emit only the comparison table rows, without the monthly series
    #[arg(long)]
    pub table_only: bool,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let comparison_input: ComparisonInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.catalog.is_some() {
        input_from_flags(&args)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        input_from_flags(&args)?
    };

    log::debug!(
        "comparing {} listings at {}% over {} years",
        comparison_input.listings.len(),
        comparison_input.loan.annual_rate_pct,
        comparison_input.loan.term_years
    );

    let result = analyze_comparison(&comparison_input)?;
    let mut value = serde_json::to_value(result)?;

    if args.table_only {
        if let Some(result) = value.get_mut("result") {
            let table = result.get("table").cloned().unwrap_or(Value::Null);
            *result = serde_json::json!({ "table": table });
        }
    }
    Ok(value)
}

fn input_from_flags(args: &CompareArgs) -> Result<ComparisonInput, Box<dyn std::error::Error>> {
    let catalog = input::file::read_catalog(args.catalog.as_deref())?;
    let loan = args
        .down
        .iter()
        .fold(LoanParameters::new(args.rate, args.term), |loan, (id, pct)| {
            loan.with_down_pct(id.clone(), *pct)
        });
    let market = MarketParameters::new(args.appreciation, args.horizon);
    Ok(ComparisonInput::from_catalog(catalog, loan, market))
}
