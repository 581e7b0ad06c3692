use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use house_hunt_core::appreciation::appreciation_series;
use house_hunt_core::types::{Money, Percent, Rate};

use super::{envelope, sample_every};

/// Arguments for an appreciation projection
#[derive(Args)]
pub struct AppreciateArgs {
    /// Starting property value
    #[arg(long)]
    pub price: Decimal,

    /// Annual appreciation in percent; may be negative (e.g. -2.5)
    #[arg(long, default_value = "3", allow_hyphen_values = true)]
    pub rate: Decimal,

    /// Projection horizon in years
    #[arg(long, default_value_t = 10)]
    pub years: u32,

    /// Only show one value per year
    #[arg(long)]
    pub yearly: bool,
}

#[derive(Serialize)]
struct AppreciationAssumptions {
    start_price: Money,
    annual_pct: Percent,
    years: u32,
}

#[derive(Serialize)]
struct AppreciationResult {
    final_value: Money,
    total_change: Money,
    monthly_rate: Rate,
    values: Vec<Money>,
}

pub fn run_appreciate(args: AppreciateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let series = appreciation_series(args.price, args.rate, args.years)?;

    let values = if args.yearly {
        sample_every(&series.values, 12)
    } else {
        series.values.clone()
    };

    let assumptions = AppreciationAssumptions {
        start_price: args.price,
        annual_pct: args.rate,
        years: args.years,
    };
    let result = AppreciationResult {
        final_value: series.final_value(),
        total_change: series.final_value() - series.start_price,
        monthly_rate: series.monthly_rate,
        values,
    };
    envelope(
        "Monthly-Compounded Appreciation",
        &assumptions,
        start.elapsed().as_micros() as u64,
        result,
    )
}
