use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use house_hunt_core::mortgage::{amortization_schedule, monthly_payment, AmortizationRow};
use house_hunt_core::types::{pct_to_fraction, Money, Percent};

use super::envelope;

/// Loan arguments shared by `payment` and `amortize`
#[derive(Args)]
pub struct LoanArgs {
    /// Loan principal. Alternatively give --price and --down-pct
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Purchase price, financed net of --down-pct
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment as a percentage of --price (e.g. 20)
    #[arg(long, default_value = "20")]
    pub down_pct: Decimal,

    /// Annual interest rate in percent (e.g. 6.75)
    #[arg(long, default_value = "6.75")]
    pub rate: Decimal,

    /// Loan term in years (15, 20, 25 or 30 are typical)
    #[arg(long, default_value_t = 30)]
    pub term: u32,
}

impl LoanArgs {
    fn principal(&self) -> Result<Money, Box<dyn std::error::Error>> {
        match (self.principal, self.price) {
            (Some(p), _) => Ok(p),
            (None, Some(price)) => Ok(price - price * pct_to_fraction(self.down_pct)),
            (None, None) => Err("--principal or --price is required".into()),
        }
    }
}

/// Arguments for the level payment
#[derive(Args)]
pub struct PaymentArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct AmortizeArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Only show the last month of each year
    #[arg(long)]
    pub yearly: bool,
}

#[derive(Serialize)]
struct LoanAssumptions {
    principal: Money,
    annual_rate_pct: Percent,
    term_years: u32,
}

#[derive(Serialize)]
struct PaymentResult {
    monthly_payment: Money,
    annual_payment: Money,
    loan_amount: Money,
}

#[derive(Serialize)]
struct ScheduleResult {
    monthly_payment: Money,
    loan_amount: Money,
    total_interest: Money,
    total_paid: Money,
    rows: Vec<AmortizationRow>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let principal = args.loan.principal()?;
    let payment = monthly_payment(principal, args.loan.rate, args.loan.term)?;

    let assumptions = LoanAssumptions {
        principal,
        annual_rate_pct: args.loan.rate,
        term_years: args.loan.term,
    };
    let result = PaymentResult {
        monthly_payment: payment,
        annual_payment: payment * Decimal::from(12),
        loan_amount: principal,
    };
    envelope(
        "Fixed-Rate Level Payment",
        &assumptions,
        start.elapsed().as_micros() as u64,
        result,
    )
}

pub fn run_amortize(args: AmortizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let principal = args.loan.principal()?;
    let schedule = amortization_schedule(principal, args.loan.rate, args.loan.term)?;
    log::debug!("amortized {} over {} months", principal, schedule.len());

    let rows: Vec<AmortizationRow> = if args.yearly {
        schedule.rows().filter(|r| r.month % 12 == 0).collect()
    } else {
        schedule.rows().collect()
    };

    let assumptions = LoanAssumptions {
        principal,
        annual_rate_pct: args.loan.rate,
        term_years: args.loan.term,
    };
    let result = ScheduleResult {
        monthly_payment: schedule.monthly_payment,
        loan_amount: schedule.loan_amount,
        total_interest: schedule.total_interest,
        total_paid: schedule.total_paid,
        rows,
    };
    envelope(
        "Fixed-Rate Amortization Schedule",
        &assumptions,
        start.elapsed().as_micros() as u64,
        result,
    )
}
