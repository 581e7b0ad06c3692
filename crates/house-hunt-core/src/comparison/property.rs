//! Per-listing projection: financing, carrying cost, and month-aligned
//! value / balance / equity series over the projection horizon.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::parameters::{LoanParameters, MarketParameters};
use crate::appreciation::{appreciation_series, AppreciationSeries};
use crate::listings::Listing;
use crate::mortgage::{amortization_schedule, AmortizationSchedule};
use crate::types::{pct_to_fraction, Money, Percent};
use crate::HouseHuntResult;

/// Checkpoints reported for every listing, in years.
pub const MILESTONE_YEARS: [u32; 2] = [5, 10];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Purchase financing for one listing under the shared loan terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Financing {
    pub down_pct: Percent,
    pub down_payment: Money,
    pub loan_amount: Money,
    pub schedule: AmortizationSchedule,
}

impl Financing {
    pub fn monthly_mortgage(&self) -> Money {
        self.schedule.monthly_payment
    }
}

/// One component of the monthly carrying cost with its share of the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostShare {
    pub monthly: Money,
    /// Percentage of the total monthly cost (0-100)
    pub share_pct: Percent,
}

/// Monthly carrying cost split into its three named components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub mortgage: CostShare,
    pub taxes: CostShare,
    pub common_charges: CostShare,
}

impl CostBreakdown {
    fn new(mortgage: Money, taxes: Money, common_charges: Money) -> Self {
        let total = mortgage + taxes + common_charges;
        let share = |part: Money| CostShare {
            monthly: part,
            share_pct: if total.is_zero() {
                Decimal::ZERO
            } else {
                part / total * Decimal::ONE_HUNDRED
            },
        };
        CostBreakdown {
            mortgage: share(mortgage),
            taxes: share(taxes),
            common_charges: share(common_charges),
        }
    }

    pub fn components(&self) -> [(&'static str, CostShare); 3] {
        [
            ("Mortgage", self.mortgage),
            ("Taxes", self.taxes),
            ("Common Charges", self.common_charges),
        ]
    }
}

/// Projected value and equity at a yearly checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Requested checkpoint in years
    pub year: u32,
    /// Month actually reported; earlier than `year * 12` when the horizon is shorter
    pub month: usize,
    pub truncated: bool,
    pub value: Money,
    pub equity: Money,
    /// Value change versus the asking price, in percent
    pub value_change_pct: Percent,
}

/// Month-aligned series over the projection horizon, `horizon_months + 1` long.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Time axis in years (`month / 12`)
    pub years: Vec<Decimal>,
    pub property_value: Vec<Money>,
    /// Loan balance, starting at the loan amount and zero after payoff
    pub loan_balance: Vec<Money>,
    /// Property value minus loan balance
    pub total_equity: Vec<Money>,
}

/// Principal/interest split per month, limited to the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationBreakdown {
    /// Time axis in years for payments `1..=months`
    pub years: Vec<Decimal>,
    pub principal: Vec<Money>,
    pub interest: Vec<Money>,
}

/// Everything the presentation layer shows for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyProjection {
    pub listing_id: String,
    pub address: String,
    pub price: Money,
    pub down_pct: Percent,
    pub down_payment: Money,
    pub loan_amount: Money,
    pub monthly_mortgage: Money,
    pub taxes_monthly: Money,
    pub common_charges_monthly: Money,
    /// Mortgage + taxes + common charges
    pub total_monthly: Money,
    pub total_annual: Money,
    pub cost_breakdown: CostBreakdown,
    pub milestones: Vec<Milestone>,
    pub series: ProjectionSeries,
    pub amortization: AmortizationBreakdown,
    pub total_interest_over_term: Money,
}

impl PropertyProjection {
    pub fn milestone(&self, year: u32) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.year == year)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive down payment, loan amount and the full amortization schedule.
///
/// The down payment percentage must already be validated against the listing.
pub fn finance_listing(
    listing: &Listing,
    loan: &LoanParameters,
    down_pct: Percent,
) -> HouseHuntResult<Financing> {
    let down_payment = listing.price * pct_to_fraction(down_pct);
    let loan_amount = listing.price - down_payment;
    let schedule = amortization_schedule(loan_amount, loan.annual_rate_pct, loan.term_years)?;

    Ok(Financing {
        down_pct,
        down_payment,
        loan_amount,
        schedule,
    })
}

/// Project one listing over the market horizon.
pub fn project_property(
    listing: &Listing,
    financing: &Financing,
    market: &MarketParameters,
) -> HouseHuntResult<PropertyProjection> {
    let values = appreciation_series(listing.price, market.appreciation_pct, market.horizon_years)?;
    let series = align_series(&values, &financing.schedule, market.horizon_months());

    let monthly_mortgage = financing.monthly_mortgage();
    let total_monthly = monthly_mortgage + listing.monthly_fixed_costs();

    let milestones = MILESTONE_YEARS
        .iter()
        .map(|&year| milestone(year, listing.price, &series))
        .collect();

    Ok(PropertyProjection {
        listing_id: listing.id.clone(),
        address: listing.display_name().to_string(),
        price: listing.price,
        down_pct: financing.down_pct,
        down_payment: financing.down_payment,
        loan_amount: financing.loan_amount,
        monthly_mortgage,
        taxes_monthly: listing.taxes_monthly,
        common_charges_monthly: listing.common_charges_monthly,
        total_monthly,
        total_annual: total_monthly * dec!(12),
        cost_breakdown: CostBreakdown::new(
            monthly_mortgage,
            listing.taxes_monthly,
            listing.common_charges_monthly,
        ),
        milestones,
        series,
        amortization: amortization_breakdown(&financing.schedule, market.horizon_months()),
        total_interest_over_term: financing.schedule.total_interest,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Align the loan balance to the appreciation months: the loan amount at
/// month 0, then the schedule, truncated or zero-padded to the horizon.
fn align_series(
    values: &AppreciationSeries,
    schedule: &AmortizationSchedule,
    horizon_months: usize,
) -> ProjectionSeries {
    let len = horizon_months + 1;

    let loan_balance: Vec<Money> = std::iter::once(schedule.loan_amount)
        .chain(schedule.balances.iter().copied())
        .chain(std::iter::repeat(Decimal::ZERO))
        .take(len)
        .collect();

    let total_equity = values
        .values
        .iter()
        .zip(&loan_balance)
        .map(|(v, b)| v - b)
        .collect();

    ProjectionSeries {
        years: (0..len).map(month_to_years).collect(),
        property_value: values.values.clone(),
        loan_balance,
        total_equity,
    }
}

fn milestone(year: u32, price: Money, series: &ProjectionSeries) -> Milestone {
    let wanted = year as usize * 12;
    let last = series.property_value.len().saturating_sub(1);
    let month = wanted.min(last);
    let value = series.property_value[month];

    Milestone {
        year,
        month,
        truncated: month < wanted,
        value,
        equity: series.total_equity[month],
        value_change_pct: (value / price - Decimal::ONE) * Decimal::ONE_HUNDRED,
    }
}

fn amortization_breakdown(
    schedule: &AmortizationSchedule,
    horizon_months: usize,
) -> AmortizationBreakdown {
    let months = horizon_months.min(schedule.len());
    AmortizationBreakdown {
        years: (1..=months).map(month_to_years).collect(),
        principal: schedule.principal[..months].to_vec(),
        interest: schedule.interest[..months].to_vec(),
    }
}

fn month_to_years(month: usize) -> Decimal {
    Decimal::from(month as u64) / dec!(12)
}
