//! Side-by-side comparison rows.
//!
//! The 5- and 10-year columns are always true 5- and 10-year figures,
//! independent of the projection horizon chosen for the charts.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::parameters::MarketParameters;
use super::property::Financing;
use crate::appreciation::{appreciation_series, AppreciationSeries};
use crate::listings::Listing;
use crate::types::{Money, Percent};
use crate::HouseHuntResult;

/// Length of the series behind the checkpoint columns.
const CHECKPOINT_YEARS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub listing_id: String,
    pub address: String,
    pub neighborhood: String,
    pub price: Money,
    pub price_per_sqft: Money,
    pub down_payment: Money,
    pub down_pct: Percent,
    pub monthly_mortgage: Money,
    pub taxes_monthly: Money,
    pub common_charges_monthly: Money,
    pub total_monthly: Money,
    pub total_annual: Money,
    pub value_5yr: Money,
    pub equity_5yr: Money,
    pub value_10yr: Money,
    pub equity_10yr: Money,
    /// Carrying cost paid over 60 months
    pub total_paid_5yr: Money,
    /// Carrying cost paid over 120 months
    pub total_paid_10yr: Money,
}

pub fn comparison_row(
    listing: &Listing,
    financing: &Financing,
    market: &MarketParameters,
) -> HouseHuntResult<ComparisonRow> {
    let values = appreciation_series(listing.price, market.appreciation_pct, CHECKPOINT_YEARS)?;
    let (value_5yr, equity_5yr) = checkpoint(&values, financing, 5);
    let (value_10yr, equity_10yr) = checkpoint(&values, financing, 10);

    let monthly_mortgage = financing.monthly_mortgage();
    let total_monthly = monthly_mortgage + listing.monthly_fixed_costs();

    Ok(ComparisonRow {
        listing_id: listing.id.clone(),
        address: listing.display_name().to_string(),
        neighborhood: listing.neighborhood.clone(),
        price: listing.price,
        price_per_sqft: listing.price_per_area(),
        down_payment: financing.down_payment,
        down_pct: financing.down_pct,
        monthly_mortgage,
        taxes_monthly: listing.taxes_monthly,
        common_charges_monthly: listing.common_charges_monthly,
        total_monthly,
        total_annual: total_monthly * dec!(12),
        value_5yr,
        equity_5yr,
        value_10yr,
        equity_10yr,
        total_paid_5yr: total_monthly * dec!(60),
        total_paid_10yr: total_monthly * dec!(120),
    })
}

/// Value and equity after `years`.
fn checkpoint(values: &AppreciationSeries, financing: &Financing, years: u32) -> (Money, Money) {
    let months = years as usize * 12;
    let value = values.value_at(months);
    (value, value - financing.schedule.balance_after(months))
}

impl ComparisonRow {
    /// Column labels in display order, matching `values`.
    pub fn labels() -> [&'static str; 17] {
        [
            "Property",
            "Neighborhood",
            "Price",
            "$/SF",
            "Down Payment",
            "Down %",
            "Monthly Mortgage",
            "Taxes/mo",
            "HOA/mo",
            "Total Monthly",
            "Total Annual",
            "Value @ 5yr",
            "Equity @ 5yr",
            "Value @ 10yr",
            "Equity @ 10yr",
            "Total Paid 5yr",
            "Total Paid 10yr",
        ]
    }

    /// Row cells with money rounded to whole units, in `labels` order.
    pub fn values(&self) -> [String; 17] {
        let whole = |m: Money| m.round_dp(0).to_string();
        [
            self.address.clone(),
            self.neighborhood.clone(),
            whole(self.price),
            whole(self.price_per_sqft),
            whole(self.down_payment),
            self.down_pct.normalize().to_string(),
            whole(self.monthly_mortgage),
            whole(self.taxes_monthly),
            whole(self.common_charges_monthly),
            whole(self.total_monthly),
            whole(self.total_annual),
            whole(self.value_5yr),
            whole(self.equity_5yr),
            whole(self.value_10yr),
            whole(self.equity_10yr),
            whole(self.total_paid_5yr),
            whole(self.total_paid_10yr),
        ]
    }
}
