//! Listing price history, parsed into dated points for charting.
//!
//! Observations keep their catalog order; two observations may share a
//! period (a relisting within the same month).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::model::Listing;
use crate::error::HouseHuntError;
use crate::types::{Money, Percent};
use crate::HouseHuntResult;

/// A single dated observation with its change from the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    pub period: String,
    /// First day of the observation month
    pub date: NaiveDate,
    pub price: Money,
    /// Change versus the previous observation (zero for the first)
    pub change: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistorySeries {
    pub listing_id: String,
    pub points: Vec<PriceHistoryPoint>,
    /// Last observed price minus the first
    pub net_change: Money,
    /// Net change as a percentage of the first observed price
    pub net_change_pct: Percent,
}

/// Parse a `MM/YYYY` period label into the first day of that month.
pub fn parse_period(label: &str) -> HouseHuntResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01/{}", label.trim()), "%d/%m/%Y").map_err(|e| {
        HouseHuntError::DateError(format!("Invalid price-history period '{label}': {e}"))
    })
}

/// Build the dated price-history series for a listing.
pub fn price_history_series(listing: &Listing) -> HouseHuntResult<PriceHistorySeries> {
    let mut points = Vec::with_capacity(listing.price_history.len());
    let mut previous: Option<Money> = None;

    for obs in &listing.price_history {
        let date = parse_period(&obs.period)?;
        let change = previous.map_or(Decimal::ZERO, |p| obs.price - p);
        points.push(PriceHistoryPoint {
            period: obs.period.clone(),
            date,
            price: obs.price,
            change,
        });
        previous = Some(obs.price);
    }

    let (net_change, net_change_pct) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if !first.price.is_zero() => {
            let delta = last.price - first.price;
            (delta, delta / first.price * Decimal::ONE_HUNDRED)
        }
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    Ok(PriceHistorySeries {
        listing_id: listing.id.clone(),
        points,
        net_change,
        net_change_pct,
    })
}
