//! Explicit, immutable parameter sets for one recomputation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HouseHuntError;
use crate::listings::{Catalog, Listing};
use crate::types::{Percent, MAX_YEARS};
use crate::HouseHuntResult;

pub const DEFAULT_RATE_PCT: Percent = dec!(6.75);
pub const DEFAULT_TERM_YEARS: u32 = 30;
pub const DEFAULT_APPRECIATION_PCT: Percent = dec!(3);
pub const DEFAULT_HORIZON_YEARS: u32 = 10;

/// Financing terms. Rate and term are shared by every listing; the down
/// payment is chosen per listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Annual interest rate as a percentage (6.75 = 6.75%)
    pub annual_rate_pct: Percent,
    /// Loan term in whole years
    pub term_years: u32,
    /// Down payment percentage keyed by listing id. Listings without an
    /// entry use `Listing::default_down_pct`.
    #[serde(default)]
    pub down_payment_pct: BTreeMap<String, Percent>,
}

impl Default for LoanParameters {
    fn default() -> Self {
        LoanParameters {
            annual_rate_pct: DEFAULT_RATE_PCT,
            term_years: DEFAULT_TERM_YEARS,
            down_payment_pct: BTreeMap::new(),
        }
    }
}

impl LoanParameters {
    pub fn new(annual_rate_pct: Percent, term_years: u32) -> Self {
        LoanParameters {
            annual_rate_pct,
            term_years,
            down_payment_pct: BTreeMap::new(),
        }
    }

    /// Set the down payment for one listing.
    pub fn with_down_pct(mut self, listing_id: impl Into<String>, pct: Percent) -> Self {
        self.down_payment_pct.insert(listing_id.into(), pct);
        self
    }

    pub fn down_pct_for(&self, listing: &Listing) -> Percent {
        self.down_payment_pct
            .get(&listing.id)
            .copied()
            .unwrap_or_else(|| listing.default_down_pct())
    }

    pub fn validate(&self) -> HouseHuntResult<()> {
        if self.annual_rate_pct < Decimal::ZERO {
            return Err(HouseHuntError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: "Interest rate must be non-negative".into(),
            });
        }
        if self.term_years < 1 {
            return Err(HouseHuntError::InvalidInput {
                field: "term_years".into(),
                reason: "Loan term must be at least 1 year".into(),
            });
        }
        Ok(())
    }

    /// Every down-payment entry must name a listing in `listings`.
    pub(crate) fn validate_down_payment_keys(&self, listings: &[Listing]) -> HouseHuntResult<()> {
        for id in self.down_payment_pct.keys() {
            if !listings.iter().any(|l| &l.id == id) {
                return Err(HouseHuntError::InvalidInput {
                    field: format!("down_payment_pct.{id}"),
                    reason: format!("No listing with identifier '{id}'"),
                });
            }
        }
        Ok(())
    }
}

/// Market assumptions shared by every listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Annual appreciation as a percentage; may be negative, must exceed -100
    pub appreciation_pct: Percent,
    /// Projection horizon in whole years
    pub horizon_years: u32,
}

impl Default for MarketParameters {
    fn default() -> Self {
        MarketParameters {
            appreciation_pct: DEFAULT_APPRECIATION_PCT,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl MarketParameters {
    pub fn new(appreciation_pct: Percent, horizon_years: u32) -> Self {
        MarketParameters {
            appreciation_pct,
            horizon_years,
        }
    }

    pub fn horizon_months(&self) -> usize {
        self.horizon_years as usize * 12
    }

    pub fn validate(&self) -> HouseHuntResult<()> {
        if self.appreciation_pct <= dec!(-100) {
            return Err(HouseHuntError::InvalidInput {
                field: "appreciation_pct".into(),
                reason: "Appreciation rate must be greater than -100%".into(),
            });
        }
        if self.horizon_years < 1 {
            return Err(HouseHuntError::InvalidInput {
                field: "horizon_years".into(),
                reason: "Projection horizon must be at least 1 year".into(),
            });
        }
        if self.horizon_years > MAX_YEARS {
            return Err(HouseHuntError::InvalidInput {
                field: "horizon_years".into(),
                reason: format!("Projection horizon must not exceed {MAX_YEARS} years"),
            });
        }
        Ok(())
    }
}

/// Everything one comparison run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub listings: Vec<Listing>,
    #[serde(default)]
    pub loan: LoanParameters,
    #[serde(default)]
    pub market: MarketParameters,
}

impl ComparisonInput {
    pub fn from_catalog(catalog: Catalog, loan: LoanParameters, market: MarketParameters) -> Self {
        ComparisonInput {
            listings: catalog.listings,
            loan,
            market,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::model::tests::sample_listing;

    #[test]
    fn test_defaults_match_sidebar() {
        let loan = LoanParameters::default();
        assert_eq!(loan.annual_rate_pct, dec!(6.75));
        assert_eq!(loan.term_years, 30);
        let market = MarketParameters::default();
        assert_eq!(market.appreciation_pct, dec!(3));
        assert_eq!(market.horizon_years, 10);
        assert_eq!(market.horizon_months(), 120);
    }

    #[test]
    fn test_down_pct_lookup_and_default() {
        let listing = sample_listing();
        let loan = LoanParameters::default();
        assert_eq!(loan.down_pct_for(&listing), dec!(20));
        let loan = loan.with_down_pct(listing.id.clone(), dec!(35));
        assert_eq!(loan.down_pct_for(&listing), dec!(35));
    }

    #[test]
    fn test_unknown_down_pct_key_rejected() {
        let loan = LoanParameters::default().with_down_pct("Nowhere 1A", dec!(20));
        let err = loan
            .validate_down_payment_keys(&[sample_listing()])
            .unwrap_err();
        assert_eq!(err.field(), Some("down_payment_pct.Nowhere 1A"));
    }

    #[test]
    fn test_market_validation() {
        assert!(MarketParameters::new(dec!(-100), 10).validate().is_err());
        assert!(MarketParameters::new(dec!(-99.9), 10).validate().is_ok());
        assert!(MarketParameters::new(dec!(3), 0).validate().is_err());
    }

    #[test]
    fn test_horizon_upper_bound() {
        assert!(MarketParameters::new(dec!(3), 100).validate().is_ok());
        let err = MarketParameters::new(dec!(3), 4_000_000_000)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some("horizon_years"));
    }

    #[test]
    fn test_input_defaults_when_omitted() {
        let json = r#"{"listings":[]}"#;
        let input: ComparisonInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.loan, LoanParameters::default());
        assert_eq!(input.market, MarketParameters::default());
    }
}
