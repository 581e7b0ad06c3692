use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HouseHuntError;
use crate::types::{Money, Percent};
use crate::HouseHuntResult;

/// Down payment offered when a listing allows less (20%).
pub const DEFAULT_DOWN_PCT: Percent = dec!(20);

/// One observed asking price, labelled by period (`MM/YYYY`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub period: String,
    pub price: Money,
}

/// A property listing. Immutable input to the projection engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique identifier, used to key per-listing down payments
    pub id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub neighborhood: String,
    /// Asking price
    pub price: Money,
    /// Floor area in square feet, for price per area
    pub area_sqft: Decimal,
    /// Monthly property tax
    pub taxes_monthly: Money,
    /// Monthly association / common charges
    pub common_charges_monthly: Money,
    /// Minimum down payment the building allows, as a percentage (0-100)
    #[serde(default)]
    pub min_down_pct: Percent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baths: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_abatement_note: Option<String>,
    /// Informational only; never consumed by the projections
    #[serde(default)]
    pub price_history: Vec<PriceObservation>,
}

impl Listing {
    /// Display name: the address when present, otherwise the identifier.
    pub fn display_name(&self) -> &str {
        if self.address.is_empty() {
            &self.id
        } else {
            &self.address
        }
    }

    pub fn price_per_area(&self) -> Money {
        if self.area_sqft.is_zero() {
            return Decimal::ZERO;
        }
        self.price / self.area_sqft
    }

    /// Default down payment: 20%, or the listing minimum if that is higher.
    pub fn default_down_pct(&self) -> Percent {
        self.min_down_pct.max(DEFAULT_DOWN_PCT)
    }

    /// Recurring monthly costs other than the mortgage.
    pub fn monthly_fixed_costs(&self) -> Money {
        self.taxes_monthly + self.common_charges_monthly
    }

    /// Check the listing facts. Field names are prefixed with the listing id.
    pub fn validate(&self) -> HouseHuntResult<()> {
        if self.id.trim().is_empty() {
            return Err(HouseHuntError::InvalidInput {
                field: "id".into(),
                reason: "Listing identifier must not be empty".into(),
            });
        }
        if self.price <= Decimal::ZERO {
            return Err(self.invalid("price", "Asking price must be positive"));
        }
        if self.area_sqft <= Decimal::ZERO {
            return Err(self.invalid("area_sqft", "Floor area must be positive"));
        }
        if self.taxes_monthly < Decimal::ZERO {
            return Err(self.invalid("taxes_monthly", "Monthly taxes must be non-negative"));
        }
        if self.common_charges_monthly < Decimal::ZERO {
            return Err(self.invalid(
                "common_charges_monthly",
                "Monthly common charges must be non-negative",
            ));
        }
        if self.min_down_pct < Decimal::ZERO || self.min_down_pct > Decimal::ONE_HUNDRED {
            return Err(self.invalid(
                "min_down_pct",
                "Minimum down payment must be between 0 and 100",
            ));
        }
        Ok(())
    }

    /// Check a proposed down payment against this listing's minimum.
    pub fn validate_down_pct(&self, down_pct: Percent) -> HouseHuntResult<()> {
        if down_pct < self.min_down_pct || down_pct > Decimal::ONE_HUNDRED {
            return Err(self.invalid(
                "down_pct",
                &format!(
                    "Down payment {down_pct}% must be between the listing minimum {}% and 100%",
                    self.min_down_pct
                ),
            ));
        }
        Ok(())
    }

    fn invalid(&self, field: &str, reason: &str) -> HouseHuntError {
        HouseHuntError::InvalidInput {
            field: format!("{}.{field}", self.id),
            reason: reason.into(),
        }
    }
}
