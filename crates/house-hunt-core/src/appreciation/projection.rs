use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::HouseHuntError;
use crate::types::{pct_to_fraction, Money, Percent, Rate, MAX_YEARS};
use crate::HouseHuntResult;

/// Monthly property-value estimates from a starting price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppreciationSeries {
    pub start_price: Money,
    pub annual_rate_pct: Percent,
    /// Monthly rate that compounds to exactly `annual_rate_pct` over 12 months.
    pub monthly_rate: Rate,
    /// Value at each month `0..=years*12`; index 0 is the starting price.
    pub values: Vec<Money>,
}

impl AppreciationSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `month`, clamped to the last projected month.
    pub fn value_at(&self, month: usize) -> Money {
        let idx = month.min(self.values.len().saturating_sub(1));
        self.values.get(idx).copied().unwrap_or(self.start_price)
    }

    pub fn final_value(&self) -> Money {
        self.values.last().copied().unwrap_or(self.start_price)
    }
}

/// Monthly rate equivalent to an annual percentage under monthly compounding:
/// `(1 + annual_pct/100)^(1/12) - 1`.
pub fn equivalent_monthly_rate(annual_pct: Percent) -> HouseHuntResult<Rate> {
    if annual_pct <= dec!(-100) {
        return Err(HouseHuntError::InvalidInput {
            field: "annual_pct".into(),
            reason: "Appreciation rate must be greater than -100%".into(),
        });
    }
    if annual_pct.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let growth = Decimal::ONE + pct_to_fraction(annual_pct);
    let monthly_growth = growth
        .checked_powd(Decimal::ONE / dec!(12))
        .ok_or_else(|| HouseHuntError::InvalidInput {
            field: "annual_pct".into(),
            reason: format!("Cannot derive a monthly rate from {annual_pct}%"),
        })?;

    Ok(monthly_growth - Decimal::ONE)
}

/// Project a property value month by month for `years` years.
///
/// Negative rates are valid and produce a decreasing series. Values are not
/// floored; they stay positive for any rate above -100%.
pub fn appreciation_series(
    start_price: Money,
    annual_pct: Percent,
    years: u32,
) -> HouseHuntResult<AppreciationSeries> {
    if start_price < Decimal::ZERO {
        return Err(HouseHuntError::InvalidInput {
            field: "start_price".into(),
            reason: "Starting price must be non-negative".into(),
        });
    }
    if years < 1 {
        return Err(HouseHuntError::InvalidInput {
            field: "years".into(),
            reason: "Projection horizon must be at least 1 year".into(),
        });
    }
    if years > MAX_YEARS {
        return Err(HouseHuntError::InvalidInput {
            field: "years".into(),
            reason: format!("Projection horizon must not exceed {MAX_YEARS} years"),
        });
    }

    let monthly_rate = equivalent_monthly_rate(annual_pct)?;
    let factor = Decimal::ONE + monthly_rate;
    let months = years as usize * 12;

    let mut values = Vec::with_capacity(months + 1);
    let mut value = start_price;
    values.push(value);
    for _ in 0..months {
        value = value
            .checked_mul(factor)
            .ok_or_else(|| HouseHuntError::InvalidInput {
                field: "annual_pct".into(),
                reason: format!("{annual_pct}% over {years} years exceeds representable values"),
            })?;
        values.push(value);
    }

    Ok(AppreciationSeries {
        start_price,
        annual_rate_pct: annual_pct,
        monthly_rate,
        values,
    })
}
