use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::HouseHuntError;
use crate::types::{pct_to_fraction, Money, Percent, Rate, MAX_YEARS};
use crate::HouseHuntResult;

const MONTHS_PER_YEAR: u32 = 12;

/// Level monthly payment on a fixed-rate loan.
///
/// `annual_rate_pct` is a percentage (6.75 = 6.75%). A zero rate falls back to
/// straight-line repayment `principal / (term_years * 12)`; otherwise the
/// standard annuity formula `P * r(1+r)^n / ((1+r)^n - 1)` is used with the
/// monthly rate `r = annual_rate_pct / 100 / 12`.
pub fn monthly_payment(
    principal: Money,
    annual_rate_pct: Percent,
    term_years: u32,
) -> HouseHuntResult<Money> {
    validate_loan_terms(principal, annual_rate_pct, term_years)?;

    let total_months = term_months(term_years);
    let monthly_rate = monthly_rate(annual_rate_pct);

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(total_months));
    }

    // (1 + r)^n via iterative multiplication
    let mut compound = Decimal::ONE;
    for _ in 0..total_months {
        compound = compound
            .checked_mul(Decimal::ONE + monthly_rate)
            .ok_or_else(|| HouseHuntError::InvalidInput {
                field: "annual_rate_pct".into(),
                reason: format!("Rate of {annual_rate_pct}% over {term_years} years overflows"),
            })?;
    }

    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        return Err(HouseHuntError::DivisionByZero {
            context: "mortgage payment denominator".into(),
        });
    }

    principal
        .checked_mul(monthly_rate)
        .and_then(|v| v.checked_mul(compound))
        .and_then(|v| v.checked_div(denominator))
        .ok_or_else(|| principal_overflow(principal))
}

pub(crate) fn principal_overflow(principal: Money) -> HouseHuntError {
    HouseHuntError::InvalidInput {
        field: "principal".into(),
        reason: format!("Principal of {principal} exceeds representable payment values"),
    }
}

/// Monthly decimal rate from an annual percentage: 6.75 -> 0.005625.
pub fn monthly_rate(annual_rate_pct: Percent) -> Rate {
    pct_to_fraction(annual_rate_pct) / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly payments in a loan of `term_years`.
pub fn term_months(term_years: u32) -> u32 {
    term_years * MONTHS_PER_YEAR
}

/// Shared input boundary for the payment and amortization functions.
pub(crate) fn validate_loan_terms(
    principal: Money,
    annual_rate_pct: Percent,
    term_years: u32,
) -> HouseHuntResult<()> {
    if principal < Decimal::ZERO {
        return Err(HouseHuntError::InvalidInput {
            field: "principal".into(),
            reason: "Loan principal must be non-negative".into(),
        });
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(HouseHuntError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate must be non-negative".into(),
        });
    }
    if term_years < 1 {
        return Err(HouseHuntError::InvalidInput {
            field: "term_years".into(),
            reason: "Loan term must be at least 1 year".into(),
        });
    }
    // Caps the compounding loop; no real mortgage runs this long.
    if term_years > MAX_YEARS {
        return Err(HouseHuntError::InvalidInput {
            field: "term_years".into(),
            reason: format!("Loan term must not exceed {MAX_YEARS} years"),
        });
    }
    if annual_rate_pct > dec!(100) {
        return Err(HouseHuntError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Interest rate must not exceed 100%".into(),
        });
    }
    Ok(())
}
