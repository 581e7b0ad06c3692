//! Month-by-month amortization of a fixed-rate loan.
//!
//! Every month the level payment is split into interest on the opening
//! balance and principal. The reported balance is floored at zero so that
//! floating residue in the final month never surfaces as a negative balance,
//! and equity-from-payments is measured against that floored balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment::{
    monthly_payment, monthly_rate, principal_overflow, term_months, validate_loan_terms,
};
use crate::types::{Money, Percent};
use crate::HouseHuntResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Full amortization schedule, one entry per month in four parallel series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Original loan principal.
    pub loan_amount: Money,
    /// Level monthly payment.
    pub monthly_payment: Money,
    /// Remaining balance after each month's payment (floored at zero).
    pub balances: Vec<Money>,
    /// Principal portion of each payment.
    pub principal: Vec<Money>,
    /// Interest portion of each payment.
    pub interest: Vec<Money>,
    /// Cumulative equity from payments: loan amount minus remaining balance.
    pub equity: Vec<Money>,
    /// Sum of all interest portions.
    pub total_interest: Money,
    /// Sum of all payments over the life of the loan.
    pub total_paid: Money,
}

/// A single month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based payment number.
    pub month: u32,
    pub balance: Money,
    pub principal: Money,
    pub interest: Money,
    pub equity: Money,
}

impl AmortizationSchedule {
    /// Number of monthly payments.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Row for a 1-based payment number.
    pub fn row(&self, month: u32) -> Option<AmortizationRow> {
        let idx = (month as usize).checked_sub(1)?;
        Some(AmortizationRow {
            month,
            balance: *self.balances.get(idx)?,
            principal: self.principal[idx],
            interest: self.interest[idx],
            equity: self.equity[idx],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = AmortizationRow> + '_ {
        (1..=self.len() as u32).filter_map(move |m| self.row(m))
    }

    /// Remaining balance after `payments` monthly payments.
    ///
    /// Zero payments is the original loan amount; anything past the final
    /// payment is the paid-off balance of zero.
    pub fn balance_after(&self, payments: usize) -> Money {
        if payments == 0 {
            return self.loan_amount;
        }
        self.balances
            .get(payments - 1)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the complete amortization schedule for a fixed-rate loan.
///
/// The output always holds exactly `term_years * 12` months and ends with the
/// loan fully retired.
pub fn amortization_schedule(
    principal: Money,
    annual_rate_pct: Percent,
    term_years: u32,
) -> HouseHuntResult<AmortizationSchedule> {
    validate_loan_terms(principal, annual_rate_pct, term_years)?;

    let payment = monthly_payment(principal, annual_rate_pct, term_years)?;
    let rate = monthly_rate(annual_rate_pct);
    let months = term_months(term_years) as usize;

    let mut balances = Vec::with_capacity(months);
    let mut principal_parts = Vec::with_capacity(months);
    let mut interest_parts = Vec::with_capacity(months);
    let mut equity = Vec::with_capacity(months);
    let mut total_interest = Decimal::ZERO;

    let mut balance = principal;
    for _ in 0..months {
        let interest = balance * rate;
        let principal_paid = payment - interest;
        balance -= principal_paid;

        let reported = balance.max(Decimal::ZERO);
        balances.push(reported);
        principal_parts.push(principal_paid);
        interest_parts.push(interest);
        equity.push(principal - reported);
        total_interest += interest;
    }

    let total_paid = payment
        .checked_mul(Decimal::from(months as u64))
        .ok_or_else(|| principal_overflow(principal))?;

    Ok(AmortizationSchedule {
        loan_amount: principal,
        monthly_payment: payment,
        balances,
        principal: principal_parts,
        interest: interest_parts,
        equity,
        total_interest,
        total_paid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_schedule_length_matches_term() {
        let s = amortization_schedule(dec!(300000), dec!(6), 15).unwrap();
        assert_eq!(s.len(), 180);
        assert_eq!(s.principal.len(), 180);
        assert_eq!(s.interest.len(), 180);
        assert_eq!(s.equity.len(), 180);
    }

    #[test]
    fn test_first_year_balance() {
        // 100k at 5% over 10 years: balance after 12 payments ~92,092.56
        let s = amortization_schedule(dec!(100000), dec!(5), 10).unwrap();
        let bal = s.balance_after(12);
        assert!((bal - dec!(92092.56)).abs() < dec!(0.01), "got {bal}");
        assert!((s.equity[11] - dec!(7907.44)).abs() < dec!(0.01));
    }

    #[test]
    fn test_first_month_split() {
        // 1,060,000 * 0.005625 = 5962.50 interest in month one
        let s = amortization_schedule(dec!(1060000), dec!(6.75), 30).unwrap();
        assert_eq!(s.interest[0], dec!(5962.50));
        assert_eq!(s.principal[0], s.monthly_payment - dec!(5962.50));
    }

    #[test]
    fn test_balance_non_increasing_and_retired() {
        let s = amortization_schedule(dec!(450000), dec!(7.25), 20).unwrap();
        for w in s.balances.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert!(s.balances.last().unwrap().abs() < dec!(0.000001));
        assert!(s.balances.iter().all(|b| *b >= Decimal::ZERO));
    }

    #[test]
    fn test_zero_rate_schedule() {
        let s = amortization_schedule(dec!(240000), dec!(0), 20).unwrap();
        assert_eq!(s.monthly_payment, dec!(1000));
        assert!(s.interest.iter().all(|i| i.is_zero()));
        assert!(s.principal.iter().all(|p| *p == dec!(1000)));
        assert_eq!(s.balances[0], dec!(239000));
        assert_eq!(*s.balances.last().unwrap(), Decimal::ZERO);
        assert_eq!(s.total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_zero_principal_schedule() {
        let s = amortization_schedule(Decimal::ZERO, dec!(6.75), 30).unwrap();
        assert_eq!(s.len(), 360);
        assert!(s.balances.iter().all(|b| b.is_zero()));
        assert!(s.equity.iter().all(|e| e.is_zero()));
    }

    #[test]
    fn test_totals_consistent() {
        let s = amortization_schedule(dec!(200000), dec!(4.5), 30).unwrap();
        let interest_sum: Decimal = s.interest.iter().copied().sum();
        assert_eq!(s.total_interest, interest_sum);
        assert!((s.total_paid - s.total_interest - dec!(200000)).abs() < dec!(0.01));
    }

    #[test]
    fn test_row_access() {
        let s = amortization_schedule(dec!(120000), dec!(3), 10).unwrap();
        assert!(s.row(0).is_none());
        assert!(s.row(121).is_none());
        let last = s.row(120).unwrap();
        assert_eq!(last.month, 120);
        assert_eq!(last.balance, s.balances[119]);
        assert_eq!(s.rows().count(), 120);
    }

    #[test]
    fn test_balance_after_bounds() {
        let s = amortization_schedule(dec!(120000), dec!(3), 10).unwrap();
        assert_eq!(s.balance_after(0), dec!(120000));
        assert_eq!(s.balance_after(500), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_term_rejected() {
        assert!(amortization_schedule(dec!(100000), dec!(5), 0).is_err());
    }

    #[test]
    fn test_oversized_principal_is_error_not_panic() {
        let err = amortization_schedule(dec!(1000000000000000000), dec!(100), 30).unwrap_err();
        assert_eq!(err.field(), Some("principal"));
    }
}
