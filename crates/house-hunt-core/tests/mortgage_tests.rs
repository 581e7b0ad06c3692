use house_hunt_core::mortgage::{amortization_schedule, monthly_payment};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Level payment
// ===========================================================================

#[test]
fn test_payment_reference_loan() {
    // $1,325,000 listing at 20% down -> $1,060,000 at 6.75% over 30 years
    let pmt = monthly_payment(dec!(1060000), dec!(6.75), 30).unwrap();
    assert!(
        (pmt - dec!(6875.14)).abs() < dec!(0.005),
        "Expected ~6875.14, got {}",
        pmt
    );
}

#[test]
fn test_payment_zero_rate_exact() {
    for (principal, years) in [(dec!(1060000), 30u32), (dec!(777777), 25), (dec!(1), 15)] {
        let pmt = monthly_payment(principal, Decimal::ZERO, years).unwrap();
        assert_eq!(pmt, principal / Decimal::from(years * 12));
    }
}

#[test]
fn test_payment_increases_with_rate() {
    let mut last = Decimal::ZERO;
    for rate in [dec!(0), dec!(3), dec!(5.5), dec!(6.75), dec!(10)] {
        let pmt = monthly_payment(dec!(400000), rate, 30).unwrap();
        assert!(pmt > last, "payment at {}% should exceed {}", rate, last);
        last = pmt;
    }
}

#[test]
fn test_payment_idempotent() {
    let a = monthly_payment(dec!(1260000), dec!(7.125), 20).unwrap();
    let b = monthly_payment(dec!(1260000), dec!(7.125), 20).unwrap();
    assert_eq!(a, b);
}

// ===========================================================================
// Amortization schedule
// ===========================================================================

#[test]
fn test_schedule_reference_loan() {
    let s = amortization_schedule(dec!(1060000), dec!(6.75), 30).unwrap();
    assert_eq!(s.balances.len(), 360);
    assert!(s.balances[0] < dec!(1060000));
    assert!(s.balances[359].abs() < dec!(0.000001));
}

#[test]
fn test_final_balance_retired_across_terms() {
    for (principal, rate, years) in [
        (dec!(1060000), dec!(6.75), 30u32),
        (dec!(1350000), dec!(3), 15),
        (dec!(1260000), dec!(9.875), 25),
        (dec!(50000), dec!(0.125), 20),
    ] {
        let s = amortization_schedule(principal, rate, years).unwrap();
        let last = *s.balances.last().unwrap();
        assert!(
            last <= principal * dec!(0.000001),
            "{} at {}% over {}y left {}",
            principal,
            rate,
            years,
            last
        );
    }
}

#[test]
fn test_each_month_splits_the_level_payment() {
    let s = amortization_schedule(dec!(1260000), dec!(6.75), 30).unwrap();
    let pmt = monthly_payment(dec!(1260000), dec!(6.75), 30).unwrap();
    assert_eq!(s.monthly_payment, pmt);
    for (p, i) in s.principal.iter().zip(&s.interest) {
        assert!((p + i - pmt).abs() < dec!(0.0000001));
    }
}

#[test]
fn test_interest_declines_principal_grows() {
    let s = amortization_schedule(dec!(800000), dec!(6), 30).unwrap();
    for m in 1..s.len() {
        assert!(s.interest[m] < s.interest[m - 1]);
        assert!(s.principal[m] > s.principal[m - 1]);
    }
}

#[test]
fn test_equity_tracks_balance() {
    let s = amortization_schedule(dec!(500000), dec!(5), 20).unwrap();
    for (b, e) in s.balances.iter().zip(&s.equity) {
        assert_eq!(*e, dec!(500000) - *b);
    }
    assert!((*s.equity.last().unwrap() - dec!(500000)).abs() < dec!(0.000001));
}

#[test]
fn test_schedule_idempotent() {
    let a = amortization_schedule(dec!(945000), dec!(6.875), 25).unwrap();
    let b = amortization_schedule(dec!(945000), dec!(6.875), 25).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_schedule_validation() {
    assert!(amortization_schedule(dec!(-1000), dec!(6), 30).is_err());
    assert!(amortization_schedule(dec!(1000), dec!(6), 0).is_err());
    assert!(amortization_schedule(dec!(1000), dec!(-1), 30).is_err());
}
