use house_hunt_core::comparison::{
    analyze_comparison, build_comparison, ComparisonInput, LoanParameters, MarketParameters,
};
use house_hunt_core::listings::{price_history_series, Catalog};
use house_hunt_core::mortgage::monthly_payment;
use house_hunt_core::HouseHuntError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const SCHERMERHORN: &str = "319 Schermerhorn St 11B";
const BERGEN: &str = "906 Bergen St 1A";
const BRIDGE: &str = "365 Bridge St 23B";

/// Each listing at its minimum down payment: 20% / 0% / 10%.
fn minimum_down_loan() -> LoanParameters {
    LoanParameters::new(dec!(6.75), 30)
        .with_down_pct(SCHERMERHORN, dec!(20))
        .with_down_pct(BERGEN, dec!(0))
        .with_down_pct(BRIDGE, dec!(10))
}

// ===========================================================================
// Sample catalog at default market parameters
// ===========================================================================

#[test]
fn test_total_monthly_matches_independent_sum() {
    let catalog = Catalog::sample().unwrap();
    let loan = minimum_down_loan();
    let market = MarketParameters::new(dec!(3), 10);
    let out = build_comparison(&catalog.listings, &loan, &market).unwrap();

    assert_eq!(out.table.len(), 3);
    for (row, listing) in out.table.iter().zip(&catalog.listings) {
        let down = loan.down_pct_for(listing);
        let principal = listing.price * (Decimal::ONE - down / dec!(100));
        let mortgage = monthly_payment(principal, dec!(6.75), 30).unwrap();
        let expected = mortgage + listing.taxes_monthly + listing.common_charges_monthly;
        assert_eq!(row.total_monthly.round_dp(2), expected.round_dp(2));
    }
}

#[test]
fn test_sample_reference_figures() {
    let catalog = Catalog::sample().unwrap();
    let out = build_comparison(
        &catalog.listings,
        &minimum_down_loan(),
        &MarketParameters::default(),
    )
    .unwrap();

    // 1,060,000 loan -> 6875.14 + 424 + 2124
    let schermerhorn = &out.table[0];
    assert_eq!(schermerhorn.listing_id, SCHERMERHORN);
    assert_eq!(schermerhorn.total_monthly.round_dp(2), dec!(9423.14));

    // Full-price loan of 1,350,000 -> 8756.07 + 1548 + 1000
    let bergen = &out.table[1];
    assert_eq!(bergen.down_payment, Decimal::ZERO);
    assert_eq!(bergen.total_monthly.round_dp(2), dec!(11304.07));

    // 1,260,000 loan -> 8172.34 + 1575 + 1918
    let bridge = &out.table[2];
    assert_eq!(bridge.down_payment, dec!(140000));
    assert_eq!(bridge.total_monthly.round_dp(2), dec!(11665.34));
    assert_eq!(bridge.price_per_sqft.round_dp(0), dec!(1180));
}

#[test]
fn test_default_down_payment_is_twenty_percent() {
    let catalog = Catalog::sample().unwrap();
    let out = build_comparison(
        &catalog.listings,
        &LoanParameters::default(),
        &MarketParameters::default(),
    )
    .unwrap();
    let downs: Vec<Decimal> = out.per_property.iter().map(|p| p.down_pct).collect();
    assert_eq!(downs, vec![dec!(20), dec!(20), dec!(20)]);
}

#[test]
fn test_per_property_series_consistency() {
    let catalog = Catalog::sample().unwrap();
    let market = MarketParameters::new(dec!(3), 10);
    let out = build_comparison(&catalog.listings, &minimum_down_loan(), &market).unwrap();

    for p in &out.per_property {
        assert_eq!(p.series.property_value.len(), 121);
        assert_eq!(p.series.loan_balance[0], p.loan_amount);
        for m in 0..121 {
            assert_eq!(
                p.series.total_equity[m],
                p.series.property_value[m] - p.series.loan_balance[m]
            );
        }
        // Per-property 10-year milestone agrees with the table at full horizon
        let row = out.table.iter().find(|r| r.listing_id == p.listing_id).unwrap();
        let ten = p.milestone(10).unwrap();
        assert!((ten.value - row.value_10yr).abs() < dec!(0.000001));
        assert!((ten.equity - row.equity_10yr).abs() < dec!(0.000001));
    }
}

#[test]
fn test_zero_down_listing_starts_with_zero_equity() {
    let catalog = Catalog::sample().unwrap();
    let out = build_comparison(
        &catalog.listings,
        &minimum_down_loan(),
        &MarketParameters::default(),
    )
    .unwrap();
    let bergen = &out.per_property[1];
    assert_eq!(bergen.series.total_equity[0], Decimal::ZERO);
    assert!(bergen.series.total_equity[120] > Decimal::ZERO);
}

#[test]
fn test_comparison_idempotent() {
    let catalog = Catalog::sample().unwrap();
    let loan = minimum_down_loan();
    let market = MarketParameters::new(dec!(4.25), 15);
    let a = build_comparison(&catalog.listings, &loan, &market).unwrap();
    let b = build_comparison(&catalog.listings, &loan, &market).unwrap();
    assert_eq!(a, b);
}

// ===========================================================================
// Fail-fast validation
// ===========================================================================

#[test]
fn test_down_payment_below_minimum_names_listing() {
    let catalog = Catalog::sample().unwrap();
    let loan = minimum_down_loan().with_down_pct(BRIDGE, dec!(5));
    let err = build_comparison(&catalog.listings, &loan, &MarketParameters::default()).unwrap_err();
    match err {
        HouseHuntError::InvalidInput { field, .. } => {
            assert_eq!(field, "365 Bridge St 23B.down_pct")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_listing_in_down_payments() {
    let catalog = Catalog::sample().unwrap();
    let loan = minimum_down_loan().with_down_pct("1 Nowhere Rd", dec!(20));
    let err = build_comparison(&catalog.listings, &loan, &MarketParameters::default()).unwrap_err();
    assert_eq!(err.field(), Some("down_payment_pct.1 Nowhere Rd"));
}

#[test]
fn test_zero_term_rejected() {
    let catalog = Catalog::sample().unwrap();
    let loan = LoanParameters::new(dec!(6.75), 0);
    let err = build_comparison(&catalog.listings, &loan, &MarketParameters::default()).unwrap_err();
    assert_eq!(err.field(), Some("term_years"));
}

#[test]
fn test_unbounded_horizon_rejected_before_projection() {
    let catalog = Catalog::sample().unwrap();
    let market = MarketParameters::new(dec!(3), 4_000_000_000);
    let err = build_comparison(&catalog.listings, &minimum_down_loan(), &market).unwrap_err();
    assert_eq!(err.field(), Some("horizon_years"));
}

// ===========================================================================
// Envelope and JSON input
// ===========================================================================

#[test]
fn test_analyze_from_json_input() {
    let catalog_json = serde_json::to_value(Catalog::sample().unwrap()).unwrap();
    let input_json = serde_json::json!({
        "listings": catalog_json["listings"],
        "loan": {
            "annual_rate_pct": "6.75",
            "term_years": 15,
            "down_payment_pct": { "906 Bergen St 1A": "0" }
        },
        "market": { "appreciation_pct": "3", "horizon_years": 30 }
    });
    let input: ComparisonInput = serde_json::from_value(input_json).unwrap();
    let out = analyze_comparison(&input).unwrap();

    assert_eq!(out.result.per_property.len(), 3);
    assert_eq!(out.result.per_property[0].series.loan_balance.len(), 361);
    assert!(out.warnings.iter().any(|w| w.contains("15-year loan term")));
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_sample_price_history_parses() {
    let catalog = Catalog::sample().unwrap();
    for listing in &catalog.listings {
        let history = price_history_series(listing).unwrap();
        assert_eq!(history.points.len(), listing.price_history.len());
    }
    let schermerhorn = price_history_series(catalog.get(SCHERMERHORN).unwrap()).unwrap();
    assert_eq!(schermerhorn.net_change, dec!(-55443));
}
