use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::parameters::{ComparisonInput, LoanParameters, MarketParameters};
use super::property::{finance_listing, project_property, PropertyProjection};
use super::table::{comparison_row, ComparisonRow};
use crate::listings::catalog::validate_listings;
use crate::listings::Listing;
use crate::types::{with_metadata, ComputationOutput};
use crate::HouseHuntResult;

/// Per-listing projections plus the side-by-side table, in listing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub per_property: Vec<PropertyProjection>,
    pub table: Vec<ComparisonRow>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Project every listing under shared loan and market parameters.
///
/// Fails on the first invalid listing or parameter; no partial output is
/// produced.
pub fn build_comparison(
    listings: &[Listing],
    loan: &LoanParameters,
    market: &MarketParameters,
) -> HouseHuntResult<ComparisonOutput> {
    loan.validate()?;
    market.validate()?;
    validate_listings(listings)?;
    loan.validate_down_payment_keys(listings)?;

    let mut per_property = Vec::with_capacity(listings.len());
    let mut table = Vec::with_capacity(listings.len());

    for listing in listings {
        let down_pct = loan.down_pct_for(listing);
        listing.validate_down_pct(down_pct)?;

        let financing = finance_listing(listing, loan, down_pct)?;
        log::debug!(
            "{}: down {}% loan {} payment {}",
            listing.id,
            down_pct,
            financing.loan_amount.round_dp(2),
            financing.monthly_mortgage().round_dp(2)
        );

        per_property.push(project_property(listing, &financing, market)?);
        table.push(comparison_row(listing, &financing, market)?);
    }

    Ok(ComparisonOutput {
        per_property,
        table,
    })
}

/// Run a comparison and wrap it in the standard output envelope.
pub fn analyze_comparison(
    input: &ComparisonInput,
) -> HouseHuntResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();

    let output = build_comparison(&input.listings, &input.loan, &input.market)?;
    let warnings = collect_warnings(input, &output);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-Rate Amortization with Monthly-Compounded Appreciation",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Warnings
// ---------------------------------------------------------------------------

fn collect_warnings(input: &ComparisonInput, output: &ComparisonOutput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.market.horizon_years > input.loan.term_years {
        warnings.push(format!(
            "Projection horizon of {} years exceeds the {}-year loan term; \
             loan balance is reported as zero after payoff",
            input.market.horizon_years, input.loan.term_years
        ));
    }

    if input.market.appreciation_pct < Decimal::ZERO {
        warnings.push(format!(
            "Negative appreciation of {}% reduces projected values every month",
            input.market.appreciation_pct
        ));
    }

    for p in &output.per_property {
        if p.loan_amount.is_zero() {
            warnings.push(format!("{}: full cash purchase, no mortgage", p.listing_id));
        }
        if let Some(month) = p.series.total_equity.iter().position(|e| *e < Decimal::ZERO) {
            warnings.push(format!(
                "{}: total equity falls below zero at month {month}",
                p.listing_id
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::model::tests::sample_listing;
    use rust_decimal_macros::dec;

    fn input(loan: LoanParameters, market: MarketParameters) -> ComparisonInput {
        let mut second = sample_listing();
        second.id = "8 Other Ave 2".into();
        second.min_down_pct = dec!(0);
        ComparisonInput {
            listings: vec![sample_listing(), second],
            loan,
            market,
        }
    }

    #[test]
    fn test_one_projection_and_row_per_listing() {
        let i = input(LoanParameters::default(), MarketParameters::default());
        let out = build_comparison(&i.listings, &i.loan, &i.market).unwrap();
        assert_eq!(out.per_property.len(), 2);
        assert_eq!(out.table.len(), 2);
        assert_eq!(out.table[1].listing_id, "8 Other Ave 2");
    }

    #[test]
    fn test_down_pct_below_minimum_aborts() {
        let loan = LoanParameters::default().with_down_pct("12 Test Pl 4C", dec!(5));
        let i = input(loan, MarketParameters::default());
        let err = build_comparison(&i.listings, &i.loan, &i.market).unwrap_err();
        assert_eq!(err.field(), Some("12 Test Pl 4C.down_pct"));
    }

    #[test]
    fn test_invalid_market_aborts() {
        let i = input(LoanParameters::default(), MarketParameters::new(dec!(-120), 10));
        let err = build_comparison(&i.listings, &i.loan, &i.market).unwrap_err();
        assert_eq!(err.field(), Some("appreciation_pct"));
    }

    #[test]
    fn test_envelope_warnings() {
        let loan = LoanParameters::new(dec!(6), 15).with_down_pct("8 Other Ave 2", dec!(100));
        let i = input(loan, MarketParameters::new(dec!(-2), 20));
        let out = analyze_comparison(&i).unwrap();
        let joined = out.warnings.join("\n");
        assert!(joined.contains("exceeds the 15-year loan term"));
        assert!(joined.contains("Negative appreciation"));
        assert!(joined.contains("8 Other Ave 2: full cash purchase"));
        assert!(out.methodology.contains("Amortization"));
    }

    #[test]
    fn test_underwater_warning() {
        let loan = LoanParameters::default().with_down_pct("8 Other Ave 2", dec!(0));
        let i = input(loan, MarketParameters::new(dec!(-3), 5));
        let out = analyze_comparison(&i).unwrap();
        assert!(out
            .warnings
            .iter()
            .any(|w| w.starts_with("8 Other Ave 2: total equity falls below zero")));
    }
}
