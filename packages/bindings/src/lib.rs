use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use house_hunt_core::comparison::ComparisonInput;
use house_hunt_core::listings::Catalog;
use house_hunt_core::{appreciation, comparison, mortgage};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

#[derive(Deserialize)]
struct LoanRequest {
    principal: Decimal,
    annual_rate_pct: Decimal,
    term_years: u32,
}

#[derive(Deserialize)]
struct AppreciationRequest {
    start_price: Decimal,
    annual_pct: Decimal,
    years: u32,
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[napi]
pub fn monthly_payment(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage::monthly_payment(input.principal, input.annual_rate_pct, input.term_years)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: LoanRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage::amortization_schedule(input.principal, input.annual_rate_pct, input.term_years)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Appreciation
// ---------------------------------------------------------------------------

#[napi]
pub fn appreciation_series(input_json: String) -> NapiResult<String> {
    let input: AppreciationRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        appreciation::appreciation_series(input.start_price, input.annual_pct, input.years)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn build_comparison(input_json: String) -> NapiResult<String> {
    let input: ComparisonInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = comparison::analyze_comparison(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sample_catalog() -> NapiResult<String> {
    let catalog = Catalog::sample().map_err(to_napi_error)?;
    serde_json::to_string(&catalog).map_err(to_napi_error)
}
