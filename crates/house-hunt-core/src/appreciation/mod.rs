//! Compound price-appreciation projections.

pub mod projection;

pub use projection::{appreciation_series, equivalent_monthly_rate, AppreciationSeries};
