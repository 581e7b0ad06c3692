//! Cross-listing comparison: combines financing, amortization and
//! appreciation for every listing under one set of parameters.

pub mod aggregate;
pub mod parameters;
pub mod property;
pub mod table;

pub use aggregate::{analyze_comparison, build_comparison, ComparisonOutput};
pub use parameters::{ComparisonInput, LoanParameters, MarketParameters};
pub use property::{CostBreakdown, CostShare, Milestone, PropertyProjection, ProjectionSeries};
pub use table::ComparisonRow;
