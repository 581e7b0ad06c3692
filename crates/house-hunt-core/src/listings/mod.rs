//! Listing data model and the injectable listing catalog.

pub mod catalog;
pub mod model;
pub mod price_history;

pub use catalog::Catalog;
pub use model::{Listing, PriceObservation, DEFAULT_DOWN_PCT};
pub use price_history::{price_history_series, PriceHistoryPoint, PriceHistorySeries};
