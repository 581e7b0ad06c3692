pub mod error;
pub mod listings;
pub mod types;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "appreciation")]
pub mod appreciation;

#[cfg(feature = "comparison")]
pub mod comparison;

pub use error::HouseHuntError;
pub use types::*;

/// Standard result type for all house-hunt operations
pub type HouseHuntResult<T> = Result<T, HouseHuntError>;
