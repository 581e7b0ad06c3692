use thiserror::Error;

#[derive(Debug, Error)]
pub enum HouseHuntError {
    /// Out-of-range or non-positive input, rejected before any computation.
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl HouseHuntError {
    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            HouseHuntError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HouseHuntError {
    fn from(e: serde_json::Error) -> Self {
        HouseHuntError::SerializationError(e.to_string())
    }
}
