//! Error types for premium calculations and input loading

use thiserror::Error;

/// Result alias used throughout the crate
pub type ActuarialResult<T> = Result<T, ActuarialError>;

/// Errors raised while building pricing inputs or loading them from disk
#[derive(Error, Debug)]
pub enum ActuarialError {
    /// Assumption values outside their allowed ranges; the offending
    /// values are kept in the fields, not the message
    #[error("Invalid assumption values.")]
    InvalidAssumption {
        mortality_rate: f64,
        expense_load: f64,
        interest_rate: f64,
    },

    /// Policy parameters that cannot be priced
    #[error("Invalid policy: {reason}")]
    InvalidPolicy { reason: String },

    /// Policy type discriminator with no matching variant
    #[error("Unknown policy type: {0}")]
    UnknownPolicyType(String),

    /// Text that could not be read as the expected value
    #[error("{0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ActuarialError {
    pub(crate) fn invalid_policy(reason: impl Into<String>) -> Self {
        ActuarialError::InvalidPolicy { reason: reason.into() }
    }
}
