//! Error types for omnicalc

use thiserror::Error;

/// Main error type for omnicalc operations
///
/// Every public operation returns one of these kinds; none of them should
/// escape as a panic, and a failed conversion never degrades to 0 or NaN.
#[derive(Error, Debug)]
pub enum OmnicalcError {
    /// Currency amount failed validation (empty, non-numeric, non-finite or
    /// non-positive input)
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unit value failed validation (non-finite input)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Unit symbol is not part of the requested family
    #[error("Unknown unit '{unit}' for family '{family}'")]
    UnknownUnit { family: String, unit: String },

    /// Calculator or parser input out of range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rate provider could not be reached or refused the request
    #[error("Rate provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Rate provider answered with a payload we cannot interpret
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for omnicalc operations
pub type Result<T> = std::result::Result<T, OmnicalcError>;
