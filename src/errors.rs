//! Error types for infrastructure validation

use thiserror::Error;

use crate::validation::ErrorList;

/// Errors that can occur around infrastructure validation
///
/// Validation findings themselves are data ([`ErrorList`]); this type only
/// covers loading inputs and surfacing a rejected configuration.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration failed validation
    #[error("infrastructure config rejected with {} violation(s)", .0.len())]
    Rejected(ErrorList),
}

/// Result type for infrastructure operations
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::Deserialization(err.to_string())
    }
}
