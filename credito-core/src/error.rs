/// Error types for talking to the créditos backend
use thiserror::Error;

/// Failure of a request against the REST API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CreditoError {
    /// The backend answered with a non-success status. `message` is the
    /// server's `error` field, or the caller's fallback when absent.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// A success response whose body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Type alias for Results using CreditoError
pub type Result<T> = std::result::Result<T, CreditoError>;
