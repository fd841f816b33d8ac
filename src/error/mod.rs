//! Error types for Augur.

pub mod classify;

pub use classify::{ClassifiedError, ErrorCode};

use thiserror::Error;

/// Primary error type for all Augur operations.
#[derive(Error, Debug)]
pub enum AugurError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {message}")]
    Validation { code: ErrorCode, message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model overloaded: {message}")]
    Overloaded { message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("All candidate models unavailable: {}", .attempt_errors.join("; "))]
    AllModelsUnavailable { attempt_errors: Vec<String> },
}

impl AugurError {
    /// Create an API error from a provider HTTP status and body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error with a specific code.
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Whether this error is the provider's temporary-capacity signal.
    ///
    /// Overload is the only failure that earns exponential backoff; everything
    /// else retries on a flat delay so a consistently broken model is
    /// abandoned quickly.
    pub fn is_overloaded(&self) -> bool {
        match self {
            Self::Overloaded { .. } => true,
            Self::Api { status, .. } => *status == 503,
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AugurError>;
