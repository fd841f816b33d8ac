//! Terminal error classification.
//!
//! Every error that escapes an orchestration call resolves to exactly one
//! [`ClassifiedError`] carrying an HTTP status, a machine-readable code, and
//! a user-facing message. Typed variants are matched first; substring
//! sniffing on provider messages is only a last resort for errors that
//! arrive unclassified.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::AugurError;

/// Machine-readable error code surfaced to API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingContextData,
    MissingUserMessage,
    MessageTooLong,
    ValidationError,
    ServiceOverloaded,
    QuotaExceeded,
    SafetyFilter,
    AuthError,
    AllModelsUnavailable,
    InternalError,
}

/// A terminal failure, ready for the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedError {
    pub http_status: u16,
    pub code: ErrorCode,
    pub message: String,
}

impl ClassifiedError {
    fn new(http_status: u16, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            http_status,
            code,
            message: message.into(),
        }
    }
}

impl AugurError {
    /// Classify this error into a stable, user-presentable form.
    ///
    /// Total over every variant; first match wins. Intermediate attempt
    /// failures never reach this point, only terminal outcomes do.
    pub fn classify(&self) -> ClassifiedError {
        match self {
            Self::Validation { code, message } => {
                ClassifiedError::new(400, *code, message.clone())
            }
            Self::Overloaded { .. } => ClassifiedError::new(
                503,
                ErrorCode::ServiceOverloaded,
                "The service is temporarily overloaded. Please try again in a moment.",
            ),
            Self::AllModelsUnavailable { .. } => {
                ClassifiedError::new(503, ErrorCode::AllModelsUnavailable, self.to_string())
            }
            Self::Api { status, message } => classify_api(*status, message),
            other => sniff_message(&other.to_string()).unwrap_or_else(internal_error),
        }
    }
}

/// Classify a provider HTTP error by status, then by message content.
fn classify_api(status: u16, message: &str) -> ClassifiedError {
    match status {
        503 => ClassifiedError::new(
            503,
            ErrorCode::ServiceOverloaded,
            "The service is temporarily overloaded. Please try again in a moment.",
        ),
        429 => quota_exceeded(),
        401 | 403 => auth_error(),
        _ => sniff_message(message).unwrap_or_else(internal_error),
    }
}

/// Last-resort substring classification for unstructured provider messages.
fn sniff_message(message: &str) -> Option<ClassifiedError> {
    let lower = message.to_lowercase();
    if lower.contains("quota") || lower.contains("limit") {
        return Some(quota_exceeded());
    }
    if lower.contains("safety") || lower.contains("content policy") || lower.contains("blocked") {
        return Some(ClassifiedError::new(
            400,
            ErrorCode::SafetyFilter,
            "The message could not be answered because it does not meet content policies.",
        ));
    }
    if lower.contains("api key") || lower.contains("authentication") || lower.contains("unauthorized")
    {
        return Some(auth_error());
    }
    None
}

fn quota_exceeded() -> ClassifiedError {
    ClassifiedError::new(
        429,
        ErrorCode::QuotaExceeded,
        "The query limit has been reached. Please try again later.",
    )
}

fn auth_error() -> ClassifiedError {
    ClassifiedError::new(
        401,
        ErrorCode::AuthError,
        "Authentication error with the generation provider.",
    )
}

fn internal_error() -> ClassifiedError {
    ClassifiedError::new(500, ErrorCode::InternalError, "Internal server error.")
}
