//! Inbound request validation.

use crate::error::{AugurError, ErrorCode, Result};
use crate::types::ChatRequest;

/// Maximum user message length, in chars.
pub const MAX_MESSAGE_CHARS: usize = 1500;

/// Check the request shape before any network call is made.
///
/// Pure function of its input; failures carry their own code and message and
/// all map to HTTP 400.
pub fn validate_request(request: &ChatRequest) -> Result<()> {
    if request.context.is_none() {
        return Err(AugurError::validation(
            ErrorCode::MissingContextData,
            "Persona context data is required",
        ));
    }

    let message = request.user_message.as_deref().unwrap_or("");
    if message.trim().is_empty() {
        return Err(AugurError::validation(
            ErrorCode::MissingUserMessage,
            "A user message is required",
        ));
    }

    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(AugurError::validation(
            ErrorCode::MessageTooLong,
            format!("The message exceeds the {MAX_MESSAGE_CHARS} character limit"),
        ));
    }

    Ok(())
}
