//! Chat request and response envelopes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ClassifiedError, ErrorCode};

/// Persona/service data attached to a chat request.
///
/// Opaque to the orchestration core: only its presence is checked here. The
/// prompt-template layer owns its interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaContext {
    pub name: String,
    #[serde(flatten)]
    pub data: serde_json::Map<String, serde_json::Value>,
}

/// One prior exchange in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub text: String,
}

/// Who spoke a turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Inbound chat request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(rename = "contextObject")]
    pub context: Option<PersonaContext>,
    pub user_message: Option<String>,
    /// Prior turns, passed through to the prompt builder. Never persisted
    /// here; conversation state is the caller's responsibility.
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

/// Successful response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub success: bool,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatReply {
    pub fn now(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: response.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Failure response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ChatFailure {
    pub success: bool,
    pub error: String,
    pub code: ErrorCode,
    pub timestamp: DateTime<Utc>,
}

impl ChatFailure {
    pub fn now(classified: &ClassifiedError) -> Self {
        Self {
            success: false,
            error: classified.message.clone(),
            code: classified.code,
            timestamp: Utc::now(),
        }
    }
}
