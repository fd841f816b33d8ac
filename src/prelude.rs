//! Convenience re-exports for common use.

pub use crate::config::PersonaProfile;
pub use crate::error::{AugurError, ClassifiedError, ErrorCode, Result};
pub use crate::orchestrator::{repair, run_fallback, Completion, FallbackPolicy};
pub use crate::provider::GenerationClient;
pub use crate::service::ChatService;
pub use crate::types::{
    ChatFailure, ChatReply, ChatRequest, ChatTurn, GenerationConfig, HarmBlockThreshold,
    HarmCategory, PersonaContext, SafetySetting, TurnRole,
};

#[cfg(feature = "gemini")]
pub use crate::provider::gemini::GeminiClient;
