//! Chat service facade: validate, orchestrate, repair, wrap.

pub mod validate;

pub use validate::{validate_request, MAX_MESSAGE_CHARS};

use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PersonaProfile;
use crate::error::ClassifiedError;
use crate::orchestrator::{repair, run_fallback};
use crate::provider::GenerationClient;
use crate::types::{ChatReply, ChatRequest};

/// One reusable entry point for every persona endpoint.
///
/// The prompt text arrives already built; persona templates are string
/// plumbing owned by the caller. This service owns everything between the
/// validated request and the finished envelope.
pub struct ChatService<C> {
    client: C,
}

impl<C: GenerationClient> ChatService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Turn a user request into a finished persona response.
    ///
    /// Failures come back as [`ClassifiedError`] so the HTTP layer can map
    /// status codes; intermediate attempt errors are logged, never surfaced.
    pub async fn respond(
        &self,
        profile: &PersonaProfile,
        request: &ChatRequest,
        prompt: &str,
    ) -> std::result::Result<ChatReply, ClassifiedError> {
        let request_id = Uuid::new_v4();

        if let Err(e) = validate_request(request) {
            warn!(request_id = %request_id, error = %e, "request rejected");
            return Err(e.classify());
        }

        info!(
            request_id = %request_id,
            persona = profile.name.as_str(),
            "chat request accepted"
        );

        let policy = profile.fallback_policy();
        match run_fallback(&self.client, prompt, &profile.generation, &policy).await {
            Ok(completion) => {
                let text = repair(&completion.text, &profile.markers(), profile.repair_floor);
                info!(
                    request_id = %request_id,
                    model = completion.used_model.as_str(),
                    "chat request completed"
                );
                Ok(ChatReply::now(text))
            }
            Err(e) => {
                warn!(request_id = %request_id, error = %e, "chat request failed");
                Err(e.classify())
            }
        }
    }
}
