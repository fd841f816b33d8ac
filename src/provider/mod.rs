//! Generation client trait and implementations.

pub mod http;

#[cfg(feature = "gemini")]
pub mod gemini;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::GenerationConfig;

/// Capability contract for a hosted text-generation provider.
///
/// The orchestrator drives providers exclusively through this trait: one
/// model identifier, one prompt, one configuration in; finished text or a
/// classified error out. Implementations map their transport's failure modes
/// onto [`crate::error::AugurError`], using the `Overloaded` variant for the
/// provider's temporary-capacity signal.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String>;
}
