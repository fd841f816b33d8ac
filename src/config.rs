//! Persona profiles and environment configuration.
//!
//! Every persona endpoint used to carry its own copy of the retry loop with
//! its own thresholds baked in. Those knobs now live here as data: model
//! preference order, attempt budget, delays, acceptance threshold, and the
//! terminal-marker set the repair pass honors.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{AugurError, Result};
use crate::orchestrator::FallbackPolicy;
use crate::types::GenerationConfig;

pub const DEFAULT_MAX_ATTEMPTS_PER_MODEL: u32 = 3;
pub const DEFAULT_MIN_ACCEPTABLE_LEN: usize = 80;
pub const DEFAULT_FLAT_RETRY_DELAY_MS: u64 = 500;
pub const DEFAULT_OVERLOAD_BACKOFF_BASE_MS: u64 = 1_000;
pub const DEFAULT_REPAIR_FLOOR: usize = 80;

/// Sentence punctuation plus the emoji the personas use as valid closers.
const DEFAULT_TERMINAL_MARKERS: &str = ".!?…🔮✨🌙⭐🌟";

/// Per-persona orchestration settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PersonaProfile {
    pub name: String,
    /// Candidate models, most-preferred first.
    pub model_candidates: Vec<String>,
    pub max_attempts_per_model: u32,
    pub min_acceptable_len: usize,
    pub flat_retry_delay_ms: u64,
    pub overload_backoff_base_ms: u64,
    /// Minimum chars for a sentence-level reconstruction to replace a
    /// truncated response.
    pub repair_floor: usize,
    /// Characters accepted as a valid closing character.
    pub terminal_markers: String,
    /// Generation settings passed through to the provider on every attempt.
    pub generation: GenerationConfig,
}

impl Default for PersonaProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            model_candidates: Vec::new(),
            max_attempts_per_model: DEFAULT_MAX_ATTEMPTS_PER_MODEL,
            min_acceptable_len: DEFAULT_MIN_ACCEPTABLE_LEN,
            flat_retry_delay_ms: DEFAULT_FLAT_RETRY_DELAY_MS,
            overload_backoff_base_ms: DEFAULT_OVERLOAD_BACKOFF_BASE_MS,
            repair_floor: DEFAULT_REPAIR_FLOOR,
            terminal_markers: DEFAULT_TERMINAL_MARKERS.to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

impl PersonaProfile {
    /// Create a profile with default thresholds for the given models.
    pub fn new(name: impl Into<String>, model_candidates: Vec<String>) -> Self {
        Self {
            name: name.into(),
            model_candidates,
            ..Self::default()
        }
    }

    /// The fallback policy this profile configures.
    pub fn fallback_policy(&self) -> FallbackPolicy {
        FallbackPolicy {
            model_candidates: self.model_candidates.clone(),
            max_attempts_per_model: self.max_attempts_per_model,
            min_acceptable_len: self.min_acceptable_len,
            flat_retry_delay: Duration::from_millis(self.flat_retry_delay_ms),
            overload_backoff_base: Duration::from_millis(self.overload_backoff_base_ms),
        }
    }

    /// Terminal markers as chars, for the repair pass.
    pub fn markers(&self) -> Vec<char> {
        self.terminal_markers.chars().collect()
    }

    /// Parse a profile from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| AugurError::Configuration(format!("Invalid profile TOML: {e}")))
    }

    /// Load a profile from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AugurError::Configuration(format!(
                "Failed to read profile {}: {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&text)
    }
}

/// Resolve an API key from the environment, loading `.env` if present.
pub fn api_key_from_env(var: &str) -> Result<String> {
    let _ = dotenvy::dotenv(); // load .env if present, ignore error
    std::env::var(var)
        .map_err(|_| AugurError::Configuration(format!("Missing {var} environment variable")))
}
