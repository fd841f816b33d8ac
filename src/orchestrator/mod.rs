//! Sequential model fallback with bounded per-model retries.
//!
//! One orchestration call walks an ordered list of candidate models. Each
//! model gets a bounded attempt budget; the provider's overload signal earns
//! exponential backoff, every other failure a flat delay. The first
//! acceptable response wins and ends all further work. Attempts are strictly
//! sequential; latency is traded for predictable ordering and simple error
//! attribution.

pub mod repair;

pub use repair::repair;

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{AugurError, Result};
use crate::provider::GenerationClient;
use crate::types::GenerationConfig;

/// How one persona's fallback loop is parameterized.
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    /// Candidate model identifiers, most-preferred first. Ordering encodes
    /// business preference, not capability discovery.
    pub model_candidates: Vec<String>,
    /// Attempt budget per model before advancing to the next candidate.
    pub max_attempts_per_model: u32,
    /// Minimum trimmed char count for a response to be accepted.
    pub min_acceptable_len: usize,
    /// Delay between retries for ordinary failures.
    pub flat_retry_delay: Duration,
    /// Base delay for the overload signal; doubles per attempt.
    pub overload_backoff_base: Duration,
}

/// A finished orchestration: the accepted text and the model that produced it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub used_model: String,
}

/// Why a single (model, attempt) pair produced no acceptable text.
#[derive(Debug, Error)]
enum AttemptFailure {
    #[error("response below acceptable length")]
    ShortResponse,
    #[error("{0}")]
    Overloaded(String),
    #[error("{0}")]
    Provider(String),
}

/// What to do after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Retry { delay: Duration },
    NextModel,
}

/// Whether a returned text is acceptable: non-empty and at least `min_len`
/// chars after trimming.
pub fn is_acceptable(text: &str, min_len: usize) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_len
}

/// Run the fallback loop until one model yields an acceptable text or every
/// candidate's attempt budget is spent.
///
/// On exhaustion the error aggregates one `"{model}: {message}"` entry per
/// failed attempt, for diagnostics only; never shown verbatim to end users.
pub async fn run_fallback(
    client: &dyn GenerationClient,
    prompt: &str,
    config: &GenerationConfig,
    policy: &FallbackPolicy,
) -> Result<Completion> {
    let mut attempt_errors = Vec::new();

    for model in &policy.model_candidates {
        for attempt in 0..policy.max_attempts_per_model {
            debug!(model = model.as_str(), attempt = attempt + 1, "generation attempt");

            match attempt_once(client, model, prompt, config, policy.min_acceptable_len).await {
                Ok(text) => {
                    debug!(model = model.as_str(), attempt = attempt + 1, "accepted response");
                    return Ok(Completion {
                        text,
                        used_model: model.clone(),
                    });
                }
                Err(failure) => {
                    attempt_errors.push(format!("{model}: {failure}"));
                    match decide(&failure, attempt, policy) {
                        Disposition::Retry { delay } => {
                            warn!(
                                model = model.as_str(),
                                attempt = attempt + 1,
                                delay_ms = delay.as_millis() as u64,
                                error = %failure,
                                "attempt failed; retrying same model"
                            );
                            tokio::time::sleep(delay).await;
                        }
                        Disposition::NextModel => {
                            warn!(
                                model = model.as_str(),
                                attempt = attempt + 1,
                                error = %failure,
                                "attempt budget exhausted; advancing to next candidate"
                            );
                            break;
                        }
                    }
                }
            }
        }
    }

    Err(AugurError::AllModelsUnavailable { attempt_errors })
}

/// One provider call plus acceptance check.
async fn attempt_once(
    client: &dyn GenerationClient,
    model: &str,
    prompt: &str,
    config: &GenerationConfig,
    min_len: usize,
) -> std::result::Result<String, AttemptFailure> {
    match client.generate(model, prompt, config).await {
        Ok(text) if is_acceptable(&text, min_len) => Ok(text),
        Ok(_) => Err(AttemptFailure::ShortResponse),
        Err(e) if e.is_overloaded() => Err(AttemptFailure::Overloaded(e.to_string())),
        Err(e) => Err(AttemptFailure::Provider(e.to_string())),
    }
}

/// Resolve a failed attempt into the next transition.
///
/// `attempt` is 0-based. The last attempt for a model always advances to the
/// next candidate; before that, overload doubles from the backoff base while
/// everything else waits the flat delay.
fn decide(failure: &AttemptFailure, attempt: u32, policy: &FallbackPolicy) -> Disposition {
    if attempt + 1 >= policy.max_attempts_per_model {
        return Disposition::NextModel;
    }
    match failure {
        AttemptFailure::Overloaded(_) => Disposition::Retry {
            delay: backoff_delay(policy.overload_backoff_base, attempt),
        },
        AttemptFailure::ShortResponse | AttemptFailure::Provider(_) => Disposition::Retry {
            delay: policy.flat_retry_delay,
        },
    }
}

/// Exponential backoff: `base * 2^attempt`, saturating.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
    base.saturating_mul(factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> FallbackPolicy {
        FallbackPolicy {
            model_candidates: vec!["a".into(), "b".into()],
            max_attempts_per_model: 3,
            min_acceptable_len: 10,
            flat_retry_delay: Duration::from_millis(500),
            overload_backoff_base: Duration::from_millis(1000),
        }
    }

    #[test]
    fn overload_backoff_doubles_per_attempt() {
        let p = policy();
        let failure = AttemptFailure::Overloaded("503".into());
        assert_eq!(
            decide(&failure, 0, &p),
            Disposition::Retry {
                delay: Duration::from_millis(1000)
            }
        );
        assert_eq!(
            decide(&failure, 1, &p),
            Disposition::Retry {
                delay: Duration::from_millis(2000)
            }
        );
    }

    #[test]
    fn ordinary_failures_wait_the_flat_delay() {
        let p = policy();
        for failure in [
            AttemptFailure::ShortResponse,
            AttemptFailure::Provider("boom".into()),
        ] {
            assert_eq!(
                decide(&failure, 0, &p),
                Disposition::Retry {
                    delay: Duration::from_millis(500)
                }
            );
        }
    }

    #[test]
    fn last_attempt_always_advances_model() {
        let p = policy();
        for failure in [
            AttemptFailure::ShortResponse,
            AttemptFailure::Overloaded("503".into()),
            AttemptFailure::Provider("boom".into()),
        ] {
            assert_eq!(decide(&failure, 2, &p), Disposition::NextModel);
        }
    }

    #[test]
    fn acceptability_is_a_trimmed_char_count() {
        assert!(is_acceptable("exactly ten", 11));
        assert!(is_acceptable("  padded out text  ", 15));
        assert!(!is_acceptable("short", 10));
        assert!(!is_acceptable("   ", 0));
    }
}
