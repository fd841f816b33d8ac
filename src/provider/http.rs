//! Shared HTTP client and status mapping.

use std::sync::OnceLock;

use crate::error::AugurError;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Map a non-success provider status to a typed error.
///
/// 503 is the overload signal and gets its own variant so the retry loop can
/// tell it apart without inspecting message text.
pub fn status_to_error(status: u16, body: &str) -> AugurError {
    match status {
        503 => AugurError::Overloaded {
            message: body.to_string(),
        },
        _ => AugurError::api(status, body),
    }
}
