//! Shared test helpers and mock generation client.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use augur::error::{AugurError, Result};
use augur::provider::GenerationClient;
use augur::types::GenerationConfig;

/// A mock client that returns scripted results in order.
///
/// Clones share the same script and counters, so a test can keep a handle
/// after moving a clone into a service.
#[derive(Clone)]
pub struct MockClient {
    inner: Arc<Inner>,
}

struct Inner {
    script: Mutex<Vec<Result<String>>>,
    calls: AtomicUsize,
    models: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                script: Mutex::new(Vec::new()),
                calls: AtomicUsize::new(0),
                models: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queue a successful response.
    pub fn queue_ok(&self, text: &str) {
        self.inner.script.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn queue_err(&self, err: AugurError) {
        self.inner.script.lock().unwrap().push(Err(err));
    }

    /// Total calls made.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    /// Models requested, in call order.
    pub fn models_called(&self) -> Vec<String> {
        self.inner.models.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for MockClient {
    async fn generate(
        &self,
        model: &str,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.models.lock().unwrap().push(model.to_string());
        let mut script = self.inner.script.lock().unwrap();
        if script.is_empty() {
            return Err(AugurError::api(500, "mock script exhausted"));
        }
        script.remove(0)
    }
}

/// The provider's capacity-exhausted signal.
pub fn overloaded() -> AugurError {
    AugurError::Overloaded {
        message: "The model is overloaded. Please try again later.".to_string(),
    }
}
