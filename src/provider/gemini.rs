//! Google Gemini API client.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{AugurError, Result};
use crate::types::GenerationConfig;

use super::http::{shared_client, status_to_error};
use super::GenerationClient;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub struct GeminiClient {
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Build a client from `GEMINI_API_KEY` (loading `.env` if present).
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(crate::config::api_key_from_env(API_KEY_VAR)?))
    }

    /// Override the endpoint base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request_body(&self, prompt: &str, config: &GenerationConfig) -> serde_json::Value {
        let mut body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}],
            }]
        });
        let obj = body.as_object_mut().expect("body is an object");

        let mut gen_config = serde_json::Map::new();
        if let Some(temp) = config.temperature {
            gen_config.insert("temperature".into(), temp.into());
        }
        if let Some(top_k) = config.top_k {
            gen_config.insert("topK".into(), top_k.into());
        }
        if let Some(top_p) = config.top_p {
            gen_config.insert("topP".into(), top_p.into());
        }
        if let Some(max) = config.max_output_tokens {
            gen_config.insert("maxOutputTokens".into(), max.into());
        }
        if let Some(count) = config.candidate_count {
            gen_config.insert("candidateCount".into(), count.into());
        }
        if let Some(ref stops) = config.stop_sequences {
            gen_config.insert("stopSequences".into(), serde_json::json!(stops));
        }
        if !gen_config.is_empty() {
            obj.insert(
                "generationConfig".into(),
                serde_json::Value::Object(gen_config),
            );
        }

        if let Some(ref safety) = config.safety_settings {
            obj.insert("safetySettings".into(), serde_json::json!(safety));
        }

        body
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String> {
        let body = self.build_request_body(prompt, config);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        debug!(model, "gemini generate");

        let resp = shared_client().post(&url).json(&body).send().await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: GenerateContentResponse = resp.json().await?;

        if let Some(feedback) = data.prompt_feedback {
            if let Some(reason) = feedback.block_reason {
                return Err(AugurError::api(
                    200,
                    format!("Prompt blocked by safety filters ({reason})"),
                ));
            }
        }

        let candidate = data
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AugurError::api(200, "No candidates in Gemini response"))?;

        if candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(AugurError::api(200, "Response blocked by safety filters"));
        }

        let text: String = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        Ok(text)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}
