//! Augur: resilient completion orchestration for mystical persona chat.
//!
//! Turns a user message into a finished persona response by driving a hosted
//! text-generation provider through a sequential model-fallback loop:
//! bounded retries per model, exponential backoff on the provider's overload
//! signal, length-based acceptance, truncation repair, and a stable error
//! taxonomy for the HTTP layer.
//!
//! # Quick Start
//!
//! ```no_run
//! use augur::prelude::*;
//!
//! # async fn example() -> augur::error::Result<()> {
//! let client = GeminiClient::from_env()?;
//! let service = ChatService::new(client);
//!
//! let profile = PersonaProfile::new(
//!     "stellara",
//!     vec!["gemini-2.0-flash".into(), "gemini-1.5-flash".into()],
//! );
//!
//! let request: ChatRequest = serde_json::from_str(
//!     r#"{"contextObject": {"name": "stellara"}, "userMessage": "What do the stars hold?"}"#,
//! )?;
//! let prompt = "You are Stellara, reader of constellations. What do the stars hold?";
//!
//! match service.respond(&profile, &request, prompt).await {
//!     Ok(reply) => println!("{}", reply.response),
//!     Err(failure) => eprintln!("{} ({})", failure.message, failure.code),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod prelude;
pub mod provider;
pub mod service;
pub mod types;
