//! Image Studio library
//!
//! Modules:
//! - `api`: Axum router, handlers and page rendering used by the server binary.
//! - `openai`: Thin client for the OpenAI images endpoint plus the byte fetch.
//! - `form`: Prompt and size collection with the non-empty prompt check.
//! - `interaction`: One submission driven through its states.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `OpenAIClient`,
//! `Interaction`, `ImageSize` and `Submission`.
pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod interaction;
pub mod openai;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use form::collector::{ImageSize, Submission};
pub use interaction::{Interaction, InteractionState};
pub use openai::client::OpenAIClient;

/// Install the `fmt` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
