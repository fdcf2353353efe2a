pub mod client;
pub mod types;

pub use client::OpenAIClient;
pub use types::{GenerationRequest, GenerationResult};
