//! Wire types for the images endpoint and the in-memory generation result.
use serde::{Deserialize, Serialize};

use crate::form::collector::ImageSize;

/// Body of `POST /images/generations`. Always asks for exactly one image.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: ImageSize,
    pub response_format: &'static str,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, size: ImageSize) -> Self {
        GenerationRequest {
            model: model.into(),
            prompt: prompt.into(),
            n: 1,
            size,
            response_format: "url",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
pub struct ImageData {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// A generated image: only built once both the URL and the bytes are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub image_url: String,
    pub image_bytes: Vec<u8>,
}
