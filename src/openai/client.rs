//! Thin HTTP client for the OpenAI images API.
//!
//! - `request_image` posts to `/images/generations` and returns `data[0].url`.
//! - `fetch_image` downloads the bytes behind that URL.
//! - `generate` runs both, in order, once. There is no retry and no timeout.
use reqwest::{Client, Url};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::form::collector::ImageSize;
use crate::openai::types::{ErrorEnvelope, GenerationRequest, GenerationResult, ImagesResponse};

#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAIClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        OpenAIClient {
            client: Client::new(),
            base_url: base,
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
            config.image_model.clone(),
        )
    }

    pub fn request_for(&self, prompt: &str, size: ImageSize) -> GenerationRequest {
        GenerationRequest::new(self.model.clone(), prompt, size)
    }

    /// The generation call. Returns the resource locator of the new image.
    pub async fn request_image(&self, request: &GenerationRequest) -> AppResult<String> {
        let url = format!("{}/images/generations", self.base_url);
        tracing::info!("Requesting {} image from {}", request.size, url);
        tracing::debug!("Prompt: {:?}", request.prompt);

        let response = self.client.post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read error body".to_string());
            let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
                Ok(envelope) => envelope.error.message,
                Err(_) => body,
            };
            tracing::error!("Image generation rejected. Status: {}, Message: {}", status, message);
            return Err(AppError::Upstream { status: status.as_u16(), message });
        }

        let parsed: ImagesResponse = response.json().await.map_err(AppError::HttpClient)?;
        let image_url = parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or_else(|| AppError::MalformedResponse("response contained no image url".to_string()))?;
        Url::parse(&image_url)
            .map_err(|e| AppError::MalformedResponse(format!("invalid image url '{}': {}", image_url, e)))?;

        tracing::info!("Image generated at {}", image_url);
        Ok(image_url)
    }

    /// The byte fetch.
    pub async fn fetch_image(&self, image_url: &str) -> AppResult<Vec<u8>> {
        let response = self.client.get(image_url)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            tracing::error!("Failed to download image: {}", response.status());
            return Err(AppError::Fetch { status: response.status().as_u16() });
        }

        let bytes = response.bytes().await.map_err(AppError::HttpClient)?;
        if bytes.is_empty() {
            return Err(AppError::EmptyImage);
        }
        tracing::info!("Downloaded {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }

    /// Generate one image and download it.
    pub async fn generate(&self, prompt: &str, size: ImageSize) -> AppResult<GenerationResult> {
        let request = self.request_for(prompt, size);
        let image_url = self.request_image(&request).await?;
        let image_bytes = self.fetch_image(&image_url).await?;
        Ok(GenerationResult { image_url, image_bytes })
    }
}
