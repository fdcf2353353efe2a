//! One submission, start to finish.
//!
//! `Idle -> Submitting -> FetchingBytes -> Succeeded | Failed`. An empty
//! prompt leaves the interaction `Idle` with a warning and no network call.
//! Every state except `Idle` is terminal; a new submission needs a new
//! `Interaction`.
use tracing::Instrument;
use uuid::Uuid;

use crate::error::AppError;
use crate::form::collector::Submission;
use crate::openai::{GenerationResult, OpenAIClient};

pub const DOWNLOAD_FILE_NAME: &str = "ai_image.png";
pub const DOWNLOAD_MIME: &str = "image/png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Submitting,
    FetchingBytes { image_url: String },
    Succeeded(GenerationResult),
    Failed { message: String, image_url: Option<String> },
}

/// The user-initiated download offered after a successful generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Download<'a> {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: &'a [u8],
}

#[derive(Debug)]
pub struct Interaction {
    id: Uuid,
    state: InteractionState,
    warning: Option<String>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Interaction { id: Uuid::new_v4(), state: InteractionState::Idle, warning: None }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Runs the submission against `client`. Does nothing unless `Idle`.
    pub async fn submit(mut self, client: &OpenAIClient, submission: &Submission) -> Self {
        if self.state != InteractionState::Idle {
            tracing::warn!("Interaction {} already submitted", self.id);
            return self;
        }
        let span = tracing::info_span!("interaction", id = %self.id, size = %submission.size);
        async move {
            self.warning = None;
            if let Err(e) = submission.validate() {
                tracing::warn!("Submission rejected: {}", e);
                self.warning = Some(e.user_message());
                return self;
            }

            self.state = InteractionState::Submitting;
            let request = client.request_for(&submission.prompt, submission.size);
            let image_url = match client.request_image(&request).await {
                Ok(url) => url,
                Err(e) => return self.fail(e, None),
            };

            self.state = InteractionState::FetchingBytes { image_url: image_url.clone() };
            match client.fetch_image(&image_url).await {
                Ok(image_bytes) => {
                    self.state = InteractionState::Succeeded(GenerationResult { image_url, image_bytes });
                    self
                }
                Err(e) => self.fail(e, Some(image_url)),
            }
        }
        .instrument(span)
        .await
    }

    fn fail(mut self, error: AppError, image_url: Option<String>) -> Self {
        tracing::error!("Generation failed: {}", error);
        self.state = InteractionState::Failed { message: error.user_message(), image_url };
        self
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match &self.state {
            InteractionState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            InteractionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The resource locator, when the generation call got that far.
    pub fn image_url(&self) -> Option<&str> {
        match &self.state {
            InteractionState::FetchingBytes { image_url } => Some(image_url),
            InteractionState::Succeeded(result) => Some(&result.image_url),
            InteractionState::Failed { image_url, .. } => image_url.as_deref(),
            InteractionState::Idle | InteractionState::Submitting => None,
        }
    }

    /// Present iff both the URL and non-empty bytes are known.
    pub fn download(&self) -> Option<Download<'_>> {
        self.result()
            .filter(|r| !r.image_url.is_empty() && !r.image_bytes.is_empty())
            .map(|r| Download { file_name: DOWNLOAD_FILE_NAME, mime: DOWNLOAD_MIME, bytes: &r.image_bytes })
    }
}
