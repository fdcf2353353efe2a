//! Common error type and alias.
//!
//! Every failure of the generation call or the byte fetch ends up in the same
//! user-facing category, see [`AppError::user_message`]. The variants are kept
//! apart so logs and the JSON API can still tell them apart.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please enter a prompt.")]
    EmptyPrompt,

    #[error("unsupported image size '{0}', expected one of 256x256, 512x512, 1024x1024")]
    InvalidSize(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("image API error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("failed to download generated image: HTTP {status}")]
    Fetch { status: u16 },

    #[error("malformed response from image API: {0}")]
    MalformedResponse(String),

    #[error("generated image was empty")]
    EmptyImage,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message shown to the user when a submission fails.
    pub fn user_message(&self) -> String {
        match self {
            AppError::EmptyPrompt => self.to_string(),
            _ => format!("Error generating image: {}", self),
        }
    }

    /// True for failures that come from either outbound call.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            AppError::HttpClient(_)
                | AppError::Upstream { .. }
                | AppError::Fetch { .. }
                | AppError::MalformedResponse(_)
                | AppError::EmptyImage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_keeps_cause_in_user_message() {
        let err = AppError::Upstream {
            status: 401,
            message: "Incorrect API key provided".into(),
        };
        assert_eq!(
            err.user_message(),
            "Error generating image: image API error (401): Incorrect API key provided"
        );
        assert!(err.is_generation_failure());
    }

    #[test]
    fn empty_prompt_is_a_warning_not_a_generation_failure() {
        let err = AppError::EmptyPrompt;
        assert_eq!(err.user_message(), "Please enter a prompt.");
        assert!(!err.is_generation_failure());
    }

    #[test]
    fn io_errors_convert_but_are_not_generation_failures() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory").into();
        assert!(matches!(err, AppError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: no such directory");
        assert!(!err.is_generation_failure());
    }

    #[test]
    fn fetch_and_generation_share_the_prefix() {
        let fetch = AppError::Fetch { status: 404 };
        let malformed = AppError::MalformedResponse("no url".into());
        assert!(fetch.user_message().starts_with("Error generating image: "));
        assert!(malformed.user_message().starts_with("Error generating image: "));
    }
}
