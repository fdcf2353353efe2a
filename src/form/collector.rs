//! Input collection: the prompt text and the image size selection.
//!
//! The only local check is that the trimmed prompt is non-empty. Length
//! limits and content policy are left to the image API.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Prompts suggested in the page sidebar.
pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "A panda surfing a wave",
    "Cyberpunk city at sunset",
    "Astronaut playing guitar",
];

/// Supported output sizes, serialized as the `WxH` string the API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Small,
    #[default]
    #[serde(rename = "512x512")]
    Medium,
    #[serde(rename = "1024x1024")]
    Large,
}

impl ImageSize {
    /// Options in the order the size selector shows them.
    pub const ALL: [ImageSize; 3] = [ImageSize::Small, ImageSize::Medium, ImageSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "256x256",
            ImageSize::Medium => "512x512",
            ImageSize::Large => "1024x1024",
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            ImageSize::Small => 256,
            ImageSize::Medium => 512,
            ImageSize::Large => 1024,
        }
    }

    /// All supported sizes are square.
    pub fn height(&self) -> u32 {
        self.width()
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ImageSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::InvalidSize(wanted.to_string()))
    }
}

/// What the user entered when the submit action fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub prompt: String,
    pub size: ImageSize,
}

impl Submission {
    pub fn new(prompt: impl Into<String>, size: ImageSize) -> Self {
        Submission { prompt: prompt.into(), size }
    }

    /// Fails with `EmptyPrompt` when the prompt is blank once trimmed.
    /// The prompt itself is sent upstream as typed.
    pub fn validate(&self) -> AppResult<()> {
        if self.prompt.trim().is_empty() {
            return Err(AppError::EmptyPrompt);
        }
        Ok(())
    }
}
