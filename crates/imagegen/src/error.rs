// ABOUTME: Error types for image generation operations.
// ABOUTME: Provides ImageError enum covering token, API, transport, and filesystem failures.

use thiserror::Error;

/// Errors that can occur while generating or saving an image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// No API token in CHATGLM_API_TOKEN or GLM_API_TOKEN.
    #[error("no API token found; set CHATGLM_API_TOKEN or GLM_API_TOKEN")]
    MissingToken,

    /// The API answered with a non-success status.
    #[error("image API returned status {0}")]
    Status(u16),

    /// The response did not have the expected shape.
    #[error("unexpected API response: {0}")]
    Api(String),

    /// Transport-level request failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to create the output directory or write the image file.
    #[error("failed to save image: {0}")]
    Io(#[from] std::io::Error),
}

impl ImageError {
    /// Creates an Api error with a custom message.
    pub fn api(msg: impl Into<String>) -> Self {
        ImageError::Api(msg.into())
    }
}
