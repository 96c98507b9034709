// ABOUTME: Client for the ChatGLM image-generation API: one REST call plus a file download.
// ABOUTME: Fully independent of the article extractor; shares no data model or process with it.

//! glm-imagegen - Generate images through the ChatGLM (智谱) API.
//!
//! One synchronous-in-spirit flow per call: POST the prompt to
//! `images/generations`, read the image URL out of the response, download it,
//! and save it under the output directory as
//! `<unix_timestamp>_<sanitized_prompt>.png`.
//!
//! # Example
//!
//! ```no_run
//! use glm_imagegen::{GenerateOptions, ImageClient, ImageError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ImageError> {
//!     let client = ImageClient::builder().token_from_env()?.build();
//!     let opts = GenerateOptions::new("一只可爱的小猫咪");
//!     let path = client.generate(&opts).await?;
//!     println!("图片已保存至: {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod error;

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use crate::error::ImageError;

/// Default API base for the ChatGLM open platform.
pub const DEFAULT_API_BASE: &str = "https://open.bigmodel.cn/api/paas/v4";

/// Environment variables consulted for the API token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["CHATGLM_API_TOKEN", "GLM_API_TOKEN"];

/// Read the API token from the environment, first variable wins.
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|token| !token.is_empty())
}

/// Options for one generation call.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub prompt: String,
    pub output_dir: PathBuf,
    pub size: String,
    pub quality: String,
    pub model: String,
}

impl GenerateOptions {
    /// Options with the script's defaults: `output/`, 1024x1024, standard, cogView-4.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            output_dir: PathBuf::from("output"),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            model: "cogView-4".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

/// Builder for [`ImageClient`].
#[derive(Debug, Clone)]
pub struct ImageClientBuilder {
    api_base: String,
    token: Option<String>,
    timeout: Duration,
}

impl ImageClientBuilder {
    pub fn new() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            token: None,
            timeout: Duration::from_secs(60),
        }
    }

    /// Override the API base URL (tests point this at a mock server).
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the API token directly.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Read the token from the environment; errors when neither variable is set.
    pub fn token_from_env(mut self) -> Result<Self, ImageError> {
        self.token = Some(token_from_env().ok_or(ImageError::MissingToken)?);
        Ok(self)
    }

    /// Set the per-request timeout (applies to the API call and the download).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> ImageClient {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("failed to build HTTP client");

        ImageClient {
            api_base: self.api_base,
            token: self.token.unwrap_or_default(),
            http,
        }
    }
}

impl Default for ImageClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the image-generation API.
pub struct ImageClient {
    api_base: String,
    token: String,
    http: reqwest::Client,
}

impl ImageClient {
    pub fn builder() -> ImageClientBuilder {
        ImageClientBuilder::new()
    }

    /// Generate an image and save it under `opts.output_dir`.
    ///
    /// Returns the path of the saved file.
    pub async fn generate(&self, opts: &GenerateOptions) -> Result<PathBuf, ImageError> {
        let url = format!("{}/images/generations", self.api_base);
        let request = GenerateRequest {
            model: &opts.model,
            prompt: &opts.prompt,
            size: &opts.size,
            quality: &opts.quality,
        };

        info!(model = %opts.model, size = %opts.size, "requesting image generation");
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ImageError::api(format!("malformed JSON body: {}", e)))?;

        let image_url = body
            .data
            .first()
            .and_then(|img| img.url.clone())
            .ok_or_else(|| ImageError::api("no image URL in response data"))?;
        debug!(%image_url, "image generated");

        let image = self.http.get(&image_url).send().await?;
        let status = image.status();
        if !status.is_success() {
            return Err(ImageError::Status(status.as_u16()));
        }
        let bytes = image.bytes().await?;

        std::fs::create_dir_all(&opts.output_dir)?;
        let path = opts.output_dir.join(image_file_name(&opts.prompt));
        std::fs::write(&path, &bytes)?;
        info!(path = %path.display(), bytes = bytes.len(), "image saved");

        Ok(path)
    }
}

/// Build the output file name: `<unix_timestamp>_<sanitized_prompt>.png`.
fn image_file_name(prompt: &str) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format!("{}_{}.png", timestamp, sanitize_prompt(prompt))
}

/// Sanitize a prompt for use in a file name.
///
/// Keeps alphanumerics, spaces, dashes, and underscores from the first 30
/// characters, trims, then replaces spaces with underscores.
pub fn sanitize_prompt(prompt: &str) -> String {
    prompt
        .chars()
        .take(30)
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .replace(' ', "_")
}

/// Print the environment setup instructions for a missing token.
pub fn print_token_setup_instructions() {
    eprintln!("错误: 未找到 API Token 环境变量");
    eprintln!();
    eprintln!("请设置环境变量:");
    eprintln!("  export CHATGLM_API_TOKEN='your_token_here'");
    eprintln!("  # 或");
    eprintln!("  export GLM_API_TOKEN='your_token_here'");
    eprintln!();
    eprintln!("提示: 请访问 https://open.bigmodel.cn 获取您的 API Token");
}

/// Is `path` inside `dir`? Used by tests and callers validating save locations.
pub fn is_within(path: &Path, dir: &Path) -> bool {
    path.starts_with(dir)
}
