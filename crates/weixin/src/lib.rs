// ABOUTME: Main library entry point for the WeChat article extractor.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Article, ExtractError, ErrorCode, Options.

//! weixin-extract - Extract structured records from WeChat Official Account articles.
//!
//! This crate fetches an `mp.weixin.qq.com` article page with a
//! browser-emulating request profile and extracts title, publish time,
//! author, channel name, and whitespace-normalized body text.
//!
//! # Example
//!
//! ```no_run
//! use weixin_extract::{Client, ExtractError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ExtractError> {
//!     let client = Client::builder().build();
//!     let article = client.parse("https://mp.weixin.qq.com/s/example").await?;
//!     println!("{}", article.format_text());
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod client;
pub mod error;
pub mod extractors;
pub mod options;
pub mod profile;
pub mod resource;

pub use crate::article::Article;
pub use crate::client::Client;
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::profile::browser_headers;
