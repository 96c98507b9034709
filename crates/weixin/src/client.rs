// ABOUTME: The Client that runs the extraction pipeline: fetch, parse, extract, assemble.
// ABOUTME: Provides async parse() for URLs and offline parse_html() for raw documents.

use scraper::Html;
use tracing::{debug, info};

use crate::article::Article;
use crate::error::ExtractError;
use crate::extractors::wechat;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};

/// The article extraction client.
///
/// One linear pipeline per call, no state across invocations: fetch with the
/// browser profile, force-decode, parse leniently, run the five independent
/// field extractors, assemble one [`Article`]. Only fetch-stage failures
/// (transport, timeout, non-200) abort; selector misses become `None` fields.
pub struct Client {
    opts: Options,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let http_client = opts.http_client.clone().unwrap_or_else(|| {
            reqwest::Client::builder()
                .timeout(opts.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()
                .expect("failed to build HTTP client")
        });

        Self { opts, http_client }
    }

    /// Fetch an article page and extract its record.
    ///
    /// The document parser is never invoked when the fetch fails; no partial
    /// record is ever produced.
    pub async fn parse(&self, url: &str) -> Result<Article, ExtractError> {
        let fetch_opts = FetchOptions {
            headers: self.opts.headers.clone(),
            allow_private_networks: self.opts.allow_private_networks,
        };

        let fetch_result = fetch(&self.http_client, url, &fetch_opts).await?;
        let html = fetch_result.decode(self.opts.encoding);

        Ok(self.extract(&html, &fetch_result.final_url))
    }

    /// Extract a record from an already-fetched document.
    ///
    /// Parsing is lenient and never fails; an empty or unrelated document
    /// yields a record whose fields are all `None`.
    pub fn parse_html(&self, html: &str, url: &str) -> Article {
        self.extract(html, url)
    }

    fn extract(&self, html: &str, url: &str) -> Article {
        let doc = Html::parse_document(html);

        let article = Article {
            url: url.to_string(),
            title: wechat::extract_title(&doc),
            publish_time: wechat::extract_publish_time(&doc),
            author: wechat::extract_author(&doc),
            channel_name: wechat::extract_channel_name(&doc),
            content: wechat::extract_content(&doc),
        };

        debug!(
            %url,
            title = article.title.is_some(),
            publish_time = article.publish_time.is_some(),
            author = article.author.is_some(),
            channel_name = article.channel_name.is_some(),
            content = article.content.is_some(),
            "field extraction outcome"
        );
        info!(
            %url,
            content_chars = article.content.as_deref().map(str::len).unwrap_or(0),
            "extracted article"
        );

        article
    }
}
