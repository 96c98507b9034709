// ABOUTME: Configuration options for the extractor client, plus the ClientBuilder.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::profile::browser_headers;

/// Configuration options for the extractor client.
#[derive(Debug, Clone)]
pub struct Options {
    /// Whole-request timeout. Exceeding it aborts the pipeline.
    pub timeout: Duration,
    /// Headers sent with every request. Defaults to the browser profile.
    pub headers: HashMap<String, String>,
    /// Allow fetching from private/reserved networks (tests, intranets).
    pub allow_private_networks: bool,
    /// Encoding forced onto the response body. The platform serves UTF-8 in
    /// practice; no charset sniffing is performed and the server-declared
    /// charset is ignored.
    pub encoding: &'static encoding_rs::Encoding,
    /// Custom HTTP client; when set, `timeout` is not applied on top of it.
    pub http_client: Option<reqwest::Client>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            headers: browser_headers().clone(),
            allow_private_networks: false,
            encoding: encoding_rs::UTF_8,
            http_client: None,
        }
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Add or replace a request header on top of the browser profile.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Replace the whole header map.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.opts.headers = headers;
        self
    }

    /// Allow or disallow requests to private networks.
    pub fn allow_private_networks(mut self, allow: bool) -> Self {
        self.opts.allow_private_networks = allow;
        self
    }

    /// Set the encoding forced onto response bodies.
    pub fn encoding(mut self, encoding: &'static encoding_rs::Encoding) -> Self {
        self.opts.encoding = encoding;
        self
    }

    /// Use a custom HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(self.opts)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
