// ABOUTME: HTTP fetching for article pages with outcome classification.
// ABOUTME: Validates URLs, guards private networks, classifies timeouts/transport faults, and forces body decoding.

//! Resource fetching.
//!
//! `fetch` performs one GET with the caller-supplied header set and classifies
//! the outcome: success (200 with body bytes), [`ErrorCode::Status`] for any
//! other status (the body is never read), [`ErrorCode::Timeout`] when the
//! client timeout fires, and [`ErrorCode::Transport`] for DNS/reset/TLS
//! faults. Decoding forces a fixed encoding; the server-declared charset is
//! ignored and nothing is sniffed.

use std::collections::HashMap;
use std::net::IpAddr;

use bytes::Bytes;
use ipnet::{Ipv4Net, Ipv6Net};
use tracing::debug;

use crate::error::ExtractError;

#[cfg(test)]
use crate::error::ErrorCode;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub headers: HashMap<String, String>,
    pub allow_private_networks: bool,
}

/// Result of a successful (status 200) fetch.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    pub final_url: String,
    pub body: Bytes,
}

impl FetchResult {
    /// Decode the body with a forced encoding, replacing invalid sequences.
    pub fn decode(&self, encoding: &'static encoding_rs::Encoding) -> String {
        let (decoded, _, _) = encoding.decode(&self.body);
        decoded.into_owned()
    }
}

/// Check if an IP address is in a private/reserved range.
fn is_private_ip(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(ip) => {
            let blocked: [Ipv4Net; 5] = [
                "10.0.0.0/8".parse().unwrap(),
                "172.16.0.0/12".parse().unwrap(),
                "192.168.0.0/16".parse().unwrap(),
                "127.0.0.0/8".parse().unwrap(),
                "169.254.0.0/16".parse().unwrap(),
            ];
            blocked.iter().any(|net| net.contains(ip))
        }
        IpAddr::V6(ip) => {
            if ip.is_loopback() {
                return true;
            }
            let unique_local: Ipv6Net = "fc00::/7".parse().unwrap();
            let link_local: Ipv6Net = "fe80::/10".parse().unwrap();
            unique_local.contains(ip) || link_local.contains(ip)
        }
    }
}

/// Reject URLs whose host is, or resolves to, a private address.
async fn ensure_public_host(
    target: &url::Url,
    original: &str,
    op: &str,
) -> Result<(), ExtractError> {
    let host = match target.host_str() {
        Some(h) => h,
        None => return Ok(()),
    };

    if let Ok(ip) = host.parse::<IpAddr>() {
        if is_private_ip(&ip) {
            return Err(ExtractError::ssrf(
                original,
                op,
                Some(anyhow::anyhow!("private IP addresses are not allowed")),
            ));
        }
        return Ok(());
    }

    let port = target
        .port()
        .unwrap_or(if target.scheme() == "https" { 443 } else { 80 });
    let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
        ExtractError::transport(original, op, Some(anyhow::anyhow!("DNS lookup failed: {}", e)))
    })?;
    for addr in addrs {
        if is_private_ip(&addr.ip()) {
            return Err(ExtractError::ssrf(
                original,
                op,
                Some(anyhow::anyhow!("private IP addresses are not allowed")),
            ));
        }
    }
    Ok(())
}

/// Classify a reqwest error as Timeout or Transport.
fn classify(url: &str, op: &str, e: reqwest::Error) -> ExtractError {
    if e.is_timeout() {
        ExtractError::timeout(url, op, Some(anyhow::anyhow!(e)))
    } else {
        ExtractError::transport(url, op, Some(anyhow::anyhow!(e)))
    }
}

/// Fetch an article page.
///
/// Returns the raw body bytes on a 200 response. Any other status aborts
/// without reading the body.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ExtractError> {
    const OP: &str = "Fetch";

    if url.is_empty() {
        return Err(ExtractError::invalid_url(url, OP, None));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ExtractError::invalid_url(url, OP, Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ExtractError::invalid_url(
            url,
            OP,
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    if !opts.allow_private_networks {
        ensure_public_host(&parsed_url, url, OP).await?;
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| classify(url, OP, e))?;

    // Redirects may land somewhere else entirely; re-check the final host.
    if !opts.allow_private_networks {
        let final_url = response.url().clone();
        ensure_public_host(&final_url, url, OP).await?;
    }

    let status = response.status().as_u16();
    let final_url = response.url().to_string();

    if status != 200 {
        debug!(%url, status, "non-200 response, aborting");
        return Err(ExtractError::status(url, OP, status));
    }

    let body = response.bytes().await.map_err(|e| classify(url, OP, e))?;
    debug!(%url, bytes = body.len(), "fetched article page");

    Ok(FetchResult {
        status,
        url: url.to_string(),
        final_url,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn create_test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap()
    }

    fn local_opts() -> FetchOptions {
        FetchOptions {
            allow_private_networks: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn fetch_ok_decodes_utf8() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/article");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<html><body>微信文章</body></html>");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/article"), &local_opts()).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert!(result.decode(encoding_rs::UTF_8).contains("微信文章"));
    }

    #[tokio::test]
    async fn fetch_sends_profile_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ua")
                .header("user-agent", crate::profile::USER_AGENT)
                .header("accept-language", "zh-CN,zh;q=0.9,en;q=0.8");
            then.status(200).body("ok");
        });

        let client = create_test_client();
        let opts = FetchOptions {
            headers: crate::profile::browser_headers().clone(),
            allow_private_networks: true,
        };

        fetch(&client, &server.url("/ua"), &opts)
            .await
            .expect("fetch should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn fetch_non_200_aborts_with_code() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404).body("not found");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/gone"), &local_opts()).await;
        mock.assert();

        let err = result.expect_err("should fail on 404");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.code, ErrorCode::Status(404));
    }

    #[tokio::test]
    async fn fetch_timeout_classified() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .delay(std::time::Duration::from_secs(2))
                .body("late");
        });

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(100))
            .build()
            .unwrap();

        let result = fetch(&client, &server.url("/slow"), &local_opts()).await;
        let err = result.expect_err("should time out");
        assert!(err.is_timeout(), "expected timeout, got {}", err);
    }

    #[tokio::test]
    async fn fetch_transport_fault_classified() {
        // Port 1 on localhost is closed; connection is refused.
        let client = create_test_client();
        let result = fetch(&client, "http://127.0.0.1:1/", &local_opts()).await;
        let err = result.expect_err("should fail to connect");
        assert!(err.is_transport(), "expected transport, got {}", err);
    }

    #[tokio::test]
    async fn fetch_empty_url_rejected() {
        let client = create_test_client();
        let err = fetch(&client, "", &local_opts())
            .await
            .expect_err("empty URL should fail");
        assert!(err.is_invalid_url());
    }

    #[tokio::test]
    async fn fetch_non_http_scheme_rejected() {
        let client = create_test_client();
        let err = fetch(&client, "ftp://example.com/x", &local_opts())
            .await
            .expect_err("ftp should fail");
        assert!(err.is_invalid_url());
    }

    #[tokio::test]
    async fn fetch_private_ip_blocked_by_default() {
        let server = MockServer::start();
        let client = create_test_client();
        let url = format!("http://127.0.0.1:{}/x", server.port());

        let err = fetch(&client, &url, &FetchOptions::default())
            .await
            .expect_err("should fail on private IP");
        assert!(err.is_ssrf());
    }

    #[test]
    fn private_ranges_recognized() {
        assert!(is_private_ip(&"10.1.2.3".parse().unwrap()));
        assert!(is_private_ip(&"172.16.0.1".parse().unwrap()));
        assert!(is_private_ip(&"192.168.1.1".parse().unwrap()));
        assert!(is_private_ip(&"127.0.0.1".parse().unwrap()));
        assert!(is_private_ip(&"169.254.0.1".parse().unwrap()));
        assert!(is_private_ip(&"::1".parse().unwrap()));
        assert!(is_private_ip(&"fe80::1".parse().unwrap()));

        assert!(!is_private_ip(&"8.8.8.8".parse().unwrap()));
        assert!(!is_private_ip(&"172.32.0.1".parse().unwrap()));
    }

    #[test]
    fn forced_decode_replaces_invalid_sequences() {
        let result = FetchResult {
            status: 200,
            url: "https://example.com".to_string(),
            final_url: "https://example.com".to_string(),
            body: Bytes::from_static(&[0x61, 0xff, 0x62]),
        };
        // Forced UTF-8 decodes lossily rather than sniffing another charset.
        assert_eq!(result.decode(encoding_rs::UTF_8), "a\u{fffd}b");
    }
}
