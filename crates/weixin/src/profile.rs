// ABOUTME: The fixed browser request profile sent with every article fetch.
// ABOUTME: WeChat serves stripped-down or block pages to requests without a browser-like fingerprint.

//! Browser request profile.
//!
//! The platform fingerprints incoming requests and serves materially different
//! content to clients that do not look like a desktop browser. The header set
//! below emulates Edge on Windows: a full `User-Agent`, content negotiation
//! headers with `zh-CN` preferred, and the `Sec-Fetch-*` navigation metadata
//! a real top-level navigation would carry. There is no per-request
//! variation; the profile is a process-wide constant.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The User-Agent string for the spoofed profile.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36 Edg/144.0.0.0";

static BROWSER_HEADERS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let pairs = [
        ("User-Agent", USER_AGENT),
        (
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,\
             image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7",
        ),
        ("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8"),
        ("Accept-Encoding", "gzip, deflate, br"),
        ("Connection", "keep-alive"),
        ("Upgrade-Insecure-Requests", "1"),
        ("Sec-Fetch-Dest", "document"),
        ("Sec-Fetch-Mode", "navigate"),
        ("Sec-Fetch-Site", "none"),
        ("Sec-Fetch-User", "?1"),
        ("Cache-Control", "max-age=0"),
    ];
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
});

/// Returns the fixed browser-emulating header map.
pub fn browser_headers() -> &'static HashMap<String, String> {
    &BROWSER_HEADERS
}
