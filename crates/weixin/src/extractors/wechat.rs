// ABOUTME: The five WeChat article field rules and their extraction functions.
// ABOUTME: Each field is an independent selector chain; only author carries a fallback.

//! WeChat field rules.
//!
//! Selector chains for the `mp.weixin.qq.com` article template. Fields are
//! extracted independently; the failure of one never affects another. The
//! byline moved between templates over time, hence the author fallback from
//! the `a#js_name` link to the older meta-text span.

use scraper::Html;

use crate::extractors::select::{normalize_whitespace, select_first_text};

/// Article headline.
pub const TITLE_CHAIN: &[&str] = &["h1.rich_media_title"];

/// Publish timestamp as rendered in the page; the page format is not
/// guaranteed canonical, so it stays free-form text.
pub const PUBLISH_TIME_CHAIN: &[&str] = &["em#publish_time"];

/// Byline, with fallback to the older meta-text span.
pub const AUTHOR_CHAIN: &[&str] = &[
    "a#js_name",
    "span.rich_media_meta.rich_media_meta_text",
];

/// Publishing account (公众号) name.
pub const CHANNEL_CHAIN: &[&str] = &["a.profile_nickname"];

/// Article body container.
pub const CONTENT_CHAIN: &[&str] = &["div.rich_media_content"];

/// Extract the article title.
pub fn extract_title(doc: &Html) -> Option<String> {
    select_first_text(doc, TITLE_CHAIN)
}

/// Extract the publish time.
pub fn extract_publish_time(doc: &Html) -> Option<String> {
    select_first_text(doc, PUBLISH_TIME_CHAIN)
}

/// Extract the byline.
pub fn extract_author(doc: &Html) -> Option<String> {
    select_first_text(doc, AUTHOR_CHAIN)
}

/// Extract the channel (official account) name.
pub fn extract_channel_name(doc: &Html) -> Option<String> {
    select_first_text(doc, CHANNEL_CHAIN)
}

/// Extract the body text, whitespace-collapsed to a single logical line.
pub fn extract_content(doc: &Html) -> Option<String> {
    select_first_text(doc, CONTENT_CHAIN).map(|raw| normalize_whitespace(&raw))
}
