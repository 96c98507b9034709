// ABOUTME: The Article record assembled from the five field extractions.
// ABOUTME: Absence is Option at this layer; display sentinels apply only at the presentation boundary.

use serde::{Deserialize, Serialize};

/// Display sentinel for a missing title.
pub const MISSING_TITLE: &str = "未找到标题";
/// Display sentinel for a missing publish time.
pub const MISSING_PUBLISH_TIME: &str = "未找到发布时间";
/// Display sentinel for a missing author.
pub const MISSING_AUTHOR: &str = "未找到作者";
/// Display sentinel for a missing channel name.
pub const MISSING_CHANNEL_NAME: &str = "未找到公众号名称";
/// Display sentinel for missing body content.
pub const MISSING_CONTENT: &str = "未找到正文内容";

/// One extracted article record.
///
/// Exactly one record is produced per successful fetch+parse; fetch failures
/// yield an error instead, never a partial record. Fields are `None` on a
/// selector miss so that genuinely extracted text equal to a sentinel string
/// is not conflated with a miss; the sentinels are substituted only when
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Article {
    /// The final (post-redirect) URL the document was served from.
    pub url: String,
    pub title: Option<String>,
    pub publish_time: Option<String>,
    pub author: Option<String>,
    pub channel_name: Option<String>,
    /// Body text, whitespace-collapsed to a single logical line.
    pub content: Option<String>,
}

impl Article {
    /// Title, or its display sentinel.
    pub fn title_display(&self) -> &str {
        self.title.as_deref().unwrap_or(MISSING_TITLE)
    }

    /// Publish time, or its display sentinel.
    pub fn publish_time_display(&self) -> &str {
        self.publish_time.as_deref().unwrap_or(MISSING_PUBLISH_TIME)
    }

    /// Author, or its display sentinel.
    pub fn author_display(&self) -> &str {
        self.author.as_deref().unwrap_or(MISSING_AUTHOR)
    }

    /// Channel name, or its display sentinel.
    pub fn channel_name_display(&self) -> &str {
        self.channel_name.as_deref().unwrap_or(MISSING_CHANNEL_NAME)
    }

    /// Body content, or its display sentinel.
    pub fn content_display(&self) -> &str {
        self.content.as_deref().unwrap_or(MISSING_CONTENT)
    }

    /// Render the record as the five labeled lines of the original tool.
    pub fn format_text(&self) -> String {
        format!(
            "标题：{}\n发布时间：{}\n作者：{}\n公众号：{}\n正文：{}",
            self.title_display(),
            self.publish_time_display(),
            self.author_display(),
            self.channel_name_display(),
            self.content_display(),
        )
    }

    /// Returns true if every field missed.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.publish_time.is_none()
            && self.author.is_none()
            && self.channel_name.is_none()
            && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_text_full_record() {
        let article = Article {
            url: "https://mp.weixin.qq.com/s/abc".to_string(),
            title: Some("T".to_string()),
            publish_time: Some("P".to_string()),
            author: Some("A".to_string()),
            channel_name: Some("C".to_string()),
            content: Some("line one line two".to_string()),
        };

        assert_eq!(
            article.format_text(),
            "标题：T\n发布时间：P\n作者：A\n公众号：C\n正文：line one line two"
        );
    }

    #[test]
    fn format_text_substitutes_sentinels() {
        let article = Article::default();
        let text = article.format_text();
        assert!(text.contains("标题：未找到标题"));
        assert!(text.contains("发布时间：未找到发布时间"));
        assert!(text.contains("作者：未找到作者"));
        assert!(text.contains("公众号：未找到公众号名称"));
        assert!(text.contains("正文：未找到正文内容"));
    }

    #[test]
    fn extracted_sentinel_text_is_not_a_miss() {
        // A page whose byline literally reads like the sentinel still counts
        // as found; only None renders as a miss.
        let article = Article {
            author: Some(MISSING_AUTHOR.to_string()),
            ..Default::default()
        };
        assert_eq!(article.author_display(), MISSING_AUTHOR);
        assert!(article.author.is_some());
    }

    #[test]
    fn is_empty_tracks_all_fields() {
        let mut article = Article::default();
        assert!(article.is_empty());
        article.content = Some("text".to_string());
        assert!(!article.is_empty());
    }

    #[test]
    fn serializes_misses_as_null() {
        let article = Article {
            url: "https://example.com".to_string(),
            title: Some("T".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["title"], "T");
        assert!(json["author"].is_null());
    }
}
