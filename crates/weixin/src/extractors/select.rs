// ABOUTME: Selector-chain text extraction and whitespace normalization.
// ABOUTME: Selectors are tried in order; the first element with non-empty trimmed text wins.

//! Selector-chain extraction utilities.
//!
//! Key behaviors:
//! - Selectors are tried in order; the first yielding a non-empty match wins
//!   (the fallback chain of the author field relies on this).
//! - Text is the element's concatenated descendant text, trimmed.
//! - An element whose text is empty after trimming counts as a miss and the
//!   chain continues.

use scraper::Html;

use crate::extractors::compiled::get_or_compile;

/// Collapse all whitespace runs (spaces, tabs, newlines) into single spaces
/// and drop boundary whitespace.
///
/// Idempotent; word order is preserved. Applied to the article body only —
/// a deliberately lossy trade of paragraph structure for a single logical
/// line of text.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the trimmed text of the first element matched by the chain.
///
/// Returns `None` when no selector in the chain matches an element with
/// non-empty text.
pub fn select_first_text(doc: &Html, chain: &[&str]) -> Option<String> {
    for css in chain {
        let selector = match get_or_compile(css) {
            Some(s) => s,
            None => continue,
        };
        for element in doc.select(&selector) {
            let text = element.text().collect::<String>();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn first_selector_wins() {
        let d = doc("<h1>Primary</h1><h2>Secondary</h2>");
        let text = select_first_text(&d, &["h1", "h2"]);
        assert_eq!(text.as_deref(), Some("Primary"));
    }

    #[test]
    fn falls_back_when_primary_misses() {
        let d = doc("<h2>Secondary</h2>");
        let text = select_first_text(&d, &["h1", "h2"]);
        assert_eq!(text.as_deref(), Some("Secondary"));
    }

    #[test]
    fn empty_element_continues_chain() {
        let d = doc("<h1>   </h1><h2>Fallback</h2>");
        let text = select_first_text(&d, &["h1", "h2"]);
        assert_eq!(text.as_deref(), Some("Fallback"));
    }

    #[test]
    fn total_miss_returns_none() {
        let d = doc("<p>nothing relevant</p>");
        assert_eq!(select_first_text(&d, &["h1", "h2"]), None);
    }

    #[test]
    fn text_is_trimmed_but_not_collapsed() {
        let d = doc("<h1>  Two  Words  </h1>");
        let text = select_first_text(&d, &["h1"]);
        assert_eq!(text.as_deref(), Some("Two  Words"));
    }

    #[test]
    fn descendant_text_is_concatenated() {
        let d = doc("<div id='x'>one <span>two</span> three</div>");
        let text = select_first_text(&d, &["div#x"]);
        assert_eq!(text.as_deref(), Some("one two three"));
    }

    #[test]
    fn normalize_collapses_mixed_runs() {
        assert_eq!(
            normalize_whitespace("line one\n  line\ttwo\r\n three"),
            "line one line two three"
        );
    }

    #[test]
    fn normalize_trims_boundaries() {
        assert_eq!(normalize_whitespace("  padded  "), "padded");
        assert_eq!(normalize_whitespace("\n\t\n"), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_whitespace("a \n b\t\tc ");
        assert_eq!(normalize_whitespace(&once), once);
    }

    #[test]
    fn normalize_has_no_consecutive_whitespace() {
        let out = normalize_whitespace("w1 \t w2\n\nw3");
        assert!(!out.contains("  "));
        assert!(!out.contains('\n'));
        assert!(!out.contains('\t'));
        assert_eq!(out, "w1 w2 w3");
    }
}
