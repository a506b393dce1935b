//! HTML-highlight preview decoding
//!
//! Search previews and highlighted snippets come back with HTML markup.
//! For plain-text reports we turn `<br>` into newlines, strip every other
//! tag, and decode the small set of entities the highlighter emits.

use regex::Regex;
use std::sync::LazyLock;

static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("br tag pattern"));

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// Entity decode table; `&amp;` is decoded last so `&amp;lt;` stays `&lt;`
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

/// Decode an HTML-marked-up preview into plain text
///
/// Returns `None` when the result is empty after trimming, so callers treat
/// a markup-only snippet the same as an absent one.
pub fn decode_preview(html: &str) -> Option<String> {
    let with_breaks = BR_TAG.replace_all(html, "\n");
    let stripped = ANY_TAG.replace_all(&with_breaks, "");

    let mut text = stripped.into_owned();
    for (entity, replacement) in ENTITIES {
        text = text.replace(entity, replacement);
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_br_becomes_newline() {
        assert_eq!(
            decode_preview("first<br>second<br/>third<br />fourth"),
            Some("first\nsecond\nthird\nfourth".to_string())
        );
    }

    #[test]
    fn test_tags_stripped() {
        assert_eq!(
            decode_preview(r#"<span class="hl">fn main</span>() {}"#),
            Some("fn main() {}".to_string())
        );
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(
            decode_preview("a &lt; b &amp;&amp; c &gt; &quot;d&quot; &#39;e&#39;&nbsp;f"),
            Some("a < b && c > \"d\" 'e' f".to_string())
        );
    }

    #[test]
    fn test_amp_decoded_last() {
        assert_eq!(decode_preview("&amp;lt;"), Some("&lt;".to_string()));
    }

    #[test]
    fn test_empty_after_trim_is_absent() {
        assert_eq!(decode_preview("<span>  </span>"), None);
        assert_eq!(decode_preview(""), None);
    }
}
