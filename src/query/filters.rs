//! Search query-string filter construction
//!
//! Sourcegraph search filters are plain tokens inside the query string
//! (`author:alice`, `count:50`, `timeout:2s`). These helpers quote values,
//! append tokens, and avoid duplicating a filter the caller already wrote.

use regex::Regex;
use std::sync::LazyLock;

static COUNT_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcount:\d+").expect("count filter pattern"));

static TIMEOUT_FILTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\btimeout:\S+").expect("timeout filter pattern"));

/// Quote a filter value for use in a search query string
///
/// Values containing whitespace are wrapped in double quotes with interior
/// quotes backslash-escaped, so `Alice Example` becomes `"Alice Example"`
/// and composes into `author:"Alice Example"`.
pub fn quote_filter(value: &str) -> String {
    if value.chars().any(char::is_whitespace) {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}

/// Append a `count:N` filter unless the query already carries one
pub fn append_count_filter(query: &str, count: usize) -> String {
    if COUNT_FILTER.is_match(query) {
        query.to_string()
    } else {
        format!("{} count:{}", query, count)
    }
}

/// Append a `timeout:` filter rendered from milliseconds
///
/// Exact multiples of 1000ms render as seconds (`timeout:2s`), everything
/// else as milliseconds (`timeout:2500ms`). Absent, non-finite, and
/// non-positive values are dropped silently, as is any value when the query
/// already carries a timeout filter.
pub fn append_timeout_filter(query: &str, timeout_ms: Option<f64>) -> String {
    let ms = match timeout_ms {
        Some(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => return query.to_string(),
    };
    if ms == 0 || TIMEOUT_FILTER.is_match(query) {
        return query.to_string();
    }

    let rendered = if ms % 1000 == 0 {
        format!("timeout:{}s", ms / 1000)
    } else {
        format!("timeout:{}ms", ms)
    };
    format!("{} {}", query, rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_filter_plain_value_unchanged() {
        assert_eq!(quote_filter("alice"), "alice");
    }

    #[test]
    fn test_quote_filter_whitespace_quoted() {
        assert_eq!(quote_filter("Alice Example"), "\"Alice Example\"");
    }

    #[test]
    fn test_quote_filter_escapes_inner_quotes() {
        assert_eq!(quote_filter("Alice \"Al\" Example"), "\"Alice \\\"Al\\\" Example\"");
    }

    #[test]
    fn test_count_filter_appended() {
        assert_eq!(append_count_filter("repo:acme widget", 50), "repo:acme widget count:50");
    }

    #[test]
    fn test_count_filter_not_duplicated() {
        assert_eq!(append_count_filter("widget count:5", 50), "widget count:5");
        assert_eq!(append_count_filter("widget COUNT:5", 50), "widget COUNT:5");
    }

    #[test]
    fn test_timeout_filter_seconds_when_round() {
        assert_eq!(
            append_timeout_filter("widget", Some(2000.0)),
            "widget timeout:2s"
        );
    }

    #[test]
    fn test_timeout_filter_millis_otherwise() {
        assert_eq!(
            append_timeout_filter("widget", Some(2500.0)),
            "widget timeout:2500ms"
        );
    }

    #[test]
    fn test_timeout_filter_dropped_when_invalid() {
        assert_eq!(append_timeout_filter("widget", None), "widget");
        assert_eq!(append_timeout_filter("widget", Some(0.0)), "widget");
        assert_eq!(append_timeout_filter("widget", Some(-100.0)), "widget");
        assert_eq!(append_timeout_filter("widget", Some(f64::NAN)), "widget");
    }

    #[test]
    fn test_timeout_filter_not_duplicated() {
        assert_eq!(
            append_timeout_filter("widget timeout:5s", Some(2000.0)),
            "widget timeout:5s"
        );
        assert_eq!(
            append_timeout_filter("widget TIMEOUT:500ms", Some(2000.0)),
            "widget TIMEOUT:500ms"
        );
    }
}
