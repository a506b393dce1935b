//! Date canonicalization
//!
//! Upstream timestamps arrive as ISO-8601 strings in assorted offsets; we
//! re-emit them in canonical UTC form. Unparseable input is preserved
//! verbatim so a report never shows a synthetic "invalid date" string in
//! place of what the server actually sent.

use chrono::{DateTime, SecondsFormat, Utc};

/// Re-emit an ISO-8601 date string in canonical UTC form
///
/// `2024-01-02T08:04:05+05:00` becomes `2024-01-02T03:04:05Z`. Input that
/// does not parse is returned unchanged.
pub fn canonical_utc(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true),
        Err(_) => raw.to_string(),
    }
}

/// Canonicalize an optional date, resolving absence to a placeholder
pub fn canonical_utc_or(raw: Option<&str>, placeholder: &str) -> String {
    match raw {
        Some(value) if !value.is_empty() => canonical_utc(value),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_converted_to_utc() {
        assert_eq!(
            canonical_utc("2024-01-02T08:04:05+05:00"),
            "2024-01-02T03:04:05Z"
        );
    }

    #[test]
    fn test_utc_input_normalized() {
        assert_eq!(
            canonical_utc("2024-01-02T03:04:05.123Z"),
            "2024-01-02T03:04:05Z"
        );
    }

    #[test]
    fn test_unparseable_preserved_verbatim() {
        assert_eq!(canonical_utc("three days ago"), "three days ago");
        assert_eq!(canonical_utc(""), "");
    }

    #[test]
    fn test_absent_resolves_to_placeholder() {
        assert_eq!(canonical_utc_or(None, "unknown"), "unknown");
        assert_eq!(canonical_utc_or(Some(""), "unknown"), "unknown");
        assert_eq!(
            canonical_utc_or(Some("2024-01-02T03:04:05Z"), "unknown"),
            "2024-01-02T03:04:05Z"
        );
    }
}
