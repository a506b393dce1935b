//! Diff rendering
//!
//! Turns one file diff into a plain-text block: a label derived from the
//! path pair, a stats line, and each hunk with its ranges and a bounded
//! body excerpt.

use crate::types::commit::{DiffRange, DiffStat, FileDiff};

/// Hunk bodies are cut after this many lines
const MAX_HUNK_BODY_LINES: usize = 10;

/// Marker appended after a truncated hunk body
const TRUNCATION_MARKER: &str = "…";

/// Placeholder for a hunk range with no start line
const NO_START: &str = "∅";

/// Label a file diff from its path pair
pub fn file_label(old_path: Option<&str>, new_path: Option<&str>) -> String {
    match (old_path, new_path) {
        (Some(old), Some(new)) if old != new => format!("renamed from {} to {}", old, new),
        (Some(path), Some(_)) => format!("modified {}", path),
        (None, Some(new)) => format!("added {}", new),
        (Some(old), None) => format!("deleted {}", old),
        (None, None) => "modified unknown file".to_string(),
    }
}

/// Render the stats line for a file diff
pub fn stat_line(stat: Option<&DiffStat>) -> String {
    match stat {
        Some(stat) => match stat.changed {
            Some(changed) => format!("Stats: +{} ~{} -{}", stat.added, changed, stat.deleted),
            None => format!("Stats: +{} -{}", stat.added, stat.deleted),
        },
        None => "Stats: unavailable.".to_string(),
    }
}

fn range_term(range: Option<&DiffRange>, sign: char) -> String {
    let start = range
        .and_then(|r| r.start_line)
        .map(|s| s.to_string())
        .unwrap_or_else(|| NO_START.to_string());
    match range.and_then(|r| r.lines) {
        Some(lines) => format!("{}{},{}", sign, start, lines),
        None => format!("{}{}", sign, start),
    }
}

/// Render `-start,lines +start,lines` for a hunk's range pair
pub fn hunk_ranges(old: Option<&DiffRange>, new: Option<&DiffRange>) -> String {
    format!("{} {}", range_term(old, '-'), range_term(new, '+'))
}

/// Truncate a hunk body to its first lines, marking the cut
pub fn truncate_body(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    if lines.len() <= MAX_HUNK_BODY_LINES {
        body.trim_end_matches('\n').to_string()
    } else {
        let mut out = lines[..MAX_HUNK_BODY_LINES].join("\n");
        out.push('\n');
        out.push_str(TRUNCATION_MARKER);
        out
    }
}

/// Render one file diff as a plain-text block
pub fn render_file_diff(diff: &FileDiff) -> String {
    let mut out = String::new();
    out.push_str(&file_label(diff.old_path.as_deref(), diff.new_path.as_deref()));
    out.push('\n');
    out.push_str(&stat_line(diff.stat.as_ref()));

    for hunk in &diff.hunks {
        out.push('\n');
        out.push_str("@@ ");
        out.push_str(&hunk_ranges(hunk.old_range.as_ref(), hunk.new_range.as_ref()));
        out.push_str(" @@");
        if let Some(section) = hunk.section.as_deref().filter(|s| !s.is_empty()) {
            out.push(' ');
            out.push_str(section);
        }
        if let Some(body) = hunk.body.as_deref().filter(|b| !b.is_empty()) {
            out.push('\n');
            out.push_str(&truncate_body(body));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::commit::DiffHunk;

    #[test]
    fn test_label_renamed() {
        assert_eq!(
            file_label(Some("src/a.rs"), Some("src/b.rs")),
            "renamed from src/a.rs to src/b.rs"
        );
    }

    #[test]
    fn test_label_added_deleted_modified() {
        assert_eq!(file_label(None, Some("src/b.rs")), "added src/b.rs");
        assert_eq!(file_label(Some("src/a.rs"), None), "deleted src/a.rs");
        assert_eq!(file_label(Some("src/a.rs"), Some("src/a.rs")), "modified src/a.rs");
        assert_eq!(file_label(None, None), "modified unknown file");
    }

    #[test]
    fn test_stat_line_full_and_partial() {
        let stat = DiffStat {
            added: 3,
            changed: Some(2),
            deleted: 1,
        };
        assert_eq!(stat_line(Some(&stat)), "Stats: +3 ~2 -1");

        let stat = DiffStat {
            added: 3,
            changed: None,
            deleted: 1,
        };
        assert_eq!(stat_line(Some(&stat)), "Stats: +3 -1");
    }

    #[test]
    fn test_stat_line_unavailable() {
        assert_eq!(stat_line(None), "Stats: unavailable.");
    }

    #[test]
    fn test_hunk_ranges_complete() {
        let old = DiffRange {
            start_line: Some(1),
            lines: Some(5),
        };
        let new = DiffRange {
            start_line: Some(2),
            lines: Some(6),
        };
        assert_eq!(hunk_ranges(Some(&old), Some(&new)), "-1,5 +2,6");
    }

    #[test]
    fn test_hunk_ranges_missing_pieces() {
        let old = DiffRange {
            start_line: None,
            lines: Some(5),
        };
        let new = DiffRange {
            start_line: Some(2),
            lines: None,
        };
        assert_eq!(hunk_ranges(Some(&old), Some(&new)), "-∅,5 +2");
        assert_eq!(hunk_ranges(None, None), "-∅ +∅");
    }

    #[test]
    fn test_body_truncated_after_ten_lines() {
        let body: String = (1..=15)
            .map(|i| format!("line {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let rendered = truncate_body(&body);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[9], "line 10");
        assert_eq!(lines[10], "…");
    }

    #[test]
    fn test_short_body_untouched() {
        assert_eq!(truncate_body("one\ntwo\n"), "one\ntwo");
    }

    #[test]
    fn test_render_file_diff_block() {
        let diff = FileDiff {
            old_path: None,
            new_path: Some("src/lib.rs".to_string()),
            stat: Some(DiffStat {
                added: 2,
                changed: None,
                deleted: 0,
            }),
            hunks: vec![DiffHunk {
                old_range: Some(DiffRange {
                    start_line: Some(0),
                    lines: Some(0),
                }),
                new_range: Some(DiffRange {
                    start_line: Some(1),
                    lines: Some(2),
                }),
                section: None,
                body: Some("+pub mod config;\n+pub mod server;".to_string()),
            }],
        };
        let rendered = render_file_diff(&diff);
        assert!(rendered.starts_with("added src/lib.rs\nStats: +2 -0\n@@ -0,0 +1,2 @@\n"));
        assert!(rendered.ends_with("+pub mod server;"));
    }
}
