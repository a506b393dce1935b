//! Blame handler implementation
//!
//! Each blame range is expanded line by line into one row per line number,
//! so three blamed lines from one commit produce three rows with identical
//! commit metadata.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::format::date::canonical_utc_or;
use crate::format::{UNKNOWN, UNKNOWN_AUTHOR};
use crate::params::FileBlameParams;
use crate::query::default_revision;
use crate::sg::{queries, NotFound, SgClient, SgError, SgResult};
use crate::types::blame::{BlameData, BlameHunk};

use super::{parse_data, text_result};

/// Blame a file, one output row per line
pub async fn file_blame(
    client: &SgClient,
    params: FileBlameParams,
) -> Result<CallToolResult, McpError> {
    match file_blame_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error blaming file: {}", e))),
    }
}

async fn file_blame_report(client: &SgClient, params: &FileBlameParams) -> SgResult<String> {
    let start = params.start_line.unwrap_or(0);
    let end = params.end_line.unwrap_or(0);
    if start > 0 && end > 0 && start > end {
        return Err(SgError::InvalidInput(format!(
            "start_line ({}) must not be greater than end_line ({})",
            start, end
        )));
    }

    let rev = default_revision(params.rev.as_deref());

    let data = client
        .query(
            queries::FILE_BLAME,
            json!({
                "repo": params.repo,
                "rev": rev,
                "path": params.path,
                "startLine": start,
                "endLine": end,
            }),
        )
        .await?;
    let data: BlameData = parse_data(data)?;

    let Some(repo) = data.repository else {
        return Err(NotFound::Repository(params.repo.clone()).into());
    };
    let Some(commit) = repo.commit else {
        return Err(NotFound::Revision {
            repo: params.repo.clone(),
            rev,
        }
        .into());
    };
    let Some(blob) = commit.blob else {
        return Err(NotFound::File {
            repo: params.repo.clone(),
            rev,
            path: params.path.clone(),
        }
        .into());
    };

    let rows = expand_hunks(&blob.blame);
    if rows.is_empty() {
        return Ok(format!(
            "No blame information available for {} at {}.",
            params.path, rev
        ));
    }

    let mut report = format!("Blame for {} @ {}:\n", params.path, rev);
    for row in rows {
        report.push('\n');
        report.push_str(&row);
    }
    Ok(report)
}

/// Expand blame hunks into per-line rows
///
/// Ranges with non-finite endpoints are skipped; everything else produces
/// one row per line in `startLine..=endLine`.
fn expand_hunks(hunks: &[BlameHunk]) -> Vec<String> {
    let mut rows = Vec::new();

    for hunk in hunks {
        let (Some(start), Some(end)) = (hunk.start_line, hunk.end_line) else {
            continue;
        };
        if !start.is_finite() || !end.is_finite() {
            continue;
        }
        let start = start as u64;
        let end = end as u64;

        let oid = hunk
            .commit
            .as_ref()
            .and_then(|c| c.abbreviated_oid.as_deref())
            .unwrap_or(UNKNOWN);
        let author = hunk
            .author
            .as_ref()
            .and_then(|a| a.person.as_ref())
            .and_then(|p| p.name.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR);
        let date = canonical_utc_or(
            hunk.author.as_ref().and_then(|a| a.date.as_deref()),
            UNKNOWN,
        );
        let message = hunk
            .message
            .as_deref()
            .and_then(|m| m.lines().next())
            .unwrap_or("");

        for line in start..=end {
            rows.push(format!(
                "{:>6}  {:<10}  {:<20}  {}  {}",
                line, oid, date, author, message
            ));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hunk(start: Option<f64>, end: Option<f64>) -> BlameHunk {
        serde_json::from_value(json!({
            "startLine": start,
            "endLine": end,
            "message": "Fix widget rotation\n\nLonger body",
            "author": {
                "person": { "name": "Alice Example", "email": "alice@example.com" },
                "date": "2024-03-01T12:00:00Z"
            },
            "commit": { "oid": "deadbeefcafe", "abbreviatedOID": "deadbee" }
        }))
        .unwrap()
    }

    #[test]
    fn test_range_expands_to_one_row_per_line() {
        let rows = expand_hunks(&[hunk(Some(1.0), Some(3.0))]);
        assert_eq!(rows.len(), 3);
        for (i, row) in rows.iter().enumerate() {
            assert!(row.contains(&format!("{}", i + 1)));
            assert!(row.contains("deadbee"));
            assert!(row.contains("Alice Example"));
            assert!(row.contains("Fix widget rotation"));
            assert!(!row.contains("Longer body"));
        }
    }

    #[test]
    fn test_non_finite_ranges_skipped() {
        let rows = expand_hunks(&[
            hunk(Some(f64::NAN), Some(3.0)),
            hunk(Some(1.0), Some(f64::INFINITY)),
            hunk(None, Some(2.0)),
        ]);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_metadata_resolves_to_placeholders() {
        let bare: BlameHunk = serde_json::from_value(json!({
            "startLine": 5, "endLine": 5
        }))
        .unwrap();
        let rows = expand_hunks(&[bare]);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].contains(UNKNOWN_AUTHOR));
        assert!(rows[0].contains(UNKNOWN));
    }
}
