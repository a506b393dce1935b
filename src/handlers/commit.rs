//! Commit listing and diff handler implementations

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::format::date::canonical_utc_or;
use crate::format::diff::render_file_diff;
use crate::format::{UNKNOWN, UNKNOWN_AUTHOR};
use crate::params::{CommitDiffParams, CommitListParams};
use crate::query::{default_revision, normalize_limit, DEFAULT_MAX};
use crate::sg::{queries, NotFound, SgClient, SgError, SgResult};
use crate::types::commit::{CommitListData, DiffData};

use super::{parse_data, text_result};

/// List recent commits as a formatted report
pub async fn commit_list(
    client: &SgClient,
    params: CommitListParams,
) -> Result<CallToolResult, McpError> {
    match commit_list_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error listing commits: {}", e))),
    }
}

async fn commit_list_report(client: &SgClient, params: &CommitListParams) -> SgResult<String> {
    let rev = default_revision(params.rev.as_deref());
    let first = normalize_limit(params.limit, 20, DEFAULT_MAX);

    let data = client
        .query(
            queries::COMMIT_LIST,
            json!({ "repo": params.repo, "rev": rev, "first": first }),
        )
        .await?;
    let data: CommitListData = parse_data(data)?;

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
    let ancestors = commit.ancestors.ok_or(SgError::MissingData)?;

    if ancestors.nodes.is_empty() {
        return Ok(format!("No commits found at {} in {}.", rev, params.repo));
    }

    let mut report = format!(
        "Last {} commits at {} in {}:\n",
        ancestors.nodes.len(),
        rev,
        params.repo
    );
    for node in &ancestors.nodes {
        let oid = node.abbreviated_oid.as_deref().unwrap_or(UNKNOWN);
        let author = node
            .author
            .as_ref()
            .and_then(|a| a.person.as_ref())
            .and_then(|p| p.name.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR);
        let date = canonical_utc_or(
            node.author.as_ref().and_then(|a| a.date.as_deref()),
            UNKNOWN,
        );
        let subject = node.subject.as_deref().unwrap_or("");
        report.push_str(&format!("\n{:<10} {}  {}  {}", oid, date, author, subject));
    }

    Ok(report)
}

/// Render the diff between two revisions as a formatted report
pub async fn commit_diff(
    client: &SgClient,
    params: CommitDiffParams,
) -> Result<CallToolResult, McpError> {
    match commit_diff_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error computing diff: {}", e))),
    }
}

async fn commit_diff_report(client: &SgClient, params: &CommitDiffParams) -> SgResult<String> {
    let data = client
        .query(
            queries::COMMIT_DIFF,
            json!({ "repo": params.repo, "base": params.base, "head": params.head }),
        )
        .await?;
    let data: DiffData = parse_data(data)?;

    let Some(repo) = data.repository else {
        return Err(NotFound::Repository(params.repo.clone()).into());
    };
    let Some(comparison) = repo.comparison else {
        return Err(NotFound::Comparison {
            repo: params.repo.clone(),
            base: params.base.clone(),
            head: params.head.clone(),
        }
        .into());
    };
    let file_diffs = comparison.file_diffs.ok_or(SgError::MissingData)?;

    if file_diffs.nodes.is_empty() {
        return Ok(format!(
            "No differences between {} and {} in {}.",
            params.base, params.head, params.repo
        ));
    }

    let mut report = format!(
        "Diff {}...{} in {} ({} files changed):\n",
        params.base,
        params.head,
        params.repo,
        file_diffs.nodes.len()
    );
    for diff in &file_diffs.nodes {
        report.push('\n');
        report.push_str(&render_file_diff(diff));
        report.push('\n');
    }

    Ok(report.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_commit_list_chain_tags_revision() {
        let data: CommitListData = serde_json::from_value(json!({
            "repository": { "commit": null }
        }))
        .unwrap();
        assert!(data.repository.unwrap().commit.is_none());
    }

    #[test]
    fn test_diff_data_parses_nested_hunks() {
        let data: DiffData = serde_json::from_value(json!({
            "repository": { "comparison": { "fileDiffs": { "nodes": [ {
                "oldPath": "src/a.rs",
                "newPath": "src/a.rs",
                "stat": { "added": 1, "changed": 0, "deleted": 2 },
                "hunks": [ {
                    "oldRange": { "startLine": 3, "lines": 4 },
                    "newRange": { "startLine": 3, "lines": 3 },
                    "section": "fn spin",
                    "body": "-old\n+new"
                } ]
            } ] } } }
        }))
        .unwrap();
        let nodes = data
            .repository
            .unwrap()
            .comparison
            .unwrap()
            .file_diffs
            .unwrap()
            .nodes;
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].hunks.len(), 1);
        assert_eq!(nodes[0].stat.as_ref().unwrap().changed, Some(0));
    }
}
