//! Branch listing handler
//!
//! Walks the branch connection page by page, accumulating nodes until the
//! requested limit is reached or the server reports no further page. Each
//! page asks for at most the server page cap so no single response is
//! unbounded.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::params::BranchListParams;
use crate::query::{normalize_limit, DEFAULT_MAX};
use crate::sg::{queries, NotFound, SgClient, SgResult};
use crate::types::branch::{BranchData, BranchNode};

use super::{parse_data, text_result};

/// Upper bound on a single page request
const SERVER_PAGE_CAP: usize = 50;

/// List branches as a formatted report
pub async fn branch_list(
    client: &SgClient,
    params: BranchListParams,
) -> Result<CallToolResult, McpError> {
    match branch_list_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error listing branches: {}", e))),
    }
}

struct BranchWalk {
    collected: Vec<BranchNode>,
    total_count: Option<u64>,
    more_available: bool,
}

async fn branch_list_report(client: &SgClient, params: &BranchListParams) -> SgResult<String> {
    let limit = normalize_limit(params.limit, 20, DEFAULT_MAX);
    let walk = walk_branches(client, &params.repo, limit).await?;

    if walk.collected.is_empty() {
        return Ok(format!("No branches found in {}.", params.repo));
    }

    let mut report = match walk.total_count {
        Some(total) => format!(
            "Branches in {} (showing {} of {}):\n",
            params.repo,
            walk.collected.len(),
            total
        ),
        None => format!("Branches in {} ({} shown):\n", params.repo, walk.collected.len()),
    };

    for branch in &walk.collected {
        let name = branch.display_name.as_deref().unwrap_or(branch.name.as_str());
        match branch.target.as_ref().and_then(|t| t.oid.as_deref()) {
            Some(oid) => {
                let short = &oid[..oid.len().min(8)];
                report.push_str(&format!("\n{}  ({})", name, short));
            }
            None => report.push_str(&format!("\n{}", name)),
        }
    }

    if walk.more_available {
        report.push_str("\n\nMore branches available; raise the limit to see more.");
    }

    Ok(report)
}

async fn walk_branches(client: &SgClient, repo: &str, limit: usize) -> SgResult<BranchWalk> {
    let mut walk = BranchWalk {
        collected: Vec::new(),
        total_count: None,
        more_available: false,
    };
    let mut cursor: Option<String> = None;

    loop {
        let remaining = limit - walk.collected.len();
        let first = remaining.min(SERVER_PAGE_CAP);

        let mut variables = json!({ "repo": repo, "first": first });
        if let Some(ref after) = cursor {
            variables["after"] = json!(after);
        }

        let data: BranchData =
            parse_data(client.query(queries::BRANCH_LIST, variables).await?)?;

        let Some(repo_node) = data.repository else {
            return Err(NotFound::Repository(repo.to_string()).into());
        };
        let Some(connection) = repo_node.branches else {
            return Err(NotFound::Branches(repo.to_string()).into());
        };

        if walk.total_count.is_none() {
            walk.total_count = connection.total_count;
        }

        // Null array slots are skipped, not counted
        let mut nodes = connection.nodes.into_iter().flatten();
        for node in nodes.by_ref() {
            if walk.collected.len() == limit {
                walk.more_available = true;
                return Ok(walk);
            }
            walk.collected.push(node);
        }

        if walk.collected.len() == limit {
            walk.more_available = connection.page_info.has_next_page;
            return Ok(walk);
        }
        if !connection.page_info.has_next_page {
            return Ok(walk);
        }
        match connection.page_info.end_cursor {
            Some(next) => cursor = Some(next),
            // A next page with no cursor cannot be fetched; stop rather than spin
            None => return Ok(walk),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_slots_in_nodes_are_tolerated() {
        let data: BranchData = serde_json::from_value(json!({
            "repository": { "branches": {
                "nodes": [
                    { "name": "refs/heads/main", "displayName": "main", "target": { "oid": "a1b2c3d4e5" } },
                    null,
                    { "name": "refs/heads/dev", "displayName": "dev" }
                ],
                "pageInfo": { "hasNextPage": false, "endCursor": null },
                "totalCount": 2
            }}
        }))
        .unwrap();
        let connection = data.repository.unwrap().branches.unwrap();
        let live: Vec<_> = connection.nodes.into_iter().flatten().collect();
        assert_eq!(live.len(), 2);
        assert_eq!(live[0].display_name.as_deref(), Some("main"));
    }

    #[test]
    fn test_missing_branch_connection_is_none() {
        let data: BranchData = serde_json::from_value(json!({
            "repository": { "branches": null }
        }))
        .unwrap();
        assert!(data.repository.unwrap().branches.is_none());
    }
}
