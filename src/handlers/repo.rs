//! Repository handler implementations

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::format::date::canonical_utc_or;
use crate::format::UNKNOWN;
use crate::params::{RepoGetParams, RepoLanguagesParams, RepoListParams};
use crate::query::{normalize_limit, DEFAULT_MAX};
use crate::sg::{queries, NotFound, SgClient, SgResult};
use crate::shares::normalize_shares;
use crate::types::languages::LanguageStatisticsData;
use crate::types::repo::{RepoInfoResult, RepositoryInfoData, RepositoryListData};
use crate::types::LanguagesResult;

use super::{json_result, parse_data, sg_to_mcp_error, text_result};

/// Fetch repository metadata as a structured result
pub async fn repo_get(
    client: &SgClient,
    params: RepoGetParams,
) -> Result<CallToolResult, McpError> {
    let result = repo_get_inner(client, &params)
        .await
        .map_err(sg_to_mcp_error)?;
    json_result(&result)
}

async fn repo_get_inner(client: &SgClient, params: &RepoGetParams) -> SgResult<RepoInfoResult> {
    let data = client
        .query(queries::REPOSITORY_INFO, json!({ "name": params.name }))
        .await?;
    let data: RepositoryInfoData = parse_data(data)?;

    let Some(repo) = data.repository else {
        return Err(NotFound::Repository(params.name.clone()).into());
    };

    Ok(RepoInfoResult {
        id: repo.id,
        name: repo.name,
        description: repo.description.unwrap_or_default(),
        url: repo.url.unwrap_or_else(|| UNKNOWN.to_string()),
        is_private: repo.is_private,
        is_fork: repo.is_fork,
        is_archived: repo.is_archived,
        default_branch: repo
            .default_branch
            .and_then(|b| b.display_name)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        created_at: canonical_utc_or(repo.created_at.as_deref(), UNKNOWN),
        updated_at: canonical_utc_or(repo.updated_at.as_deref(), UNKNOWN),
    })
}

/// List repositories as a formatted report
pub async fn repo_list(
    client: &SgClient,
    params: RepoListParams,
) -> Result<CallToolResult, McpError> {
    match repo_list_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error listing repositories: {}", e))),
    }
}

async fn repo_list_report(client: &SgClient, params: &RepoListParams) -> SgResult<String> {
    let first = normalize_limit(params.limit, 10, DEFAULT_MAX);

    let mut variables = json!({ "first": first });
    if let Some(ref query) = params.query {
        variables["query"] = json!(query);
    }

    let data: RepositoryListData = parse_data(
        client.query(queries::REPOSITORY_LIST, variables).await?,
    )?;

    Ok(render_repo_list(data))
}

/// Render the repository listing; an empty connection still produces a body
fn render_repo_list(data: RepositoryListData) -> String {
    let Some(connection) = data.repositories else {
        return "No repositories found.".to_string();
    };
    if connection.nodes.is_empty() {
        return "No repositories found.".to_string();
    }

    let mut report = match connection.total_count {
        Some(total) => format!(
            "Found {} repositories (total: {}):\n",
            connection.nodes.len(),
            total
        ),
        None => format!("Found {} repositories:\n", connection.nodes.len()),
    };

    for node in &connection.nodes {
        let branch = node
            .default_branch
            .as_ref()
            .and_then(|b| b.display_name.as_deref())
            .unwrap_or(UNKNOWN);
        let description = node.description.as_deref().unwrap_or("(no description)");
        report.push_str(&format!("\n{} (branch: {})\n  {}", node.name, branch, description));
        if let Some(ref url) = node.url {
            report.push_str(&format!("\n  {}", url));
        }
    }

    report
}

/// Fetch the language breakdown of a repository as a structured result
pub async fn repo_languages(
    client: &SgClient,
    params: RepoLanguagesParams,
) -> Result<CallToolResult, McpError> {
    let result = repo_languages_inner(client, &params)
        .await
        .map_err(sg_to_mcp_error)?;
    json_result(&result)
}

async fn repo_languages_inner(
    client: &SgClient,
    params: &RepoLanguagesParams,
) -> SgResult<LanguagesResult> {
    let data = client
        .query(queries::REPOSITORY_LANGUAGES, json!({ "name": params.name }))
        .await?;
    let data: LanguageStatisticsData = parse_data(data)?;

    let Some(repo) = data.repository else {
        return Err(NotFound::Repository(params.name.clone()).into());
    };

    let total_bytes: u64 = repo.language_statistics.iter().map(|s| s.total_bytes).sum();
    let languages = normalize_shares(repo.language_statistics);

    Ok(LanguagesResult {
        repository: repo.name,
        total_bytes,
        languages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn list_data(value: serde_json::Value) -> RepositoryListData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_listing_has_an_explicit_body() {
        let report = render_repo_list(list_data(json!({
            "repositories": { "nodes": [], "totalCount": 0 }
        })));
        assert_eq!(report, "No repositories found.");

        let report = render_repo_list(list_data(json!({ "repositories": null })));
        assert_eq!(report, "No repositories found.");
    }

    #[test]
    fn test_listing_resolves_missing_leaves_to_placeholders() {
        let report = render_repo_list(list_data(json!({
            "repositories": {
                "nodes": [
                    { "name": "github.com/acme/widget" },
                    {
                        "name": "github.com/acme/gadget",
                        "description": "Gadget factory",
                        "url": "https://sourcegraph.example.com/github.com/acme/gadget",
                        "defaultBranch": { "displayName": "main" }
                    }
                ],
                "totalCount": 2
            }
        })));
        assert!(report.contains("Found 2 repositories (total: 2):"));
        assert!(report.contains("github.com/acme/widget (branch: unknown)"));
        assert!(report.contains("(no description)"));
        assert!(report.contains("github.com/acme/gadget (branch: main)"));
        assert!(report.contains("Gadget factory"));
        assert!(!report.contains("null"));
    }

    #[test]
    fn test_listing_render_is_idempotent() {
        let value = json!({
            "repositories": {
                "nodes": [ { "name": "github.com/acme/widget" } ],
                "totalCount": 1
            }
        });
        let first = render_repo_list(list_data(value.clone()));
        let second = render_repo_list(list_data(value));
        assert_eq!(first, second);
    }

    #[test]
    fn test_repo_info_missing_repository_is_none() {
        let data: RepositoryInfoData =
            serde_json::from_value(json!({ "repository": null })).unwrap();
        assert!(data.repository.is_none());
    }

    #[test]
    fn test_repo_info_optional_leaves_default() {
        let data: RepositoryInfoData = serde_json::from_value(json!({
            "repository": {
                "id": "UmVwbzox",
                "name": "github.com/acme/widget",
                "defaultBranch": null
            }
        }))
        .unwrap();
        let repo = data.repository.unwrap();
        assert!(repo.description.is_none());
        assert!(!repo.is_private);
        assert!(repo.default_branch.is_none());
    }
}
