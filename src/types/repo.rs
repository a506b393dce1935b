//! Repository type definitions
//!
//! Response shapes for the repository info and listing queries, plus the
//! structured result returned by the repository info tool.

use serde::{Deserialize, Serialize};

/// `data` shape of the repository info query
#[derive(Debug, Deserialize)]
pub struct RepositoryInfoData {
    pub repository: Option<RepositoryInfo>,
}

/// A repository as returned by the info query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_fork: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub default_branch: Option<BranchRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Reference to a branch by display name
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchRef {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// `data` shape of the repository listing query
#[derive(Debug, Deserialize)]
pub struct RepositoryListData {
    pub repositories: Option<RepositoryConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    #[serde(default)]
    pub nodes: Vec<RepositoryListNode>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryListNode {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub default_branch: Option<BranchRef>,
}

/// Structured result of the repository info tool
///
/// Every nullable upstream field is resolved before this struct is built, so
/// the serialized output carries no nulls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfoResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub is_private: bool,
    pub is_fork: bool,
    pub is_archived: bool,
    pub default_branch: String,
    pub created_at: String,
    pub updated_at: String,
}
