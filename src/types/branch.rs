//! Branch listing type definitions

use serde::Deserialize;

/// `data` shape of the branch listing query
#[derive(Debug, Deserialize)]
pub struct BranchData {
    pub repository: Option<BranchRepository>,
}

#[derive(Debug, Deserialize)]
pub struct BranchRepository {
    pub branches: Option<BranchConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchConnection {
    /// Array slots can be null; the walker skips them
    #[serde(default)]
    pub nodes: Vec<Option<BranchNode>>,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub total_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchNode {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub target: Option<BranchTarget>,
}

#[derive(Debug, Deserialize)]
pub struct BranchTarget {
    #[serde(default)]
    pub oid: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}
