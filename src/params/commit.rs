//! Commit tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommitListParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub repo: String,
    #[schemars(description = "Revision to list commits from; defaults to HEAD")]
    pub rev: Option<String>,
    #[schemars(description = "Maximum number of commits to return (default: 20, max: 100)")]
    pub limit: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommitDiffParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub repo: String,
    #[schemars(description = "Base revision of the comparison")]
    pub base: String,
    #[schemars(description = "Head revision of the comparison")]
    pub head: String,
}
