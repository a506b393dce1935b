//! File tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FileReadParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub repo: String,
    #[schemars(description = "File path within the repository")]
    pub path: String,
    #[schemars(description = "Revision (branch, tag, or commit); defaults to HEAD")]
    pub rev: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FileBlameParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub repo: String,
    #[schemars(description = "File path within the repository")]
    pub path: String,
    #[schemars(description = "Revision (branch, tag, or commit); defaults to HEAD")]
    pub rev: Option<String>,
    #[schemars(description = "First line to blame, 1-based; 0 or absent starts at the top")]
    pub start_line: Option<u32>,
    #[schemars(description = "Last line to blame, inclusive; 0 or absent blames to the end")]
    pub end_line: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FileTreeParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub repo: String,
    #[schemars(description = "Directory to start from; defaults to the repository root")]
    pub path: Option<String>,
    #[schemars(description = "Revision (branch, tag, or commit); defaults to HEAD")]
    pub rev: Option<String>,
}
