//! Repository tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RepoGetParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RepoListParams {
    #[schemars(description = "Filter repositories by name substring")]
    pub query: Option<String>,
    #[schemars(description = "Maximum number of repositories to return (default: 10, max: 100)")]
    pub limit: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RepoLanguagesParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub name: String,
}
