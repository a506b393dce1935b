//! Search tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchCodeParams {
    #[schemars(description = "Search query in Sourcegraph search syntax")]
    pub query: String,
    #[schemars(description = "Maximum number of results (default: 20, max: 500)")]
    pub limit: Option<f64>,
    #[schemars(description = "Server-side search timeout in milliseconds")]
    pub timeout_ms: Option<f64>,
    #[schemars(description = "Search protocol version (default: V3)")]
    pub version: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchSymbolsParams {
    #[schemars(description = "Symbol name or pattern to search for")]
    pub query: String,
    #[schemars(description = "Symbol kinds to keep, e.g. [\"func\", \"class\"]; unknown kinds are ignored")]
    pub kinds: Option<Vec<String>>,
    #[schemars(description = "Maximum number of results (default: 20, max: 100)")]
    pub limit: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchCommitsParams {
    #[schemars(description = "Term to search commit messages for")]
    pub query: Option<String>,
    #[schemars(description = "Restrict the search to one repository")]
    pub repo: Option<String>,
    #[schemars(description = "Filter by author name or email")]
    pub author: Option<String>,
    #[schemars(description = "Only commits after this date, e.g. \"2024-01-01\" or \"1 month ago\"")]
    pub after: Option<String>,
    #[schemars(description = "Only commits before this date")]
    pub before: Option<String>,
    #[schemars(description = "Maximum number of results (default: 20, max: 100)")]
    pub limit: Option<f64>,
}
