//! Branch tool parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BranchListParams {
    #[schemars(description = "Repository name, e.g. github.com/owner/repo")]
    pub repo: String,
    #[schemars(description = "Maximum number of branches to return (default: 20, max: 100)")]
    pub limit: Option<f64>,
}
