//! Handler implementations for Sourcegraph MCP tools
//!
//! Organized by domain: repo, file, tree, blame, search, commit, branch.
//! Each handler builds query variables, issues the GraphQL call, and walks
//! the nullable response chain with explicit guards. Tools that return
//! formatted text catch every failure and render it as a prefixed message;
//! tools that return structured results propagate the failure instead.

mod blame;
mod branch;
mod commit;
mod file;
mod repo;
mod search;
mod tree;

pub use blame::*;
pub use branch::*;
pub use commit::*;
pub use file::*;
pub use repo::*;
pub use search::*;
pub use tree::*;

use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::sg::{SgError, SgResult};

/// Convert an SgError to an MCP error
pub fn sg_to_mcp_error(e: SgError) -> McpError {
    McpError::internal_error(e.to_string(), None)
}

/// Create a plain text tool result
pub(crate) fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create a pretty-printed JSON tool result
pub(crate) fn json_result<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Deserialize a GraphQL `data` object into its typed shape
pub(crate) fn parse_data<T: DeserializeOwned>(data: Value) -> SgResult<T> {
    Ok(serde_json::from_value(data)?)
}
