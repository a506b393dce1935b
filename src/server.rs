//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes Sourcegraph
//! GraphQL operations as tools. Handler implementations are in the
//! handlers/ module; every method here only delegates.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::handlers;
use crate::params::*;
use crate::sg::SgClient;

/// The main Sourcegraph MCP Server
#[derive(Clone)]
pub struct SourcegraphMcpServer {
    client: Arc<SgClient>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SourcegraphMcpServer {
    pub fn new(client: SgClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    // ========================================================================
    // Repository Tools
    // ========================================================================

    #[tool(description = "Get metadata about a repository: description, URL, default branch, flags")]
    async fn sg_repo_get(
        &self,
        Parameters(params): Parameters<RepoGetParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::repo_get(&self.client, params).await
    }

    #[tool(description = "List repositories on the instance, optionally filtered by name")]
    async fn sg_repo_list(
        &self,
        Parameters(params): Parameters<RepoListParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::repo_list(&self.client, params).await
    }

    #[tool(description = "Get the language breakdown of a repository with byte counts and percentages")]
    async fn sg_repo_languages(
        &self,
        Parameters(params): Parameters<RepoLanguagesParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::repo_languages(&self.client, params).await
    }

    // ========================================================================
    // File Tools
    // ========================================================================

    #[tool(description = "Read a file's content at a revision")]
    async fn sg_file_read(
        &self,
        Parameters(params): Parameters<FileReadParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::file_read(&self.client, params).await
    }

    #[tool(description = "Blame a file line by line, showing which commit last touched each line")]
    async fn sg_file_blame(
        &self,
        Parameters(params): Parameters<FileBlameParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::file_blame(&self.client, params).await
    }

    #[tool(description = "Fetch the full directory tree of a repository, recursively, as structured data")]
    async fn sg_file_tree(
        &self,
        Parameters(params): Parameters<FileTreeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::file_tree(&self.client, params).await
    }

    // ========================================================================
    // Branch Tools
    // ========================================================================

    #[tool(description = "List branches of a repository")]
    async fn sg_branch_list(
        &self,
        Parameters(params): Parameters<BranchListParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::branch_list(&self.client, params).await
    }

    // ========================================================================
    // Search Tools
    // ========================================================================

    #[tool(description = "Search file contents across repositories using Sourcegraph search syntax")]
    async fn sg_search_code(
        &self,
        Parameters(params): Parameters<SearchCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_code(&self.client, params).await
    }

    #[tool(description = "Search symbol definitions (functions, classes, ...) across repositories")]
    async fn sg_search_symbols(
        &self,
        Parameters(params): Parameters<SearchSymbolsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_symbols(&self.client, params).await
    }

    #[tool(description = "Search commit messages, optionally filtered by repository, author, and date range")]
    async fn sg_search_commits(
        &self,
        Parameters(params): Parameters<SearchCommitsParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::search_commits(&self.client, params).await
    }

    // ========================================================================
    // Commit Tools
    // ========================================================================

    #[tool(description = "List recent commits reachable from a revision")]
    async fn sg_commit_list(
        &self,
        Parameters(params): Parameters<CommitListParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::commit_list(&self.client, params).await
    }

    #[tool(description = "Show the file diffs between two revisions")]
    async fn sg_commit_diff(
        &self,
        Parameters(params): Parameters<CommitDiffParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::commit_diff(&self.client, params).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for SourcegraphMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Sourcegraph MCP Server - provides tools for exploring repositories \
                 on a Sourcegraph instance: repository metadata and languages, file \
                 content, blame, directory trees, branches, and code/symbol/commit \
                 search. Requires SRC_ENDPOINT and SRC_ACCESS_TOKEN."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
