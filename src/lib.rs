//! Sourcegraph MCP Library
//!
//! MCP-compatible tools backed by the Sourcegraph GraphQL API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use sourcegraph_mcp::{config::Config, server::SourcegraphMcpServer, sg::SgClient};
//!
//! let config = Config::load()?;
//! let server = SourcegraphMcpServer::new(SgClient::new(&config)?);
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! # Features
//! - Repositories: metadata, listing, language breakdown
//! - Files: content, blame, recursive directory tree
//! - Branches: paginated listing
//! - Search: code, symbols, commits
//! - Commits: listing, diffs
//!
//! # Requirements
//! - A reachable Sourcegraph instance (`SRC_ENDPOINT`)
//! - An access token (`SRC_ACCESS_TOKEN`)

pub mod config;
pub mod format;
pub mod handlers;
pub mod params;
pub mod query;
pub mod server;
pub mod sg;
pub mod shares;
pub mod types;

// Re-export main server type
pub use server::SourcegraphMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
