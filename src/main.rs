//! Sourcegraph MCP Server
//!
//! Exposes the Sourcegraph GraphQL API as MCP tools for exploring
//! repositories: metadata, files, blame, directory trees, branches, and
//! code/symbol/commit search.
//!
//! # Configuration
//!
//! - `SRC_ENDPOINT` - base URL of the Sourcegraph instance
//! - `SRC_ACCESS_TOKEN` - access token
//! - `SRC_TIMEOUT_MS` - per-request timeout (default: 30000)
//! - `LOG_FORMAT=json` - structured log output
//!
//! # Usage
//!
//! Run directly:
//! ```bash
//! SRC_ENDPOINT=https://sourcegraph.example.com SRC_ACCESS_TOKEN=... sourcegraph-mcp
//! ```
//!
//! Or configure in `.mcp.json`:
//! ```json
//! {
//!   "mcpServers": {
//!     "sourcegraph": {
//!       "command": "./target/release/sourcegraph-mcp",
//!       "env": { "SRC_ENDPOINT": "...", "SRC_ACCESS_TOKEN": "..." }
//!     }
//!   }
//! }
//! ```

use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sourcegraph_mcp::config::Config;
use sourcegraph_mcp::server::SourcegraphMcpServer;
use sourcegraph_mcp::sg::SgClient;

/// Initialize logging to stderr (stdout is used for the MCP protocol)
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("sourcegraph_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    tracing::info!("Starting Sourcegraph MCP Server");

    let config = Config::load()?;
    tracing::info!("Endpoint: {}", config.endpoint);

    let client = SgClient::new(&config)?;
    let server = SourcegraphMcpServer::new(client);

    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
