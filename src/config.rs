//! Configuration loading for sourcegraph-mcp
//!
//! Configuration is sourced from environment variables at process start:
//! - `SRC_ENDPOINT` - base URL of the Sourcegraph instance (required)
//! - `SRC_ACCESS_TOKEN` - access token for the instance (required)
//! - `SRC_TIMEOUT_MS` - per-request timeout in milliseconds (default: 30000)
//!
//! The loaded config is validated once and passed into the GraphQL client by
//! value; nothing reads the environment after startup.

use anyhow::{bail, Context, Result};
use url::Url;

/// Default per-request timeout when `SRC_TIMEOUT_MS` is unset or invalid
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Sourcegraph instance, without a trailing slash
    pub endpoint: String,
    /// Access token sent on every request
    pub access_token: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Config {
    /// Load and validate configuration from the environment
    pub fn load() -> Result<Self> {
        let endpoint = std::env::var("SRC_ENDPOINT")
            .context("SRC_ENDPOINT is not set - point it at your Sourcegraph instance")?;
        let access_token = std::env::var("SRC_ACCESS_TOKEN")
            .context("SRC_ACCESS_TOKEN is not set - create one under user settings")?;

        let timeout_ms = std::env::var("SRC_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|ms| *ms > 0)
            .map(|ms| ms as u64)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self::validated(endpoint, access_token, timeout_ms)
    }

    /// Validate raw values and normalize the endpoint
    fn validated(endpoint: String, access_token: String, timeout_ms: u64) -> Result<Self> {
        if access_token.trim().is_empty() {
            bail!("SRC_ACCESS_TOKEN is empty");
        }

        let parsed = Url::parse(endpoint.trim())
            .with_context(|| format!("SRC_ENDPOINT is not a valid URL: {}", endpoint))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            bail!("SRC_ENDPOINT must be an http(s) URL, got: {}", endpoint);
        }

        let endpoint = endpoint.trim().trim_end_matches('/').to_string();

        Ok(Self {
            endpoint,
            access_token,
            timeout_ms,
        })
    }
}
