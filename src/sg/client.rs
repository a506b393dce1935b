//! Async client for the Sourcegraph GraphQL API
//!
//! A thin transport wrapper: send a query document plus variables, hand back
//! the parsed `data` object or a tagged failure. The client is stateless and
//! safe to share behind `Arc`; every call is an independent request/response
//! pair.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use super::error::{SgError, SgResult};
use crate::config::Config;

/// GraphQL endpoint path on a Sourcegraph instance
const GRAPHQL_PATH: &str = "/.api/graphql";

/// Client for issuing GraphQL queries against one Sourcegraph instance
pub struct SgClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

/// Shape of a GraphQL response envelope
#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl SgClient {
    /// Build a client from validated configuration
    pub fn new(config: &Config) -> SgResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("sourcegraph-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", config.endpoint, GRAPHQL_PATH),
            access_token: config.access_token.clone(),
        })
    }

    /// Execute a GraphQL query and return its `data` object
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level, the
    /// server answers non-2xx, the response carries a GraphQL `errors`
    /// array, or no `data` object is present.
    pub async fn query(&self, document: &str, variables: Value) -> SgResult<Value> {
        let body = serde_json::json!({
            "query": document,
            "variables": variables,
        });

        debug!(endpoint = %self.endpoint, "executing GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("token {}", self.access_token))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "GraphQL request rejected");
            return Err(SgError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlResponse = response.json().await?;

        if !envelope.errors.is_empty() {
            let message = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%message, "GraphQL response carried errors");
            return Err(SgError::Api { message });
        }

        envelope.data.ok_or(SgError::MissingData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_parses_errors_array() {
        let envelope: GraphQlResponse = serde_json::from_str(
            r#"{"errors": [{"message": "first"}, {"message": "second"}]}"#,
        )
        .unwrap();
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors.len(), 2);
        assert_eq!(envelope.errors[0].message, "first");
    }

    #[test]
    fn test_envelope_parses_data() {
        let envelope: GraphQlResponse =
            serde_json::from_str(r#"{"data": {"repository": null}}"#).unwrap();
        assert!(envelope.data.is_some());
        assert!(envelope.errors.is_empty());
    }
}
