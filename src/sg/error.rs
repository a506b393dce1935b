//! Error types for Sourcegraph GraphQL operations
//!
//! Transport failures, GraphQL error arrays, and the per-field absence
//! conditions the API can return are all distinct variants so callers can
//! report exactly which entity was missing.

use thiserror::Error;

/// Errors that can occur when querying the Sourcegraph API
#[derive(Error, Debug)]
pub enum SgError {
    /// The HTTP request itself failed (network, TLS, timeout)
    #[error("GraphQL query failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("GraphQL query failed: HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the server
        body: String,
    },

    /// The response carried a non-empty GraphQL `errors` array
    #[error("GraphQL query failed: {message}")]
    Api {
        /// Concatenated error messages from the response
        message: String,
    },

    /// The response body could not be parsed
    #[error("GraphQL query failed: malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response succeeded but carried no `data` object
    #[error("GraphQL query failed: response contained no data")]
    MissingData,

    /// A nullable container in the response chain was absent
    #[error("{0}")]
    NotFound(#[from] NotFound),

    /// Invalid tool input, detected before any network call
    #[error("{0}")]
    InvalidInput(String),
}

/// The specific missing-entity condition detected while walking a response
///
/// Normalizers stop at the first null container and tag it here; they never
/// walk past a null parent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// `repository` was null
    #[error("repository not found: {0}")]
    Repository(String),

    /// `repository.commit` was null
    #[error("revision not found: {rev} in repository {repo}")]
    Revision {
        /// Repository name
        repo: String,
        /// Revision that failed to resolve
        rev: String,
    },

    /// `repository.commit.tree` was null
    #[error("path not found: {path} at {rev} in repository {repo}")]
    Path {
        /// Repository name
        repo: String,
        /// Revision the path was resolved against
        rev: String,
        /// Path that was missing
        path: String,
    },

    /// `repository.commit.file`/`blob` was null
    #[error("file not found: {path} at {rev} in repository {repo}")]
    File {
        /// Repository name
        repo: String,
        /// Revision the file was resolved against
        rev: String,
        /// File path that was missing
        path: String,
    },

    /// `repository.branches` was null
    #[error("branch listing unavailable for repository {0}")]
    Branches(String),

    /// `repository.comparison` was null
    #[error("comparison not found: {base}...{head} in repository {repo}")]
    Comparison {
        /// Repository name
        repo: String,
        /// Base revision
        base: String,
        /// Head revision
        head: String,
    },
}

/// Result type alias for Sourcegraph operations
pub type SgResult<T> = Result<T, SgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_name_the_entity() {
        let err = NotFound::Repository("github.com/acme/widget".to_string());
        assert_eq!(err.to_string(), "repository not found: github.com/acme/widget");

        let err = NotFound::Revision {
            repo: "github.com/acme/widget".to_string(),
            rev: "deadbeef".to_string(),
        };
        assert!(err.to_string().contains("revision not found"));
        assert!(err.to_string().contains("deadbeef"));
    }

    #[test]
    fn test_api_error_carries_wrapped_prefix() {
        let err = SgError::Api {
            message: "field does not exist".to_string(),
        };
        assert!(err.to_string().starts_with("GraphQL query failed: "));
    }
}
