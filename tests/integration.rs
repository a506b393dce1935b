//! Integration tests for the Sourcegraph MCP server
//!
//! These tests run against a real Sourcegraph instance. They require:
//! - `SRC_ENDPOINT` and `SRC_ACCESS_TOKEN` in the environment
//! - Network access to the instance
//!
//! # Running tests
//!
//! ```bash
//! # Run read-only tests against your instance
//! SRC_ENDPOINT=... SRC_ACCESS_TOKEN=... cargo test --test integration -- --ignored
//!
//! # Point repository-scoped tests at a specific repo
//! TEST_REPO=github.com/owner/repo cargo test --test integration -- --ignored
//! ```

use serde_json::json;

use sourcegraph_mcp::config::Config;
use sourcegraph_mcp::sg::{queries, SgClient};

/// Build a client from the environment, or None when unconfigured
fn client_from_env() -> Option<SgClient> {
    let config = Config::load().ok()?;
    SgClient::new(&config).ok()
}

/// Get the test repository from environment
fn test_repo() -> Option<String> {
    std::env::var("TEST_REPO").ok()
}

#[tokio::test]
#[ignore = "integration test - requires a Sourcegraph instance and network"]
async fn read_repository_list() {
    let Some(client) = client_from_env() else {
        eprintln!("Skipping: SRC_ENDPOINT/SRC_ACCESS_TOKEN not configured");
        return;
    };

    let data = client
        .query(queries::REPOSITORY_LIST, json!({ "first": 3 }))
        .await
        .expect("repository list query failed");

    let repositories = data
        .get("repositories")
        .expect("response missing 'repositories'");
    assert!(
        repositories.get("nodes").is_some(),
        "repositories missing 'nodes': {}",
        repositories
    );
}

#[tokio::test]
#[ignore = "integration test - requires a Sourcegraph instance and network"]
async fn read_search_smoke() {
    let Some(client) = client_from_env() else {
        eprintln!("Skipping: SRC_ENDPOINT/SRC_ACCESS_TOKEN not configured");
        return;
    };

    let data = client
        .query(
            queries::SEARCH,
            json!({ "query": "count:1 test", "version": "V3" }),
        )
        .await
        .expect("search query failed");

    let results = data
        .get("search")
        .and_then(|s| s.get("results"))
        .expect("response missing 'search.results'");
    assert!(results.get("matchCount").is_some());
}

#[tokio::test]
#[ignore = "integration test - requires a Sourcegraph instance and network"]
async fn read_repository_info() {
    let Some(client) = client_from_env() else {
        eprintln!("Skipping: SRC_ENDPOINT/SRC_ACCESS_TOKEN not configured");
        return;
    };
    let Some(repo) = test_repo() else {
        eprintln!("Skipping: set TEST_REPO to a repository on your instance");
        return;
    };

    let data = client
        .query(queries::REPOSITORY_INFO, json!({ "name": repo }))
        .await
        .expect("repository info query failed");

    let repository = data.get("repository").expect("response missing 'repository'");
    assert!(
        !repository.is_null(),
        "TEST_REPO not found on the instance"
    );
    assert!(repository.get("name").is_some());
}

#[tokio::test]
#[ignore = "integration test - requires a Sourcegraph instance and network"]
async fn read_tree_root() {
    let Some(client) = client_from_env() else {
        eprintln!("Skipping: SRC_ENDPOINT/SRC_ACCESS_TOKEN not configured");
        return;
    };
    let Some(repo) = test_repo() else {
        eprintln!("Skipping: set TEST_REPO to a repository on your instance");
        return;
    };

    let data = client
        .query(
            queries::DIRECTORY_TREE,
            json!({ "repo": repo, "rev": "HEAD", "path": "" }),
        )
        .await
        .expect("tree query failed");

    let entries = data
        .get("repository")
        .and_then(|r| r.get("commit"))
        .and_then(|c| c.get("tree"))
        .and_then(|t| t.get("entries"))
        .expect("response missing tree entries");
    assert!(entries.is_array());
}

#[tokio::test]
#[ignore = "integration test - requires a Sourcegraph instance and network"]
async fn read_missing_repository_is_null_not_error() {
    let Some(client) = client_from_env() else {
        eprintln!("Skipping: SRC_ENDPOINT/SRC_ACCESS_TOKEN not configured");
        return;
    };

    let data = client
        .query(
            queries::REPOSITORY_INFO,
            json!({ "name": "github.com/definitely/does-not-exist-xyz" }),
        )
        .await
        .expect("repository info query failed");

    assert!(
        data.get("repository").map(|r| r.is_null()).unwrap_or(false),
        "expected a null repository for a missing repo"
    );
}
