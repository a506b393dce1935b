//! Recursive file-tree handler
//!
//! Materializes the full tree under a starting path by issuing one query
//! per directory, depth-first, one outstanding call at a time. A null
//! repository, commit, or tree at any depth aborts the whole walk with the
//! entity and path being resolved; no partial tree is returned. There is no
//! maximum-depth guard; a well-formed git tree is finite.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;
use tracing::debug;

use crate::params::FileTreeParams;
use crate::query::default_revision;
use crate::sg::{queries, NotFound, SgClient, SgResult};
use crate::types::tree::{DirectoryNode, FileNode, SubmoduleNode, TreeData};
use crate::types::FileTreeResult;

use super::{json_result, parse_data, sg_to_mcp_error};

/// Fetch the full directory tree as a structured result
pub async fn file_tree(
    client: &SgClient,
    params: FileTreeParams,
) -> Result<CallToolResult, McpError> {
    let repo = params.repo;
    let rev = default_revision(params.rev.as_deref());
    let path = params.path.unwrap_or_default();

    let root = walk_directory(client, &repo, &rev, path.clone())
        .await
        .map_err(sg_to_mcp_error)?;

    json_result(&FileTreeResult {
        repository: repo,
        revision: rev,
        root,
    })
}

/// Fetch one directory and recurse into its subdirectories
async fn walk_directory(
    client: &SgClient,
    repo: &str,
    rev: &str,
    path: String,
) -> SgResult<DirectoryNode> {
    debug!(%repo, %rev, %path, "fetching directory");

    let data = client
        .query(
            queries::DIRECTORY_TREE,
            json!({ "repo": repo, "rev": rev, "path": path }),
        )
        .await?;
    let data: TreeData = parse_data(data)?;

    let Some(repo_node) = data.repository else {
        return Err(NotFound::Repository(repo.to_string()).into());
    };
    let Some(commit) = repo_node.commit else {
        return Err(NotFound::Revision {
            repo: repo.to_string(),
            rev: rev.to_string(),
        }
        .into());
    };
    let Some(tree) = commit.tree else {
        return Err(NotFound::Path {
            repo: repo.to_string(),
            rev: rev.to_string(),
            path,
        }
        .into());
    };

    let name = path.rsplit('/').next().unwrap_or("").to_string();
    let mut node = DirectoryNode {
        name,
        path,
        directories: Vec::new(),
        files: Vec::new(),
        submodules: Vec::new(),
    };

    for entry in tree.entries {
        if let Some(submodule) = entry.submodule {
            // A submodule reference wins over the isDirectory flag
            node.submodules.push(SubmoduleNode {
                name: entry.name,
                path: entry.path,
                url: submodule.url,
                commit: submodule.commit,
            });
        } else if entry.is_directory {
            let child = Box::pin(walk_directory(client, repo, rev, entry.path)).await?;
            node.directories.push(child);
        } else {
            node.files.push(FileNode {
                name: entry.name,
                path: entry.path,
                url: entry.url,
            });
        }
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tree::TreeEntry;
    use serde_json::json;

    #[test]
    fn test_submodule_wins_over_directory_flag() {
        let entry: TreeEntry = serde_json::from_value(json!({
            "name": "vendored",
            "path": "third_party/vendored",
            "isDirectory": true,
            "submodule": { "url": "https://example.com/vendored.git", "commit": "abc123" }
        }))
        .unwrap();
        assert!(entry.submodule.is_some());
        assert!(entry.is_directory);
    }

    #[test]
    fn test_empty_tree_parses_to_no_entries() {
        let data: TreeData = serde_json::from_value(json!({
            "repository": { "commit": { "tree": { "entries": [] } } }
        }))
        .unwrap();
        let tree = data
            .repository
            .unwrap()
            .commit
            .unwrap()
            .tree
            .unwrap();
        assert!(tree.entries.is_empty());
    }

    #[test]
    fn test_node_count_totals_the_subtree() {
        let node = DirectoryNode {
            name: String::new(),
            path: String::new(),
            directories: vec![DirectoryNode {
                name: "src".to_string(),
                path: "src".to_string(),
                directories: Vec::new(),
                files: vec![FileNode {
                    name: "main.rs".to_string(),
                    path: "src/main.rs".to_string(),
                    url: None,
                }],
                submodules: Vec::new(),
            }],
            files: vec![FileNode {
                name: "Cargo.toml".to_string(),
                path: "Cargo.toml".to_string(),
                url: None,
            }],
            submodules: Vec::new(),
        };
        // root + src + main.rs + Cargo.toml
        assert_eq!(node.node_count(), 4);
    }
}
