//! Directory tree type definitions
//!
//! Response shapes for the per-directory tree query and the fully
//! materialized nested tree the walker assembles from them.

use serde::{Deserialize, Serialize};

/// `data` shape of the directory tree query
#[derive(Debug, Deserialize)]
pub struct TreeData {
    pub repository: Option<TreeRepository>,
}

#[derive(Debug, Deserialize)]
pub struct TreeRepository {
    pub commit: Option<TreeCommit>,
}

#[derive(Debug, Deserialize)]
pub struct TreeCommit {
    pub tree: Option<Tree>,
}

#[derive(Debug, Deserialize)]
pub struct Tree {
    #[serde(default)]
    pub entries: Vec<TreeEntry>,
}

/// One entry of a directory listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeEntry {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub is_directory: bool,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub submodule: Option<SubmoduleRef>,
}

#[derive(Debug, Deserialize)]
pub struct SubmoduleRef {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
}

/// A directory in the materialized tree, owning its children
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryNode {
    pub name: String,
    pub path: String,
    pub directories: Vec<DirectoryNode>,
    pub files: Vec<FileNode>,
    pub submodules: Vec<SubmoduleNode>,
}

/// A file leaf
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A submodule leaf
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmoduleNode {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// Structured result of the file tree tool
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTreeResult {
    pub repository: String,
    pub revision: String,
    pub root: DirectoryNode,
}

impl DirectoryNode {
    /// Total number of nodes in this subtree, the directory itself included
    pub fn node_count(&self) -> usize {
        1 + self.files.len()
            + self.submodules.len()
            + self
                .directories
                .iter()
                .map(DirectoryNode::node_count)
                .sum::<usize>()
    }
}
