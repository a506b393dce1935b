//! File content type definitions

use serde::Deserialize;

/// `data` shape of the file content query
#[derive(Debug, Deserialize)]
pub struct FileContentData {
    pub repository: Option<FileContentRepository>,
}

#[derive(Debug, Deserialize)]
pub struct FileContentRepository {
    pub commit: Option<FileContentCommit>,
}

#[derive(Debug, Deserialize)]
pub struct FileContentCommit {
    pub file: Option<FileBlob>,
}

/// A file blob at a specific revision
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileBlob {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub byte_size: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
}
