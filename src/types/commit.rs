//! Commit listing and diff type definitions

use serde::Deserialize;

/// `data` shape of the commit listing query
#[derive(Debug, Deserialize)]
pub struct CommitListData {
    pub repository: Option<CommitListRepository>,
}

#[derive(Debug, Deserialize)]
pub struct CommitListRepository {
    pub commit: Option<CommitAncestors>,
}

#[derive(Debug, Deserialize)]
pub struct CommitAncestors {
    pub ancestors: Option<CommitConnection>,
}

#[derive(Debug, Deserialize)]
pub struct CommitConnection {
    #[serde(default)]
    pub nodes: Vec<CommitNode>,
}

/// A commit as returned by the ancestors query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitNode {
    #[serde(default)]
    pub oid: Option<String>,
    #[serde(rename = "abbreviatedOID", default)]
    pub abbreviated_oid: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<CommitSignature>,
}

#[derive(Debug, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub person: Option<CommitPerson>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommitPerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// `data` shape of the comparison diff query
#[derive(Debug, Deserialize)]
pub struct DiffData {
    pub repository: Option<DiffRepository>,
}

#[derive(Debug, Deserialize)]
pub struct DiffRepository {
    pub comparison: Option<Comparison>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    #[serde(default)]
    pub file_diffs: Option<FileDiffConnection>,
}

#[derive(Debug, Deserialize)]
pub struct FileDiffConnection {
    #[serde(default)]
    pub nodes: Vec<FileDiff>,
}

/// One changed file in a comparison
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiff {
    #[serde(default)]
    pub old_path: Option<String>,
    #[serde(default)]
    pub new_path: Option<String>,
    #[serde(default)]
    pub stat: Option<DiffStat>,
    #[serde(default)]
    pub hunks: Vec<DiffHunk>,
}

#[derive(Debug, Deserialize)]
pub struct DiffStat {
    #[serde(default)]
    pub added: u64,
    #[serde(default)]
    pub changed: Option<u64>,
    #[serde(default)]
    pub deleted: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffHunk {
    #[serde(default)]
    pub old_range: Option<DiffRange>,
    #[serde(default)]
    pub new_range: Option<DiffRange>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRange {
    #[serde(default)]
    pub start_line: Option<u64>,
    #[serde(default)]
    pub lines: Option<u64>,
}
