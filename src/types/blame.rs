//! Blame type definitions
//!
//! Line numbers come back as JSON numbers; they are kept as `f64` here so
//! the normalizer can skip ranges with non-finite endpoints instead of
//! failing the whole response.

use serde::Deserialize;

/// `data` shape of the blame query
#[derive(Debug, Deserialize)]
pub struct BlameData {
    pub repository: Option<BlameRepository>,
}

#[derive(Debug, Deserialize)]
pub struct BlameRepository {
    pub commit: Option<BlameCommitContainer>,
}

#[derive(Debug, Deserialize)]
pub struct BlameCommitContainer {
    pub blob: Option<BlameBlob>,
}

#[derive(Debug, Deserialize)]
pub struct BlameBlob {
    #[serde(default)]
    pub blame: Vec<BlameHunk>,
}

/// A contiguous line span attributed to one commit
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlameHunk {
    #[serde(default)]
    pub start_line: Option<f64>,
    #[serde(default)]
    pub end_line: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub author: Option<BlameSignature>,
    #[serde(default)]
    pub commit: Option<BlameCommit>,
}

#[derive(Debug, Deserialize)]
pub struct BlameSignature {
    #[serde(default)]
    pub person: Option<BlamePerson>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlamePerson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlameCommit {
    #[serde(default)]
    pub oid: Option<String>,
    #[serde(rename = "abbreviatedOID", default)]
    pub abbreviated_oid: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
