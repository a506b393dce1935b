//! Search type definitions
//!
//! One response shape serves code, symbol, and commit search: the GraphQL
//! inline fragments merge into a single node struct whose fields are all
//! optional, and the handler reads whichever side the result type filled in.

use serde::Deserialize;

/// `data` shape of the search query
#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub search: Option<Search>,
}

#[derive(Debug, Deserialize)]
pub struct Search {
    pub results: Option<SearchResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    #[serde(default)]
    pub match_count: Option<u64>,
    #[serde(default)]
    pub limit_hit: bool,
    #[serde(default)]
    pub alert: Option<SearchAlert>,
    #[serde(default)]
    pub results: Vec<SearchResultNode>,
}

#[derive(Debug, Deserialize)]
pub struct SearchAlert {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A single search result node, covering both fragment shapes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultNode {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    // FileMatch fields
    #[serde(default)]
    pub repository: Option<NameRef>,
    #[serde(default)]
    pub file: Option<FileRef>,
    #[serde(default)]
    pub line_matches: Vec<LineMatch>,
    #[serde(default)]
    pub symbols: Vec<SymbolMatch>,
    // CommitSearchResult fields
    #[serde(default)]
    pub commit: Option<SearchCommit>,
    #[serde(default)]
    pub message_preview: Option<MessagePreview>,
}

#[derive(Debug, Deserialize)]
pub struct NameRef {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub line_number: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolMatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub container_name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub location: Option<SymbolLocation>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolLocation {
    #[serde(default)]
    pub resource: Option<SymbolResource>,
    #[serde(default)]
    pub range: Option<SymbolRange>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolResource {
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolRange {
    #[serde(default)]
    pub start: Option<SymbolPosition>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolPosition {
    #[serde(default)]
    pub line: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCommit {
    #[serde(default)]
    pub oid: Option<String>,
    #[serde(rename = "abbreviatedOID", default)]
    pub abbreviated_oid: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<SearchSignature>,
    #[serde(default)]
    pub repository: Option<NameRef>,
}

#[derive(Debug, Deserialize)]
pub struct SearchSignature {
    #[serde(default)]
    pub person: Option<NameRef>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessagePreview {
    #[serde(default)]
    pub value: Option<String>,
}
