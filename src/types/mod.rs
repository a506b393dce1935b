//! Type definitions for Sourcegraph entities
//!
//! This module contains Rust structs that mirror the GraphQL response
//! shapes, level by level, so normalizers can walk the nullable chain with
//! explicit guards, plus the structured result types some tools return.

pub mod blame;
pub mod branch;
pub mod commit;
pub mod file;
pub mod languages;
pub mod repo;
pub mod search;
pub mod tree;

pub use languages::{LanguageBreakdown, LanguagesResult, Share};
pub use repo::RepoInfoResult;
pub use tree::{DirectoryNode, FileNode, FileTreeResult, SubmoduleNode};
