//! Language statistics type definitions
//!
//! Response shapes for the language statistics query and the normalized
//! breakdown the languages tool returns. Display colors come from a small
//! static table keyed by language name; languages outside the table carry
//! no color.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// `data` shape of the language statistics query
#[derive(Debug, Deserialize)]
pub struct LanguageStatisticsData {
    pub repository: Option<LanguageRepository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRepository {
    pub name: String,
    #[serde(default)]
    pub language_statistics: Vec<LanguageStat>,
}

/// Raw per-language byte and line counts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub name: String,
    #[serde(default)]
    pub total_bytes: u64,
    #[serde(default)]
    pub total_lines: u64,
}

/// Ratio/percentage pair for one language
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Share {
    pub ratio: f64,
    pub percentage: f64,
}

/// Normalized breakdown entry for one language
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageBreakdown {
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub total_bytes: u64,
    pub total_lines: u64,
    pub share: Share,
}

/// Structured result of the repository languages tool
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResult {
    pub repository: String,
    pub total_bytes: u64,
    pub languages: Vec<LanguageBreakdown>,
}

static LANGUAGE_COLORS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("C", "#555555"),
        ("C#", "#178600"),
        ("C++", "#f34b7d"),
        ("CSS", "#563d7c"),
        ("Go", "#00ADD8"),
        ("HTML", "#e34c26"),
        ("Java", "#b07219"),
        ("JavaScript", "#f1e05a"),
        ("Kotlin", "#A97BFF"),
        ("Lua", "#000080"),
        ("Markdown", "#083fa1"),
        ("PHP", "#4F5D95"),
        ("Python", "#3572A5"),
        ("Ruby", "#701516"),
        ("Rust", "#dea584"),
        ("Scala", "#c22d40"),
        ("Shell", "#89e051"),
        ("Swift", "#F05138"),
        ("TypeScript", "#3178c6"),
        ("YAML", "#cb171e"),
    ])
});

/// Look up the conventional display color for a language name
pub fn language_color(name: &str) -> Option<String> {
    LANGUAGE_COLORS.get(name).map(|c| (*c).to_string())
}
