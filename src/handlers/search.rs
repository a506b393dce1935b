//! Search handler implementations
//!
//! Code, symbol, and commit search all go through the same GraphQL search
//! entry point; the query string selects the result type and carries the
//! filters the builders in `crate::query` assemble.

use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::format::date::canonical_utc_or;
use crate::format::html::decode_preview;
use crate::format::{UNKNOWN, UNKNOWN_AUTHOR};
use crate::params::{SearchCodeParams, SearchCommitsParams, SearchSymbolsParams};
use crate::query::filters::{append_count_filter, append_timeout_filter, quote_filter};
use crate::query::symbols::resolve_symbol_kinds;
use crate::query::{normalize_limit, CODE_SEARCH_MAX, DEFAULT_MAX};
use crate::sg::{queries, SgClient, SgError, SgResult};
use crate::types::search::{SearchData, SearchResultNode, SearchResults};

use super::{parse_data, text_result};

/// Default search protocol version token
const DEFAULT_SEARCH_VERSION: &str = "V3";

/// Search file contents as a formatted report
pub async fn search_code(
    client: &SgClient,
    params: SearchCodeParams,
) -> Result<CallToolResult, McpError> {
    match search_code_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error searching code: {}", e))),
    }
}

async fn search_code_report(client: &SgClient, params: &SearchCodeParams) -> SgResult<String> {
    let base = params.query.trim();
    if base.is_empty() {
        return Err(SgError::InvalidInput(
            "search query must not be empty".to_string(),
        ));
    }

    let limit = normalize_limit(params.limit, 20, CODE_SEARCH_MAX);
    let query = append_count_filter(base, limit);
    let query = append_timeout_filter(&query, params.timeout_ms);

    let results = run_search(client, &query, params.version.as_deref()).await?;

    let mut report = String::new();
    push_alert(&mut report, &results);

    let file_matches: Vec<&SearchResultNode> = results
        .results
        .iter()
        .filter(|node| node.file.is_some())
        .take(limit)
        .collect();

    if file_matches.is_empty() {
        report.push_str(&format!("No matches found for query: {}", base));
        return Ok(report);
    }

    report.push_str(&format!(
        "{} matches{}\n",
        results
            .match_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| file_matches.len().to_string()),
        if results.limit_hit { " (result limit hit)" } else { "" }
    ));

    for node in file_matches {
        let repo = node
            .repository
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .unwrap_or(UNKNOWN);
        let path = node
            .file
            .as_ref()
            .and_then(|f| f.path.as_deref())
            .unwrap_or(UNKNOWN);
        report.push_str(&format!("\n{} {}\n", repo, path));

        for line_match in &node.line_matches {
            let preview = line_match
                .preview
                .as_deref()
                .and_then(decode_preview);
            let Some(preview) = preview else { continue };
            match line_match.line_number {
                Some(n) => report.push_str(&format!("  {}: {}\n", n + 1, preview)),
                None => report.push_str(&format!("  {}\n", preview)),
            }
        }
    }

    Ok(report.trim_end().to_string())
}

/// Search symbol definitions as a formatted report
pub async fn search_symbols(
    client: &SgClient,
    params: SearchSymbolsParams,
) -> Result<CallToolResult, McpError> {
    match search_symbols_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error searching symbols: {}", e))),
    }
}

async fn search_symbols_report(
    client: &SgClient,
    params: &SearchSymbolsParams,
) -> SgResult<String> {
    let base = params.query.trim();
    if base.is_empty() {
        return Err(SgError::InvalidInput(
            "search query must not be empty".to_string(),
        ));
    }

    let (kinds, ignored) = match &params.kinds {
        Some(names) => resolve_symbol_kinds(names),
        None => (Vec::new(), Vec::new()),
    };

    let limit = normalize_limit(params.limit, 20, DEFAULT_MAX);
    let query = append_count_filter(&format!("type:symbol {}", base), limit);

    let results = run_search(client, &query, None).await?;

    let mut report = String::new();
    push_alert(&mut report, &results);
    if !ignored.is_empty() {
        report.push_str(&format!("Ignored unknown symbol kinds: {}\n", ignored.join(", ")));
    }

    let mut rows = Vec::new();
    'nodes: for node in &results.results {
        let path = node
            .file
            .as_ref()
            .and_then(|f| f.path.as_deref())
            .unwrap_or(UNKNOWN);
        for symbol in &node.symbols {
            let kind = symbol.kind.as_deref().unwrap_or(UNKNOWN);
            if !kinds.is_empty() && !kinds.iter().any(|k| k == kind) {
                continue;
            }
            let name = symbol.name.as_deref().unwrap_or(UNKNOWN);
            let location = symbol
                .location
                .as_ref()
                .and_then(|l| l.resource.as_ref())
                .and_then(|r| r.path.as_deref())
                .unwrap_or(path);
            let line = symbol
                .location
                .as_ref()
                .and_then(|l| l.range.as_ref())
                .and_then(|r| r.start.as_ref())
                .and_then(|s| s.line)
                .map(|l| format!(":{}", l + 1))
                .unwrap_or_default();
            let container = symbol
                .container_name
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(|c| format!(" (in {})", c))
                .unwrap_or_default();
            rows.push(format!("{:<12} {}{}  {}{}", kind, name, container, location, line));
            if rows.len() == limit {
                break 'nodes;
            }
        }
    }

    if rows.is_empty() {
        report.push_str(&format!("No symbols found for query: {}", base));
        return Ok(report);
    }

    report.push_str(&format!("Found {} symbols:\n", rows.len()));
    for row in rows {
        report.push('\n');
        report.push_str(&row);
    }
    Ok(report)
}

/// Search commit messages as a formatted report
pub async fn search_commits(
    client: &SgClient,
    params: SearchCommitsParams,
) -> Result<CallToolResult, McpError> {
    match search_commits_report(client, &params).await {
        Ok(report) => Ok(text_result(report)),
        Err(e) => Ok(text_result(format!("Error searching commits: {}", e))),
    }
}

/// Assemble the commit search query string from the optional filters
fn build_commit_query(params: &SearchCommitsParams, limit: usize) -> String {
    let mut parts = vec!["type:commit".to_string()];
    if let Some(repo) = params.repo.as_deref().filter(|r| !r.is_empty()) {
        parts.push(format!("repo:{}", quote_filter(repo)));
    }
    if let Some(author) = params.author.as_deref().filter(|a| !a.is_empty()) {
        parts.push(format!("author:{}", quote_filter(author)));
    }
    if let Some(after) = params.after.as_deref().filter(|a| !a.is_empty()) {
        parts.push(format!("after:{}", quote_filter(after)));
    }
    if let Some(before) = params.before.as_deref().filter(|b| !b.is_empty()) {
        parts.push(format!("before:{}", quote_filter(before)));
    }
    if let Some(term) = params.query.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        parts.push(term.to_string());
    }
    append_count_filter(&parts.join(" "), limit)
}

async fn search_commits_report(
    client: &SgClient,
    params: &SearchCommitsParams,
) -> SgResult<String> {
    let limit = normalize_limit(params.limit, 20, DEFAULT_MAX);
    let query = build_commit_query(params, limit);

    let results = run_search(client, &query, None).await?;

    let mut report = String::new();
    push_alert(&mut report, &results);

    let mut rows = Vec::new();
    for node in &results.results {
        let Some(commit) = node.commit.as_ref() else { continue };
        let oid = commit.abbreviated_oid.as_deref().unwrap_or(UNKNOWN);
        let author = commit
            .author
            .as_ref()
            .and_then(|a| a.person.as_ref())
            .and_then(|p| p.name.as_deref())
            .unwrap_or(UNKNOWN_AUTHOR);
        let date = canonical_utc_or(
            commit.author.as_ref().and_then(|a| a.date.as_deref()),
            UNKNOWN,
        );
        let subject = commit
            .subject
            .as_deref()
            .or_else(|| {
                node.message_preview
                    .as_ref()
                    .and_then(|p| p.value.as_deref())
            })
            .unwrap_or("");
        let repo = commit
            .repository
            .as_ref()
            .and_then(|r| r.name.as_deref())
            .map(|r| format!("  [{}]", r))
            .unwrap_or_default();
        rows.push(format!("{:<10} {}  {}  {}{}", oid, date, author, subject, repo));
        if rows.len() == limit {
            break;
        }
    }

    if rows.is_empty() {
        report.push_str("No matching commits found.");
        return Ok(report);
    }

    report.push_str(&format!("Found {} commits:\n", rows.len()));
    for row in rows {
        report.push('\n');
        report.push_str(&row);
    }
    Ok(report)
}

/// Issue the shared search query and unwrap its result container
async fn run_search(
    client: &SgClient,
    query: &str,
    version: Option<&str>,
) -> SgResult<SearchResults> {
    let version = version
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SEARCH_VERSION);

    let data = client
        .query(queries::SEARCH, json!({ "query": query, "version": version }))
        .await?;
    let data: SearchData = parse_data(data)?;

    data.search
        .and_then(|s| s.results)
        .ok_or(SgError::MissingData)
}

/// Prepend a server alert to the report, when one was returned
fn push_alert(report: &mut String, results: &SearchResults) {
    if let Some(alert) = &results.alert {
        let title = alert.title.as_deref().unwrap_or("Search alert");
        match alert.description.as_deref().filter(|d| !d.is_empty()) {
            Some(description) => {
                report.push_str(&format!("Alert: {} - {}\n\n", title, description))
            }
            None => report.push_str(&format!("Alert: {}\n\n", title)),
        }
    }
}
