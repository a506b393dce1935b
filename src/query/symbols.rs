//! Symbol-kind alias resolution
//!
//! Users name symbol kinds loosely ("func", "ctor", "iface"); the API
//! reports canonical upper-case kind tokens. The alias table maps the former
//! to the latter, case-insensitively. Unrecognized names are collected
//! rather than rejected.

use std::collections::HashMap;
use std::sync::LazyLock;

static KIND_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("function", "FUNCTION"),
        ("func", "FUNCTION"),
        ("fn", "FUNCTION"),
        ("method", "METHOD"),
        ("class", "CLASS"),
        ("constructor", "CONSTRUCTOR"),
        ("ctor", "CONSTRUCTOR"),
        ("interface", "INTERFACE"),
        ("iface", "INTERFACE"),
        ("struct", "STRUCT"),
        ("structure", "STRUCT"),
        ("enum", "ENUM"),
        ("enumeration", "ENUM"),
        ("variable", "VARIABLE"),
        ("var", "VARIABLE"),
        ("constant", "CONSTANT"),
        ("const", "CONSTANT"),
        ("field", "FIELD"),
        ("property", "PROPERTY"),
        ("prop", "PROPERTY"),
        ("module", "MODULE"),
        ("mod", "MODULE"),
        ("namespace", "NAMESPACE"),
        ("ns", "NAMESPACE"),
        ("package", "PACKAGE"),
        ("pkg", "PACKAGE"),
    ])
});

/// Resolve user-supplied symbol-kind names to canonical kind tokens
///
/// Returns the resolved canonical tokens (deduplicated, input order) and the
/// names that matched nothing. Unrecognized names never cause a failure.
pub fn resolve_symbol_kinds(names: &[String]) -> (Vec<String>, Vec<String>) {
    let mut resolved: Vec<String> = Vec::new();
    let mut ignored: Vec<String> = Vec::new();

    for name in names {
        let key = name.trim().to_lowercase();
        match KIND_ALIASES.get(key.as_str()) {
            Some(kind) => {
                if !resolved.iter().any(|k| k == kind) {
                    resolved.push((*kind).to_string());
                }
            }
            None => ignored.push(name.clone()),
        }
    }

    (resolved, ignored)
}
