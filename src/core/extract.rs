//! Dependency and variable extraction passes.
//!
//! Four independent, line-oriented pattern passes over comment-stripped
//! text. These are heuristics, not a shell grammar: quoting and escaping
//! edge cases are out of scope, and their false positives/negatives are
//! accepted as noise.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static SOURCE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:source|\.)\s+(\S+)").unwrap());

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)=").unwrap());

static EXPANSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{?([A-Za-z_][A-Za-z0-9_]*|[0-9]+|[?*@])\}?").unwrap()
});

static COMMAND_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z_-]+$").unwrap());

/// Paths pulled in via `source`/`.` directives at the start of a line,
/// captured verbatim (no quote stripping, no expansion, no normalization).
/// De-duplicated and lexicographically sorted.
pub fn internal_deps(text: &str) -> Vec<String> {
    let deps: BTreeSet<String> = text
        .lines()
        .filter_map(|line| SOURCE_DIRECTIVE.captures(line))
        .map(|c| c[1].to_string())
        .collect();
    deps.into_iter().collect()
}

/// Variables assigned at the start of a line.
pub fn declared_vars(text: &str) -> BTreeSet<String> {
    text.lines()
        .filter_map(|line| ASSIGNMENT.captures(line))
        .map(|c| c[1].to_string())
        .collect()
}

/// Every `$name`/`${name}` expansion anywhere in the text, braces stripped.
///
/// Positional (`$1`) and special (`$?`, `$*`, `$@`) parameters are captured
/// too; the auditor filters them out later.
pub fn used_vars(text: &str) -> BTreeSet<String> {
    EXPANSION
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect()
}

/// First tokens of non-assignment lines, unique in order of first
/// appearance.
///
/// Tokens containing digits, punctuation, or path separators are skipped:
/// such lines are control-structure syntax, pure expressions, or explicit
/// paths rather than plain command statements.
pub fn command_candidates(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for line in text.lines() {
        if ASSIGNMENT.is_match(line) {
            continue;
        }
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if COMMAND_TOKEN.is_match(token) && seen.insert(token.to_string()) {
            candidates.push(token.to_string());
        }
    }

    candidates
}
