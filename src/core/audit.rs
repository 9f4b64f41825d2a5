//! Strict-mode variable audit.

use std::collections::BTreeSet;

use crate::platform::PlatformFacts;

/// Positional (`$1`, `$23`) and special (`$?`, `$*`, `$@`) parameters are
/// never audited.
fn is_parameter(name: &str) -> bool {
    matches!(name, "?" | "*" | "@") || name.chars().all(|c| c.is_ascii_digit())
}

/// Used variables that are neither declared in the script nor bound in the
/// analyzer's environment, sorted by name.
///
/// The environment check is a conservative approximation: the environment
/// the script would actually run under is unknowable without executing it.
/// Findings are advisory and never affect the exit status.
pub fn undeclared_vars(
    used: &BTreeSet<String>,
    declared: &BTreeSet<String>,
    platform: &dyn PlatformFacts,
) -> Vec<String> {
    used.iter()
        .filter(|name| !is_parameter(name))
        .filter(|name| !declared.contains(*name))
        .filter(|name| !platform.env_is_bound(name))
        .cloned()
        .collect()
}
