//! Core analysis engine.
//!
//! A straight-line per-file pipeline: discovery yields candidate paths, the
//! classifier keeps recognized scripts, and [`analyze_script`] runs the
//! comment-stripping and extraction passes over each one. There is no
//! cross-file state beyond the read-only configuration and platform facts.

pub mod audit;
pub mod classifier;
pub mod extract;
pub mod normalize;
pub mod resolve;
pub mod scanner;

use std::path::Path;

use crate::{config::Config, platform::PlatformFacts, script::ScriptReport};

/// Analyze one script's content.
///
/// Pure besides the injected platform queries: identical content always
/// yields identical dependency and variable sets.
pub fn analyze_script(
    path: &Path,
    content: &str,
    config: &Config,
    platform: &dyn PlatformFacts,
) -> ScriptReport {
    let text = normalize::strip_comments(content);

    let internal_deps = extract::internal_deps(&text);
    let declared = extract::declared_vars(&text);
    let used = extract::used_vars(&text);
    let candidates = extract::command_candidates(&text);

    let external_commands = resolve::external_commands(&candidates, platform);
    let audit_warnings = config
        .strict
        .then(|| audit::undeclared_vars(&used, &declared, platform));

    ScriptReport {
        path: path.to_path_buf(),
        internal_deps,
        declared_vars: declared.into_iter().collect(),
        used_vars: used.into_iter().collect(),
        external_commands,
        audit_warnings,
    }
}
