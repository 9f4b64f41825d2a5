//! Per-script analysis results.

use std::path::PathBuf;

use serde::Serialize;

/// Everything the analyzer derived from one script.
///
/// Produced by the core pipeline and consumed unchanged by the renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptReport {
    /// Path of the analyzed script as discovered under the scanned root.
    pub path: PathBuf,

    /// Paths pulled in via `source`/`.` directives, captured verbatim -
    /// not resolved against the filesystem, not checked for existence.
    pub internal_deps: Vec<String>,

    /// Variables assigned at the start of a line, sorted.
    pub declared_vars: Vec<String>,

    /// Variables referenced in `$name`/`${name}` expansions, sorted.
    pub used_vars: Vec<String>,

    /// Search-path-resolvable commands, in order of first appearance.
    pub external_commands: Vec<String>,

    /// Used variables that are neither declared nor bound in the
    /// environment. `None` unless strict mode is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_warnings: Option<Vec<String>>,
}
