//! Ambient platform queries used during classification.
//!
//! The command resolver and the variable auditor depend on run-time facts
//! about the host: which command names the shell implements itself, which
//! names resolve to an executable on the search path, and which variables
//! are bound in the environment. Those facts are modeled as an injected
//! read-only provider, initialized once at startup, so the analysis passes
//! stay testable against fixed fakes.

use std::collections::{BTreeSet, HashMap};
use std::process::Command;
use std::sync::Mutex;

/// Builtins of a POSIX-flavored shell that never resolve via the search
/// path. Used when the ambient shell cannot be queried at startup.
const FALLBACK_BUILTINS: &[&str] = &[
    ".", ":", "bg", "bind", "break", "builtin", "caller", "cd", "command",
    "compgen", "complete", "continue", "declare", "dirs", "disown", "eval",
    "exec", "exit", "fc", "fg", "getopts", "hash", "help", "history", "jobs",
    "let", "mapfile", "popd", "pushd", "read", "readarray", "readonly",
    "set", "shift", "shopt", "source", "suspend", "times", "trap", "type",
    "typeset", "ulimit", "umask", "unalias", "unset", "wait",
];

/// Read-only facts about the environment the analyzer runs in.
pub trait PlatformFacts: Sync {
    /// Whether the ambient shell implements `name` as a builtin.
    fn is_builtin(&self, name: &str) -> bool;

    /// Whether `name` resolves to an executable via the search path.
    fn resolves_on_path(&self, name: &str) -> bool;

    /// Whether `name` is bound in the analyzer's own environment.
    fn env_is_bound(&self, name: &str) -> bool;
}

/// Live facts of the host system.
///
/// The builtin set is queried once and reused for every script; search-path
/// probes are cached per distinct token, so the probe count is bounded by
/// the number of unique candidate tokens across the run.
pub struct SystemPlatform {
    builtins: BTreeSet<String>,
    probe_cache: Mutex<HashMap<String, bool>>,
}

impl SystemPlatform {
    pub fn detect() -> Self {
        let mut builtins = query_shell_builtins().unwrap_or_else(|| {
            FALLBACK_BUILTINS.iter().map(|s| s.to_string()).collect()
        });

        // Names like `echo` or `test` are builtins that also exist as real
        // executables; the search path satisfies those, so they report as
        // external commands instead of being swallowed here.
        builtins.retain(|name| which::which(name).is_err());

        Self {
            builtins,
            probe_cache: Mutex::new(HashMap::new()),
        }
    }
}

impl PlatformFacts for SystemPlatform {
    fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    fn resolves_on_path(&self, name: &str) -> bool {
        let mut cache = self.probe_cache.lock().unwrap();
        *cache
            .entry(name.to_string())
            .or_insert_with(|| which::which(name).is_ok())
    }

    fn env_is_bound(&self, name: &str) -> bool {
        std::env::var_os(name).is_some()
    }
}

/// Ask the ambient shell for its builtin list.
fn query_shell_builtins() -> Option<BTreeSet<String>> {
    let output = Command::new("bash")
        .args(["-c", "compgen -b"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let builtins: BTreeSet<String> = stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if builtins.is_empty() { None } else { Some(builtins) }
}
