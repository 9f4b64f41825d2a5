//! Configuration file loading and CLI merging.
//!
//! An optional `.shdepsrc.json` in the target root supplies scan settings;
//! CLI arguments take priority. The merged [`Config`] is built once at
//! startup and read-only afterwards.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Arguments;

pub const CONFIG_FILE_NAME: &str = ".shdepsrc.json";

/// Interpreter names recognized in a shebang line.
pub const RECOGNIZED_SHELLS: &[&str] = &["sh", "dash", "ksh", "bash", "zsh", "fish"];

/// On-disk configuration (`.shdepsrc.json` in the target root).
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    /// Glob patterns excluded from discovery.
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Shebang interpreter names treated as shells.
    #[serde(default = "default_shells")]
    pub shells: Vec<String>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            shells: default_shells(),
        }
    }
}

fn default_shells() -> Vec<String> {
    RECOGNIZED_SHELLS.iter().map(|s| s.to_string()).collect()
}

/// Merged run configuration (CLI arguments > config file > defaults).
#[derive(Debug)]
pub struct Config {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Whether the variable audit pass runs.
    pub strict: bool,
    /// Whether discovery diagnostics go to stderr.
    pub verbose: bool,
    /// Shebang interpreter names treated as shells.
    pub shells: Vec<String>,
    /// Glob patterns excluded from discovery.
    pub ignores: Vec<String>,
}

impl Config {
    pub fn load(args: &Arguments) -> Result<Self> {
        let file = load_file_config(&args.path)?;
        Ok(Self {
            root: args.path.clone(),
            strict: args.strict,
            verbose: args.verbose,
            shells: file.shells,
            ignores: file.ignores,
        })
    }
}

fn load_file_config(root: &Path) -> Result<FileConfig> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
