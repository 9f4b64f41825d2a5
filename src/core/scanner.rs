//! Script discovery.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Result of walking the target root.
pub struct ScanResult {
    /// Candidate regular files, in discovery order.
    pub candidates: Vec<PathBuf>,
    /// Paths that could not be accessed during traversal.
    pub skipped_count: usize,
}

fn is_hidden(entry: &DirEntry) -> bool {
    // The root itself is exempt: scanning "." must not count as hidden.
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

/// Walk `root` and collect candidate files in discovery order.
///
/// Hidden components are pruned, paths matching an ignore pattern are
/// dropped, and unreadable subtrees are skipped so that one inaccessible
/// directory never aborts the run. An empty or nonexistent root yields zero
/// candidates.
pub fn discover(root: &Path, ignores: &[String], verbose: bool) -> ScanResult {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignores {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut candidates = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let path_str = path.to_string_lossy();
        if patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        candidates.push(path.to_path_buf());
    }

    ScanResult {
        candidates,
        skipped_count,
    }
}
