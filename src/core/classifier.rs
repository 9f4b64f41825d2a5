//! Script classification by interpreter directive.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Decide whether `path` is a recognized shell script.
///
/// Reads at most the first line of the file; unreadable files (including
/// binary content that is not valid UTF-8) are simply not scripts. Matching
/// is deliberately loose: any configured shell name appearing as a substring
/// of the shebang line counts, so `bash` matches `/usr/bin/env bash` and
/// also a custom interpreter whose name merely contains `bash`.
pub fn is_shell_script(path: &Path, shells: &[String]) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };

    let mut first_line = String::new();
    if BufReader::new(file).read_line(&mut first_line).is_err() {
        return false;
    }

    if !first_line.starts_with("#!") {
        return false;
    }

    shells.iter().any(|shell| first_line.contains(shell.as_str()))
}
