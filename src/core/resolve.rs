//! Candidate command classification.

use crate::platform::PlatformFacts;

/// Shell syntactic keywords never reported as commands.
const KEYWORD_IGNORE_LIST: &[&str] = &[
    "if", "then", "else", "elif", "fi", "case", "esac", "for", "while", "do", "done", "function",
    "return", "local", "export", "alias",
];

/// Outcome of classifying one candidate token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandClass {
    /// Shell keyword or empty token.
    Ignored,
    /// Implemented by the shell itself, never a separate process.
    Builtin,
    /// Resolvable to an executable via the search path.
    External,
    /// Neither builtin nor on the search path; usually a script-local
    /// function name. Dropped without a warning - telling functions apart
    /// from genuinely unknown tokens would require executing the script.
    Unresolved,
}

/// Classify one token; first match wins.
pub fn classify(token: &str, platform: &dyn PlatformFacts) -> CommandClass {
    if token.is_empty() || KEYWORD_IGNORE_LIST.contains(&token) {
        return CommandClass::Ignored;
    }
    if platform.is_builtin(token) {
        return CommandClass::Builtin;
    }
    if platform.resolves_on_path(token) {
        return CommandClass::External;
    }
    CommandClass::Unresolved
}

/// Filter candidates down to external commands, preserving their
/// first-appearance order.
pub fn external_commands(candidates: &[String], platform: &dyn PlatformFacts) -> Vec<String> {
    candidates
        .iter()
        .filter(|token| classify(token, platform) == CommandClass::External)
        .cloned()
        .collect()
}
