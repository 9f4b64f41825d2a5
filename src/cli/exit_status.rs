use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): the run completed, regardless of whether any audit
///   warnings were emitted
/// - `UsageError` (1): argument or startup error, no analysis was performed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Argument or startup error.
    UsageError,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::UsageError => ExitCode::from(1),
        }
    }
}
