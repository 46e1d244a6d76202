use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of the `locales` binary.
///
/// Validation problems and an aborted merge are told apart so scripts can
/// distinguish "files need fixing" from "the run did not finish".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Exit 0.
    Success,
    /// Exit 1: invalid or missing locale files, or `init` found a config.
    Failure,
    /// Exit 2: a merge stopped part way, or the command could not start.
    Error,
}

impl From<&CommandResult> for ExitStatus {
    fn from(result: &CommandResult) -> Self {
        match (result.error_count, result.aborted) {
            (0, _) => ExitStatus::Success,
            (_, true) => ExitStatus::Error,
            (_, false) => ExitStatus::Failure,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
