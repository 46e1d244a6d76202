use std::path::PathBuf;

use crate::core::{Locale, MergeStats, ValidationReport};

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Validate(ValidationReport),
    Init(InitSummary),
}

/// Merge result for one locale file.
#[derive(Debug, Clone)]
pub struct LocaleMergeOutcome {
    pub locale: Locale,
    pub path: PathBuf,
    pub display_path: String,
    pub stats: MergeStats,
}

/// The locale file that stopped a merge run.
#[derive(Debug)]
pub struct MergeFailure {
    pub locale: Locale,
    pub display_path: String,
    pub error: anyhow::Error,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub outcomes: Vec<LocaleMergeOutcome>,
    pub failure: Option<MergeFailure>,
    pub is_dry_run: bool,
}

impl MergeSummary {
    pub fn key_count(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.stats.total()).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Locale files that failed validation, or 1 when a merge or init failed.
    pub error_count: usize,
    /// If true, errors are reported with [`ExitStatus::Error`] rather than
    /// [`ExitStatus::Failure`]: the command stopped instead of finishing.
    ///
    /// [`ExitStatus::Error`]: crate::cli::ExitStatus::Error
    /// [`ExitStatus::Failure`]: crate::cli::ExitStatus::Failure
    pub aborted: bool,
}
