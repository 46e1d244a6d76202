//! Report formatting and printing utilities.
//!
//! One status line per locale file, then a summary. Parse errors get a
//! cargo-style excerpt pointing at the offending column. Kept apart from the
//! commands so the core can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, InitSummary, LocaleMergeOutcome, MergeSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{
    FileMergeError, LocaleStatus, MergeError, MergeStats, ParseError, ValidationReport,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Warning mark, used for missing files.
pub const WARNING_MARK: &str = "!";

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Merge(summary) => print_merge(summary, writer),
        CommandSummary::Validate(report) => print_validation(report, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// merge
// ============================================================

fn print_merge<W: Write>(summary: &MergeSummary, writer: &mut W) {
    for outcome in &summary.outcomes {
        print_merge_outcome(outcome, summary.is_dry_run, writer);
    }

    if let Some(failure) = &summary.failure {
        let _ = writeln!(
            writer,
            "{} {} - {:#}",
            FAILURE_MARK.red(),
            failure.display_path,
            failure.error
        );
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} Merge stopped at {}; {} locale file(s) {} before the error",
            FAILURE_MARK.red(),
            failure.locale.to_string().bold(),
            summary.outcomes.len(),
            if summary.is_dry_run {
                "checked"
            } else {
                "updated"
            }
        );
        if is_type_mismatch(&failure.error) {
            let _ = writeln!(
                writer,
                "Run with {} to replace values that block a key path.",
                "--coerce".cyan()
            );
        }
        return;
    }

    let _ = writeln!(writer);
    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "{} {} locale file(s) with {} translation key(s).",
            "Would update".yellow().bold(),
            summary.outcomes.len(),
            summary.key_count()
        );
        let _ = writeln!(
            writer,
            "Run without {} to write these changes.",
            "--dry-run".cyan()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Updated {} locale file(s) with {} translation key(s)",
                summary.outcomes.len(),
                summary.key_count()
            )
            .green()
        );
    }
}

fn is_type_mismatch(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<FileMergeError>(),
        Some(FileMergeError::Merge(MergeError::TypeMismatch { .. }))
    )
}

fn print_merge_outcome<W: Write>(outcome: &LocaleMergeOutcome, dry_run: bool, writer: &mut W) {
    let verb = if dry_run {
        "Would update".yellow().bold()
    } else {
        "Updated".green()
    };
    let mark = if dry_run {
        "-".yellow()
    } else {
        SUCCESS_MARK.green()
    };

    let _ = writeln!(
        writer,
        "{} {} {} ({})",
        mark,
        verb,
        outcome.display_path,
        format_stats(&outcome.stats).dimmed()
    );
}

fn format_stats(stats: &MergeStats) -> String {
    let mut parts = vec![
        format!("{} added", stats.added),
        format!("{} updated", stats.updated),
        format!("{} unchanged", stats.unchanged),
    ];
    if stats.coerced > 0 {
        parts.push(format!("{} replaced", stats.coerced));
    }
    parts.join(", ")
}

// ============================================================
// validate
// ============================================================

fn print_validation<W: Write>(report: &ValidationReport, writer: &mut W) {
    for result in &report.results {
        match &result.status {
            LocaleStatus::Valid => {
                let _ = writeln!(
                    writer,
                    "{} {} - valid JSON",
                    SUCCESS_MARK.green(),
                    result.display_path
                );
            }
            LocaleStatus::Invalid(err) => {
                let _ = writeln!(
                    writer,
                    "{} {} - invalid JSON: {}",
                    FAILURE_MARK.red(),
                    result.display_path,
                    err
                );
                print_parse_excerpt(err, writer);
            }
            LocaleStatus::Missing => {
                let _ = writeln!(
                    writer,
                    "{} {} - file not found",
                    WARNING_MARK.yellow().bold(),
                    result.display_path
                );
            }
            LocaleStatus::Unreadable(reason) => {
                let _ = writeln!(
                    writer,
                    "{} {} - could not read file: {}",
                    FAILURE_MARK.red(),
                    result.display_path,
                    reason
                );
            }
        }
    }

    let failures = report.failure_count();
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {} locale file(s) checked, {} error(s)",
        "Validation summary:".bold(),
        report.checked_count(),
        failures
    );

    if failures == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All locale files are valid JSON".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} locale file(s) have errors", failures).red()
        );
    }
}

fn print_parse_excerpt<W: Write>(err: &ParseError, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        err.path.display(),
        err.line,
        err.column
    );

    let Some(source_line) = &err.source_line else {
        return;
    };

    let width = err.line.to_string().len();
    let _ = writeln!(writer, "  {:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "  {} {} {}",
        err.line.to_string().blue(),
        "|".blue(),
        source_line
    );

    // serde_json columns are 1-based byte offsets into the line
    let prefix = source_line
        .get(..err.column.saturating_sub(1))
        .unwrap_or(source_line);
    let caret_padding = UnicodeWidthStr::width(prefix);
    let _ = writeln!(
        writer,
        "  {:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".red(),
        width = width,
        padding = caret_padding
    );
}

// ============================================================
// init
// ============================================================

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if let Some(error) = &summary.error {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red());
    } else if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
