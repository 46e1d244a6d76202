use anyhow::{Context, Result};

use super::super::args::MergeCommand;
use super::helper::{LocaleContext, finish};
use super::{CommandResult, CommandSummary, LocaleMergeOutcome, MergeFailure, MergeSummary};
use crate::core::{MergePolicy, TranslationTable, merge_file};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = LocaleContext::new(&args.common)?;

    let table = match &args.table {
        Some(path) => TranslationTable::load(path)
            .with_context(|| format!("Failed to load translation table: {}", path.display()))?,
        None => TranslationTable::builtin()?,
    };
    table.require_locales(&ctx.locales)?;

    let policy = if args.coerce {
        MergePolicy::Coerce
    } else {
        MergePolicy::Strict
    };

    Ok(finish(CommandSummary::Merge(merge_locales(
        &ctx,
        &table,
        policy,
        args.dry_run,
    ))))
}

/// Merge `table` into each locale file in order, stopping at the first failure.
///
/// Files written before the failure keep their changes.
pub fn merge_locales(
    ctx: &LocaleContext,
    table: &TranslationTable,
    policy: MergePolicy,
    dry_run: bool,
) -> MergeSummary {
    let mut outcomes = Vec::with_capacity(ctx.locales.len());
    let mut failure = None;

    for locale in &ctx.locales {
        let path = ctx.layout.document_path(locale);
        let display_path = ctx.layout.display_path(locale);
        let entries = table.entries_for(locale).unwrap_or_default();

        match merge_file(&path, entries, policy, dry_run) {
            Ok(stats) => {
                tracing::debug!(%locale, ?stats, dry_run, "merged locale file");
                outcomes.push(LocaleMergeOutcome {
                    locale: locale.clone(),
                    path,
                    display_path,
                    stats,
                });
            }
            Err(err) => {
                failure = Some(MergeFailure {
                    locale: locale.clone(),
                    display_path,
                    error: err.into(),
                });
                break;
            }
        }
    }

    MergeSummary {
        outcomes,
        failure,
        is_dry_run: dry_run,
    }
}
