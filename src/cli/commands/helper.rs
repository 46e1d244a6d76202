use std::{env, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::CommonArgs,
    config::load_config,
    core::{Locale, LocaleLayout},
};

/// Locale files a command operates on, after config and CLI overrides.
#[derive(Debug)]
pub struct LocaleContext {
    pub layout: LocaleLayout,
    pub locales: Vec<Locale>,
}

impl LocaleContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::resolve(&cwd, common)
    }

    /// Load config from `start_dir` upwards, then apply CLI overrides.
    ///
    /// A `--locales-root` flag is taken relative to `start_dir`, while a
    /// config `localesRoot` is relative to the config file.
    pub fn resolve(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let loaded = load_config(start_dir)?;

        let mut layout = loaded.config.layout(&loaded.base_dir);
        if let Some(root) = &common.locales_root {
            layout = LocaleLayout::new(start_dir.join(root), layout.file_name);
        }

        let locales = if common.locales.is_empty() {
            loaded.config.parsed_locales()?
        } else {
            common.locales.clone()
        };

        let ids: Vec<&str> = locales.iter().map(Locale::as_str).collect();
        tracing::debug!(
            root = %layout.root().display(),
            locales = ?ids,
            from_file = loaded.from_file,
            "resolved locale files"
        );

        Ok(Self { layout, locales })
    }
}

pub fn finish(summary: CommandSummary) -> CommandResult {
    let (error_count, aborted) = match &summary {
        CommandSummary::Merge(merge) => {
            let failed = merge.failure.is_some();
            (usize::from(failed), failed)
        }
        CommandSummary::Validate(report) => (report.failure_count(), false),
        CommandSummary::Init(init) => (usize::from(init.error.is_some()), false),
    };

    CommandResult {
        summary,
        error_count,
        aborted,
    }
}
