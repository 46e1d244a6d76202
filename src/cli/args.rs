//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Merge the translation table into every locale file
//! - `validate`: Check every locale file for JSON syntax errors
//! - `init`: Initialize a `.localesrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Locale;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.args.common.verbose,
            Some(Command::Validate(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by `merge` and `validate`.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory holding one sub-directory per locale (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Locale to process (overrides config file)
    /// Can be specified multiple times: --locale en --locale fr
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<Locale>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct MergeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON translation table to merge instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Replace non-object values that sit on a key path instead of failing
    #[arg(long)]
    pub coerce: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub args: MergeArgs,
}

#[derive(Debug, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub args: ValidateArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translation keys into every locale's JSON file
    Merge(MergeCommand),
    /// Check that every locale's JSON file is syntactically valid
    Validate(ValidateCommand),
    /// Initialize a new .localesrc.json configuration file
    Init,
}
