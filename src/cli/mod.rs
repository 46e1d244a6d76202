use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
pub mod logging;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, MergeArgs, ValidateArgs};
pub use commands::{CommandResult, CommandSummary, LocaleMergeOutcome, MergeSummary};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(ExitStatus::from(&result).into())
}
