use anyhow::Result;

use super::super::args::ValidateCommand;
use super::helper::{LocaleContext, finish};
use super::{CommandResult, CommandSummary};
use crate::core::validate_locales;

pub fn validate(cmd: ValidateCommand) -> Result<CommandResult> {
    let ctx = LocaleContext::new(&cmd.args.common)?;
    let report = validate_locales(&ctx.layout, &ctx.locales);
    Ok(finish(CommandSummary::Validate(report)))
}
