use std::process::ExitCode;

use clap::Parser;
use locale_tools::cli::{Arguments, ExitStatus, logging};

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init(args.verbose());

    match locale_tools::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
