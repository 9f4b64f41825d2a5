use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use shdeps::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help/--version print and leave without scanning; anything
            // else is a usage error.
            let status = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Success,
                _ => ExitStatus::UsageError,
            };
            let _ = err.print();
            return status.into();
        }
    };

    match shdeps::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::UsageError.into()
        }
    }
}
