use anyhow::Result;

mod args;
mod exit_status;
mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(args)
}
