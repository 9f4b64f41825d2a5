//! Run orchestration: discover, classify, analyze, render.

use std::fs;

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::args::{Arguments, OutputFormat};
use super::exit_status::ExitStatus;
use crate::{
    config::Config,
    core::{self, classifier, scanner},
    platform::SystemPlatform,
    report,
    script::ScriptReport,
};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let config = Config::load(&args)?;
    let platform = SystemPlatform::detect();

    let scan = scanner::discover(&config.root, &config.ignores, config.verbose);
    if scan.skipped_count > 0 && !config.verbose {
        eprintln!(
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            scan.skipped_count,
            "-v".cyan()
        );
    }

    let scripts: Vec<_> = scan
        .candidates
        .into_iter()
        .filter(|path| classifier::is_shell_script(path, &config.shells))
        .collect();

    // Each analysis is a pure function of one file plus the read-only
    // config and platform facts; collect keeps discovery order for output.
    let reports: Vec<ScriptReport> = scripts
        .par_iter()
        .filter_map(|path| match fs::read_to_string(path) {
            Ok(content) => Some(core::analyze_script(path, &content, &config, &platform)),
            Err(err) => {
                if config.verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                }
                None
            }
        })
        .collect();

    match args.format {
        OutputFormat::Text => report::print_text(&reports, config.strict),
        OutputFormat::Json => report::print_json(&reports)?,
    }

    Ok(ExitStatus::Success)
}
