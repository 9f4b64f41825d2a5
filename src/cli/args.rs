//! CLI argument definitions using clap.
//!
//! Shdeps is a single-purpose tool, so there are no subcommands: one run
//! scans one directory tree and prints a dependency report per recognized
//! script.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for shell scripts
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Audit variable usage (flags undeclared, unbound variables)
    #[arg(short, long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable blocks, one per script
    Text,
    /// Pretty-printed JSON array of script reports
    Json,
}
