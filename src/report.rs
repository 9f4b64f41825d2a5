//! Report formatting and printing.
//!
//! Separate from the analysis engine so shdeps can be used as a library
//! without printing side effects. Rendering never re-derives anything: it
//! is a projection of [`ScriptReport`] values. The text format writes
//! per-script blocks to one writer and strict-mode warnings to another
//! (stdout and stderr in the CLI).

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use crate::script::ScriptReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the text report to stdout, warnings to stderr.
pub fn print_text(reports: &[ScriptReport], strict: bool) {
    render_text_to(
        reports,
        strict,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Render the text report to custom writers. Useful for testing.
pub fn render_text_to<W: Write, E: Write>(
    reports: &[ScriptReport],
    strict: bool,
    out: &mut W,
    err: &mut E,
) {
    for report in reports {
        render_script(report, out, err);
    }
    render_summary(reports, strict, out);
}

fn render_script<W: Write, E: Write>(report: &ScriptReport, out: &mut W, err: &mut E) {
    let _ = writeln!(out, "{}", report.path.display().to_string().bold());

    if report.internal_deps.is_empty() {
        let _ = writeln!(out, "  internal dependencies: {}", "None".dimmed());
    } else {
        let _ = writeln!(out, "  internal dependencies:");
        for dep in &report.internal_deps {
            let _ = writeln!(out, "    {}", dep.cyan());
        }
    }

    if report.external_commands.is_empty() {
        let _ = writeln!(out, "  external commands: {}", "None".dimmed());
    } else {
        let _ = writeln!(
            out,
            "  external commands: {}",
            report.external_commands.join(", ")
        );
    }

    let _ = writeln!(out, "  declared variables: {}", report.declared_vars.len());

    if let Some(warnings) = &report.audit_warnings {
        if warnings.is_empty() {
            let _ = writeln!(
                out,
                "  {} {}",
                SUCCESS_MARK.green(),
                "variables all clear".green()
            );
        } else {
            let _ = writeln!(
                out,
                "  {} {} undeclared {}",
                FAILURE_MARK.red(),
                warnings.len(),
                if warnings.len() == 1 {
                    "variable"
                } else {
                    "variables"
                }
            );
            for name in warnings {
                let _ = writeln!(
                    err,
                    "{} {}: '{}' is not declared and not bound in the environment",
                    "warning:".bold().yellow(),
                    report.path.display(),
                    name
                );
            }
        }
    }

    let _ = writeln!(out);
}

fn render_summary<W: Write>(reports: &[ScriptReport], strict: bool, out: &mut W) {
    let scripts = reports.len();
    let script_word = if scripts == 1 { "script" } else { "scripts" };
    let warning_total: usize = reports
        .iter()
        .filter_map(|r| r.audit_warnings.as_ref())
        .map(Vec::len)
        .sum();

    if strict && warning_total > 0 {
        let _ = writeln!(
            out,
            "{} Analyzed {} {} ({} {})",
            FAILURE_MARK.red(),
            scripts,
            script_word,
            warning_total,
            if warning_total == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Analyzed {} {}", scripts, script_word).green()
        );
    }
}

/// Print the whole run as pretty JSON on stdout; warnings are embedded per
/// script, nothing goes to stderr.
pub fn print_json(reports: &[ScriptReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{}", json);
    Ok(())
}
