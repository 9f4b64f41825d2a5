use anyhow::{Ok, Result};

use crate::{CliTest, stderr_of, stdout_of};

#[test]
fn unexpected_flag_fails_with_exit_code_one() -> Result<()> {
    let test = CliTest::with_script("run.sh", "#!/bin/bash\ngreet\n")?;

    let output = test.command().arg("--frobnicate").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--frobnicate"));
    // No analysis is performed on argument errors.
    assert!(!stdout_of(&output).contains("run.sh"));

    Ok(())
}

#[test]
fn help_prints_usage_and_exits_zero_without_scanning() -> Result<()> {
    let test = CliTest::with_script("run.sh", "#!/bin/bash\ngreet\n")?;

    let output = test.command().arg("--help").output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--strict"));
    assert!(!stdout.contains("Analyzed"));

    Ok(())
}

#[test]
fn version_exits_zero() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--version").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("shdeps"));

    Ok(())
}
