use anyhow::{Ok, Result};

use crate::{CliTest, stderr_of, stdout_of};

const RUN_SH: &str = "#!/usr/bin/env bash\n\
                      source ./lib.sh\n\
                      GREETING=hi\n\
                      greet $GREETING $UNSET\n";

#[test]
fn reports_deps_commands_and_declared_count() -> Result<()> {
    let test = CliTest::with_script("run.sh", RUN_SH)?;
    test.install_fake_bin("greet")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("run.sh"));
    assert!(stdout.contains("./lib.sh"));
    assert!(stdout.contains("external commands: greet"));
    assert!(stdout.contains("declared variables: 1"));
    assert!(stdout.contains("Analyzed 1 script"));
    // Non-strict runs perform no audit.
    assert!(!stderr_of(&output).contains("UNSET"));

    Ok(())
}

#[test]
fn strict_mode_warns_about_unbound_variables_only() -> Result<()> {
    let test = CliTest::with_script("run.sh", RUN_SH)?;
    test.install_fake_bin("greet")?;

    let output = test.command().arg("--strict").output()?;
    let stderr = stderr_of(&output);

    // Warnings are advisory: the exit code stays 0.
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("'UNSET' is not declared"));
    assert!(!stderr.contains("GREETING"));

    Ok(())
}

#[test]
fn strict_mode_all_clear() -> Result<()> {
    let test = CliTest::with_script("run.sh", "#!/bin/bash\nGREETING=hi\ngreet $GREETING\n")?;
    test.install_fake_bin("greet")?;

    let output = test.command().arg("-s").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("variables all clear"));
    assert!(stderr_of(&output).is_empty());

    Ok(())
}

#[test]
fn files_without_a_shell_shebang_are_not_analyzed() -> Result<()> {
    let test = CliTest::with_script("run.sh", "#!/bin/sh\ngreet\n")?;
    test.write_file("tool.py", "#!/usr/bin/env python3\nprint('x')\n")?;
    test.write_file("notes.txt", "plain text\n")?;
    test.install_fake_bin("greet")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("run.sh"));
    assert!(!stdout.contains("tool.py"));
    assert!(!stdout.contains("notes.txt"));
    assert!(stdout.contains("Analyzed 1 script"));

    Ok(())
}

#[test]
fn hidden_paths_are_never_discovered() -> Result<()> {
    let test = CliTest::with_script("visible.sh", "#!/bin/bash\ngreet\n")?;
    test.write_file(".hidden/tool.sh", "#!/bin/bash\ngreet\n")?;
    test.write_file(".secret.sh", "#!/bin/bash\ngreet\n")?;
    test.install_fake_bin("greet")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("visible.sh"));
    assert!(!stdout.contains("tool.sh"));
    assert!(!stdout.contains(".secret.sh"));

    Ok(())
}

#[test]
fn keywords_and_builtins_are_not_reported_as_external() -> Result<()> {
    let script = "#!/bin/bash\n\
                  if true\n\
                  then\n\
                  greet\n\
                  fi\n\
                  cd /tmp\n";
    let test = CliTest::with_script("run.sh", script)?;
    test.install_fake_bin("greet")?;

    let output = test.command().args(["--format", "json"]).output()?;
    let reports: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    let externals = reports[0]["externalCommands"].as_array().unwrap();

    assert_eq!(externals.len(), 1);
    assert_eq!(externals[0], "greet");

    Ok(())
}

#[test]
fn external_commands_keep_first_appearance_order() -> Result<()> {
    let script = "#!/bin/bash\nzeta one\nalpha two\nzeta three\n";
    let test = CliTest::with_script("run.sh", script)?;
    test.install_fake_bin("zeta")?;
    test.install_fake_bin("alpha")?;

    let output = test.command().args(["--format", "json"]).output()?;
    let reports: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    let externals = reports[0]["externalCommands"].as_array().unwrap();

    assert_eq!(externals[0], "zeta");
    assert_eq!(externals[1], "alpha");

    Ok(())
}

#[test]
fn json_format_embeds_audit_warnings() -> Result<()> {
    let test = CliTest::with_script("run.sh", RUN_SH)?;
    test.install_fake_bin("greet")?;

    let output = test.command().args(["--strict", "--format", "json"]).output()?;
    let reports: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(reports[0]["internalDeps"][0], "./lib.sh");
    assert_eq!(reports[0]["auditWarnings"][0], "UNSET");
    assert!(stderr_of(&output).is_empty());

    Ok(())
}

#[test]
fn empty_directory_is_a_successful_run() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Analyzed 0 scripts"));

    Ok(())
}

#[test]
fn nonexistent_directory_is_a_successful_empty_run() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("no-such-dir").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Analyzed 0 scripts"));

    Ok(())
}

#[test]
fn config_file_ignores_are_honored() -> Result<()> {
    let test = CliTest::with_script("keep.sh", "#!/bin/bash\ngreet\n")?;
    test.write_file("vendor/dep.sh", "#!/bin/bash\ngreet\n")?;
    test.write_file(".shdepsrc.json", r#"{ "ignores": ["**/vendor/**"] }"#)?;
    test.install_fake_bin("greet")?;

    let output = test.command().output()?;
    let stdout = stdout_of(&output);

    assert!(stdout.contains("keep.sh"));
    assert!(!stdout.contains("dep.sh"));

    Ok(())
}

#[test]
fn malformed_config_file_fails_before_scanning() -> Result<()> {
    let test = CliTest::with_script("run.sh", "#!/bin/bash\ngreet\n")?;
    test.write_file(".shdepsrc.json", "{ not json")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains(".shdepsrc.json"));
    assert!(!stdout_of(&output).contains("run.sh"));

    Ok(())
}

#[test]
fn comments_do_not_produce_false_dependencies() -> Result<()> {
    let script = "#!/bin/bash\n\
                  # source ./not-real.sh\n\
                  greet # source ./also-not-real.sh\n";
    let test = CliTest::with_script("run.sh", script)?;
    test.install_fake_bin("greet")?;

    let output = test.command().args(["--format", "json"]).output()?;
    let reports: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;

    assert!(reports[0]["internalDeps"].as_array().unwrap().is_empty());

    Ok(())
}
