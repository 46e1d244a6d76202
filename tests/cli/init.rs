use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .localesrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".localesrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localesRoot"], "./public/locales");
    assert_eq!(parsed["fileName"], "common.json");
    assert_eq!(parsed["locales"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localesrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ .localesrc.json already exists

    ----- stderr -----
    ");
    assert_eq!(test.read_file(".localesrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_locales("{}")?;

    test.command().arg("init").output()?;

    let output = test.validate_command().output()?;
    assert!(
        output.status.success(),
        "Validate should work with initialized config. stdout: {}",
        stdout(&output)
    );
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("merge"));
    assert!(stdout(&output).contains("validate"));
    Ok(())
}
