use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stdout};

#[test]
fn test_validate_all_valid() -> Result<()> {
    let test = CliTest::with_locales(r#"{"nav": {"home": "Home"}}"#)?;

    assert_cmd_snapshot!(test.validate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ en/common.json - valid JSON
    ✓ fr/common.json - valid JSON
    ✓ es/common.json - valid JSON
    ✓ de/common.json - valid JSON
    ✓ pt/common.json - valid JSON
    ✓ it/common.json - valid JSON

    Validation summary: 6 locale file(s) checked, 0 error(s)
    ✓ All locale files are valid JSON

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_validate_reports_malformed_file() -> Result<()> {
    let test = CliTest::with_locales("{}")?;
    test.write_locale("fr", r#"{"a": }"#)?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.validate_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ en/common.json - valid JSON
    ✘ fr/common.json - invalid JSON: expected value at line 1 column 7
      --> [ROOT]/public/locales/fr/common.json:1:7
        |
      1 | {"a": }
        |       ^
    ✓ es/common.json - valid JSON
    ✓ de/common.json - valid JSON
    ✓ pt/common.json - valid JSON
    ✓ it/common.json - valid JSON

    Validation summary: 6 locale file(s) checked, 1 error(s)
    ✘ 1 locale file(s) have errors

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_validate_caret_with_accented_text() -> Result<()> {
    let test = CliTest::with_locales("{}")?;
    test.write_locale("fr", r#"{"titre": "Été", "a": }"#)?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.validate_command().args(["--locale", "fr"]), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ fr/common.json - invalid JSON: expected value at line 1 column 25
      --> [ROOT]/public/locales/fr/common.json:1:25
        |
      1 | {"titre": "Été", "a": }
        |                       ^

    Validation summary: 1 locale file(s) checked, 1 error(s)
    ✘ 1 locale file(s) have errors

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_validate_reports_missing_file() -> Result<()> {
    let test = CliTest::with_locales("{}")?;
    std::fs::remove_file(test.root().join(crate::locale_path("de")))?;

    assert_cmd_snapshot!(test.validate_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✓ en/common.json - valid JSON
    ✓ fr/common.json - valid JSON
    ✓ es/common.json - valid JSON
    ! de/common.json - file not found
    ✓ pt/common.json - valid JSON
    ✓ it/common.json - valid JSON

    Validation summary: 6 locale file(s) checked, 1 error(s)
    ✘ 1 locale file(s) have errors

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_validate_counts_every_failure() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_locale("fr", "{")?;

    let output = test.validate_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("6 locale file(s) checked, 5 error(s)"), "{out}");
    Ok(())
}

#[test]
fn test_validate_selected_locales_and_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("site/i18n/ja/common.json", r#"{"title": "日本語"}"#)?;

    assert_cmd_snapshot!(
        test.validate_command()
            .args(["--locales-root", "site/i18n", "--locale", "ja"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ ja/common.json - valid JSON

    Validation summary: 1 locale file(s) checked, 0 error(s)
    ✓ All locale files are valid JSON

    ----- stderr -----
    "
    );
    Ok(())
}

#[test]
fn test_validate_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".localesrc.json",
        r#"{ "localesRoot": "locales", "locales": ["en"], "fileName": "app.json" }"#,
    )?;
    test.write_file("locales/en/app.json", "[1, 2]")?;
    std::fs::create_dir_all(test.root().join("sub"))?;

    assert_cmd_snapshot!(test.validate_command().current_dir(test.root().join("sub")), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ en/app.json - valid JSON

    Validation summary: 1 locale file(s) checked, 0 error(s)
    ✓ All locale files are valid JSON

    ----- stderr -----
    ");
    Ok(())
}
