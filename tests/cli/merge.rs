use anyhow::Result;
use insta::assert_snapshot;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stdout};

const EXISTING: &str = r#"{
  "nav": {
    "home": "Home"
  },
  "governance": {
    "title": "Governance"
  }
}"#;

#[test]
fn test_merge_updates_every_locale() -> Result<()> {
    let test = CliTest::with_locales(EXISTING)?;

    assert_cmd_snapshot!(test.merge_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Updated en/common.json (21 added, 0 updated, 0 unchanged)
    ✓ Updated fr/common.json (21 added, 0 updated, 0 unchanged)
    ✓ Updated es/common.json (21 added, 0 updated, 0 unchanged)
    ✓ Updated de/common.json (21 added, 0 updated, 0 unchanged)
    ✓ Updated pt/common.json (21 added, 0 updated, 0 unchanged)
    ✓ Updated it/common.json (21 added, 0 updated, 0 unchanged)

    ✓ Updated 6 locale file(s) with 126 translation key(s)

    ----- stderr -----
    ");

    let fr = test.read_locale_json("fr")?;
    assert_eq!(fr["nav"]["home"], "Home");
    assert_eq!(fr["governance"]["title"], "Governance");
    assert_eq!(fr["governance"]["framework"]["title"], "Cadre de gouvernance");
    assert_eq!(
        fr["governance"]["independence"]["noInfluence"]["title"],
        "Pas d'influence sur les scores"
    );
    Ok(())
}

#[test]
fn test_merge_output_format() -> Result<()> {
    let test = CliTest::with_locales(EXISTING)?;

    test.merge_command().output()?;
    let content = test.read_locale("it")?;

    assert!(content.starts_with("{\n  \"nav\": {\n    \"home\": \"Home\"\n  },\n"));
    assert!(content.contains("\"title\": \"Indipendenza\""));
    assert!(content.contains("validazione dell'integrità"));
    assert!(!content.contains("\\u"));
    assert!(content.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_merge_twice_is_idempotent() -> Result<()> {
    let test = CliTest::with_locales(EXISTING)?;

    test.merge_command().output()?;
    let first = test.read_locale("de")?;

    assert_cmd_snapshot!(test.merge_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Updated en/common.json (0 added, 0 updated, 21 unchanged)
    ✓ Updated fr/common.json (0 added, 0 updated, 21 unchanged)
    ✓ Updated es/common.json (0 added, 0 updated, 21 unchanged)
    ✓ Updated de/common.json (0 added, 0 updated, 21 unchanged)
    ✓ Updated pt/common.json (0 added, 0 updated, 21 unchanged)
    ✓ Updated it/common.json (0 added, 0 updated, 21 unchanged)

    ✓ Updated 6 locale file(s) with 126 translation key(s)

    ----- stderr -----
    ");
    assert_eq!(test.read_locale("de")?, first);
    Ok(())
}

#[test]
fn test_merge_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_locales(EXISTING)?;

    assert_cmd_snapshot!(test.merge_command().arg("--dry-run"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    - Would update en/common.json (21 added, 0 updated, 0 unchanged)
    - Would update fr/common.json (21 added, 0 updated, 0 unchanged)
    - Would update es/common.json (21 added, 0 updated, 0 unchanged)
    - Would update de/common.json (21 added, 0 updated, 0 unchanged)
    - Would update pt/common.json (21 added, 0 updated, 0 unchanged)
    - Would update it/common.json (21 added, 0 updated, 0 unchanged)

    Would update 6 locale file(s) with 126 translation key(s).
    Run without --dry-run to write these changes.

    ----- stderr -----
    ");
    assert_eq!(test.read_locale("en")?, EXISTING);
    Ok(())
}

#[test]
fn test_merge_stops_on_malformed_file() -> Result<()> {
    let test = CliTest::with_locales("{}")?;
    test.write_locale("es", r#"{"a": }"#)?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.merge_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ✓ Updated en/common.json (21 added, 0 updated, 0 unchanged)
    ✓ Updated fr/common.json (21 added, 0 updated, 0 unchanged)
    ✘ es/common.json - invalid JSON in [ROOT]/public/locales/es/common.json: expected value at line 1 column 7

    ✘ Merge stopped at es; 2 locale file(s) updated before the error

    ----- stderr -----
    ");

    // Earlier locales keep their changes, later ones are untouched
    assert_eq!(
        test.read_locale_json("fr")?["governance"]["framework"]["title"],
        "Cadre de gouvernance"
    );
    assert_eq!(test.read_locale("de")?, "{}");
    assert_eq!(test.read_locale("es")?, r#"{"a": }"#);
    Ok(())
}

#[test]
fn test_merge_stops_on_missing_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    let _guard = test.settings().bind_to_scope();

    assert_cmd_snapshot!(test.merge_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----
    ✓ Updated en/common.json (21 added, 0 updated, 0 unchanged)
    ✘ fr/common.json - file not found: [ROOT]/public/locales/fr/common.json

    ✘ Merge stopped at fr; 1 locale file(s) updated before the error

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_merge_type_mismatch_fails_without_coerce() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"governance": "Governance"}"#)?;

    assert_cmd_snapshot!(test.merge_command().args(["--locale", "en"]), @r#"
    success: false
    exit_code: 2
    ----- stdout -----
    ✘ en/common.json - cannot set "governance.framework.title": "governance" is a string, not an object

    ✘ Merge stopped at en; 0 locale file(s) updated before the error
    Run with --coerce to replace values that block a key path.

    ----- stderr -----
    "#);
    assert_eq!(test.read_locale("en")?, r#"{"governance": "Governance"}"#);
    Ok(())
}

#[test]
fn test_merge_coerce_replaces_blocking_value() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"governance": "Governance", "nav": "Nav"}"#)?;

    let output = test
        .merge_command()
        .args(["--locale", "en", "--coerce"])
        .output()?;

    // stderr carries the coercion warning from the log subscriber
    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @r"
    ✓ Updated en/common.json (21 added, 0 updated, 0 unchanged, 1 replaced)

    ✓ Updated 1 locale file(s) with 21 translation key(s)
    ");
    let en = test.read_locale_json("en")?;
    assert_eq!(en["nav"], "Nav");
    assert_eq!(en["governance"]["framework"]["title"], "Governance Framework");
    Ok(())
}

#[test]
fn test_merge_custom_table() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", r#"{"a": {"b": "old", "z": 1}}"#)?;
    test.write_locale("fr", "{}")?;
    test.write_file(
        "table.json",
        r#"{
  "en": {"a.b": "new", "x.y.z": "deep"},
  "fr": {"a.b": "nouveau"}
}"#,
    )?;

    assert_cmd_snapshot!(
        test.merge_command()
            .args(["--table", "table.json", "--locale", "en", "--locale", "fr"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Updated en/common.json (1 added, 1 updated, 0 unchanged)
    ✓ Updated fr/common.json (1 added, 0 updated, 0 unchanged)

    ✓ Updated 2 locale file(s) with 3 translation key(s)

    ----- stderr -----
    "
    );

    let en: Value = test.read_locale_json("en")?;
    assert_eq!(
        en,
        serde_json::json!({"a": {"b": "new", "z": 1}, "x": {"y": {"z": "deep"}}})
    );
    assert_eq!(test.read_locale_json("fr")?, serde_json::json!({"a": {"b": "nouveau"}}));
    Ok(())
}

#[test]
fn test_merge_table_missing_locale_fails_before_writing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_locale("en", "{}")?;
    test.write_locale("ja", "{}")?;
    test.write_file("table.json", r#"{"en": {"a": "A"}}"#)?;

    assert_cmd_snapshot!(
        test.merge_command()
            .args(["--table", "table.json", "--locale", "en", "--locale", "ja"]),
        @r#"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: no translations defined for locale "ja"
    "#
    );
    assert_eq!(test.read_locale("en")?, "{}");
    Ok(())
}
