use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, STUDENT_PAGE, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "sourceRoot",
        "includes",
        "ignores",
        "hook",
        "directive",
        "quoteLookback",
        "phrases",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["hook"]["name"], "useLanguage");
    assert_eq!(parsed["hook"]["importPath"], "@/hooks/useLanguage");
    assert_eq!(parsed["quoteLookback"], 50);
    assert_eq!(parsed["phrases"]["حفظ"], "common.save");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("✓ Created .tarjimrc.json (5 include pattern(s), "));
    assert!(test.root().join(".tarjimrc.json").exists());

    let content = test.read_file(".tarjimrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".tarjimrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "✘ .tarjimrc.json already exists\n");
    assert_eq!(test.read_file(".tarjimrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("app/university_student/grades/page.tsx", STUDENT_PAGE)?;

    let output = test.migrate_command().output()?;
    assert!(
        output.status.success(),
        "Migrate should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("✓ Updated: app/university_student/grades/page.tsx"));

    Ok(())
}
