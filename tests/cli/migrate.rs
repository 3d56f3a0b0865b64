use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, MIGRATED_STUDENT_PAGE, PLAIN_PAGE, STUDENT_PAGE, stderr, stdout};

#[test]
fn test_migrate_rewrites_pages() -> Result<()> {
    let test = CliTest::with_file("app/student/page.tsx", STUDENT_PAGE)?;
    test.write_file("app/parent/page.tsx", PLAIN_PAGE)?;

    let output = test.migrate_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
✓ Updated: app/student/page.tsx
- Skipped: app/parent/page.tsx

Summary:
  Updated: 1 file(s)
  Replacements: 2
  Skipped: 1 file(s)

Updated files:
  - app/student/page.tsx
"
    );
    assert_eq!(test.read_file("app/student/page.tsx")?, MIGRATED_STUDENT_PAGE);
    assert_eq!(test.read_file("app/parent/page.tsx")?, PLAIN_PAGE);

    Ok(())
}

#[test]
fn test_migrate_twice_changes_nothing() -> Result<()> {
    let test = CliTest::with_file("app/student/page.tsx", STUDENT_PAGE)?;

    test.migrate_command().output()?;
    let output = test.migrate_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
- Skipped: app/student/page.tsx

Summary:
  Updated: 0 file(s)
  Skipped: 1 file(s)
"
    );
    assert_eq!(test.read_file("app/student/page.tsx")?, MIGRATED_STUDENT_PAGE);

    Ok(())
}

#[test]
fn test_dry_run_leaves_files_alone() -> Result<()> {
    let test = CliTest::with_file("app/company/page.tsx", STUDENT_PAGE)?;

    let output = test.migrate_command().arg("--dry-run").output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
✓ Would update: app/company/page.tsx

Summary:
  Would update: 1 file(s)
  Replacements: 2
  Skipped: 0 file(s)

Files to update:
  - app/company/page.tsx

Run without --dry-run to write these changes.
"
    );
    assert_eq!(test.read_file("app/company/page.tsx")?, STUDENT_PAGE);

    Ok(())
}

#[test]
fn test_verbose_reports_counts_and_reasons() -> Result<()> {
    let test = CliTest::with_file("app/teacher/page.tsx", STUDENT_PAGE)?;
    test.write_file("app/university_student/page.tsx", PLAIN_PAGE)?;

    let output = test.migrate_command().arg("-v").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(
        "✓ Updated: app/teacher/page.tsx (2 replacement(s); added directive, hook import, hook call)"
    ));
    assert!(out.contains("- Skipped: app/university_student/page.tsx (no Arabic text)"));

    Ok(())
}

#[test]
fn test_pages_outside_portals_are_ignored() -> Result<()> {
    let test = CliTest::with_file("app/admin/page.tsx", STUDENT_PAGE)?;
    test.write_file("app/student/layout.tsx", STUDENT_PAGE)?;

    let output = test.migrate_command().output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("no files matched"));
    assert_eq!(test.read_file("app/admin/page.tsx")?, STUDENT_PAGE);
    assert_eq!(test.read_file("app/student/layout.tsx")?, STUDENT_PAGE);

    Ok(())
}

#[test]
fn test_missing_component_signature_warns() -> Result<()> {
    let test = CliTest::with_file(
        "app/parent/page.tsx",
        r#"import React from "react";

const ParentPage = () => <p>حفظ</p>;

export default ParentPage;
"#,
    )?;

    let output = test.migrate_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stderr(&output),
        "warning: app/parent/page.tsx: no `export default function` found, hook call was not added\n"
    );
    let migrated = test.read_file("app/parent/page.tsx")?;
    assert!(migrated.contains(r#"import { useLanguage } from "@/hooks/useLanguage";"#));
    assert!(migrated.contains(r#"<p>{t("common.save")}</p>"#));

    Ok(())
}

#[test]
fn test_unreadable_file_does_not_stop_the_run() -> Result<()> {
    let test = CliTest::with_file("app/student/page.tsx", STUDENT_PAGE)?;
    fs::create_dir_all(test.root().join("app/company"))?;
    fs::write(test.root().join("app/company/page.tsx"), [0xff, 0xfe])?;

    let output = test.migrate_command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("✘ Error: app/company/page.tsx: Failed to read file"));
    assert!(out.contains("✓ Updated: app/student/page.tsx"));
    assert!(out.contains("  Failed: 1 file(s)"));
    assert_eq!(test.read_file("app/student/page.tsx")?, MIGRATED_STUDENT_PAGE);

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/app/student/page.tsx", STUDENT_PAGE)?;

    let output = test
        .migrate_command()
        .args(["--source-root", "web"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("✓ Updated: app/student/page.tsx"));
    assert_eq!(
        test.read_file("web/app/student/page.tsx")?,
        MIGRATED_STUDENT_PAGE
    );

    Ok(())
}

#[test]
fn test_missing_source_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .migrate_command()
        .args(["--source-root", "nowhere"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Source root does not exist"));

    Ok(())
}

#[test]
fn test_config_phrases_replace_the_table() -> Result<()> {
    let test = CliTest::with_file(
        ".tarjimrc.json",
        r#"{ "phrases": { "مرحبا بك": "common.welcome" } }"#,
    )?;
    test.write_file(
        "app/student/page.tsx",
        r#"import React from "react";

export default function Page() {
  return <h2>مرحبا بك</h2>;
}
"#,
    )?;
    test.write_file(
        "app/teacher/page.tsx",
        r#"import React from "react";

export default function Page() {
  return <button>حفظ</button>;
}
"#,
    )?;

    let output = test.migrate_command().output()?;

    assert!(output.status.success());
    assert!(
        test.read_file("app/student/page.tsx")?
            .contains(r#"<h2>{t("common.welcome")}</h2>"#)
    );
    // scaffolded, but the built-in phrase is no longer known
    let teacher = test.read_file("app/teacher/page.tsx")?;
    assert!(teacher.contains("const { t } = useLanguage();"));
    assert!(teacher.contains("<button>حفظ</button>"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".tarjimrc.json", r#"{ "quoteLookback": 0 }"#)?;

    let output = test.migrate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: "));

    Ok(())
}
