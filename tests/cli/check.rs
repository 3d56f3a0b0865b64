use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, MIGRATED_STUDENT_PAGE, PLAIN_PAGE, STUDENT_PAGE, stdout};

#[test]
fn test_check_reports_pending_pages() -> Result<()> {
    let test = CliTest::with_file("app/student/page.tsx", STUDENT_PAGE)?;
    test.write_file("app/parent/page.tsx", PLAIN_PAGE)?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "\
warning: untranslated Arabic text  needs-migration
  --> app/student/page.tsx:6:11
  |
6 |       <h1>لوحة التحكم</h1>
  |           ^

✘ 1 of 2 file(s) need migration.
Run tarjim migrate to rewrite them.
"
    );
    // check never writes
    assert_eq!(test.read_file("app/student/page.tsx")?, STUDENT_PAGE);

    Ok(())
}

#[test]
fn test_check_after_migrate_is_clean() -> Result<()> {
    let test = CliTest::with_file("app/student/page.tsx", STUDENT_PAGE)?;

    test.migrate_command().output()?;
    assert_eq!(test.read_file("app/student/page.tsx")?, MIGRATED_STUDENT_PAGE);

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ Checked 1 file(s) - nothing to migrate\n"
    );

    Ok(())
}

#[test]
fn test_check_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "✓ Checked 0 file(s) - nothing to migrate\n"
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("migrate"));
    assert!(out.contains("check"));
    assert!(out.contains("init"));

    Ok(())
}
