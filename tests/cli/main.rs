use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod migrate;

const BIN_NAME: &str = "tarjim";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    /// An empty project directory. The `.git` marker stops config discovery there.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn migrate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("migrate");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A page with one heading phrase and one quoted phrase, both in the built-in table.
pub const STUDENT_PAGE: &str = r#"import React from "react";

export default function StudentPage() {
  return (
    <main>
      <h1>لوحة التحكم</h1>
      <input placeholder="بحث" />
    </main>
  );
}
"#;

pub const MIGRATED_STUDENT_PAGE: &str = r#""use client";

import React from "react";
import { useLanguage } from "@/hooks/useLanguage";

export default function StudentPage() {
  const { t } = useLanguage();
  return (
    <main>
      <h1>{t("common.dashboard")}</h1>
      <input placeholder={t("common.search")} />
    </main>
  );
}
"#;

pub const PLAIN_PAGE: &str = r#"export default function ParentPage() {
  return <p>Welcome</p>;
}
"#;
