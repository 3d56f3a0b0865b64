//! Batch migration over a list of files.
//!
//! Files are processed one at a time in the order given. A failure on one file is
//! recorded against it and the walk continues.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use super::{
    detect::Eligibility,
    rewrite::{Rewrite, Rewriter, Rewritten},
    scaffold::MissingAnchor,
};
use crate::utils::display_relative;

/// Why a file was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Ineligible(Eligibility),
    /// Eligible, but the rewrite produced identical text.
    Unchanged { missing: Vec<MissingAnchor> },
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::Ineligible(eligibility) => eligibility.reason(),
            SkipReason::Unchanged { .. } => "nothing to change",
        }
    }
}

#[derive(Debug)]
pub enum FileStatus {
    /// Rewritten (or, in a dry run, would be).
    Updated(Rewritten),
    Skipped(SkipReason),
    Failed(anyhow::Error),
}

/// Outcome for one file, reported as soon as the file is done.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Path relative to the source root, used in reports.
    pub display_path: String,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn missing_anchors(&self) -> &[MissingAnchor] {
        match &self.status {
            FileStatus::Updated(rewritten) => &rewritten.missing,
            FileStatus::Skipped(SkipReason::Unchanged { missing }) => missing,
            _ => &[],
        }
    }
}

/// Summary of a whole run, in walk order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub replacement_count: usize,
    /// True when nothing was written.
    pub dry_run: bool,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        let path = outcome.display_path.clone();
        match &outcome.status {
            FileStatus::Updated(rewritten) => {
                self.replacement_count += rewritten.replacements.len();
                self.updated.push(path);
            }
            FileStatus::Skipped(_) => self.skipped.push(path),
            FileStatus::Failed(err) => self.failed.push((path, format!("{:#}", err))),
        }
    }
}

/// Rewrite every file in `files`, calling `on_file` after each one.
///
/// With `apply` false nothing is written, but files that would change are still
/// reported as updated.
pub fn migrate_files(
    rewriter: &Rewriter,
    files: &[PathBuf],
    root: &Path,
    apply: bool,
    mut on_file: impl FnMut(&FileOutcome),
) -> RunSummary {
    let mut summary = RunSummary {
        dry_run: !apply,
        ..Default::default()
    };

    for path in files {
        let status = match migrate_file(rewriter, path, apply) {
            Ok(status) => status,
            Err(err) => FileStatus::Failed(err),
        };
        let outcome = FileOutcome {
            path: path.clone(),
            display_path: display_relative(path, root),
            status,
        };
        on_file(&outcome);
        summary.record(&outcome);
    }

    summary
}

fn migrate_file(rewriter: &Rewriter, path: &Path, apply: bool) -> Result<FileStatus> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let rewritten = match rewriter.rewrite(&source) {
        Rewrite::Ineligible(eligibility) => {
            return Ok(FileStatus::Skipped(SkipReason::Ineligible(eligibility)));
        }
        Rewrite::Unchanged { missing } => {
            return Ok(FileStatus::Skipped(SkipReason::Unchanged { missing }));
        }
        Rewrite::Changed(rewritten) => rewritten,
    };

    if apply {
        write_atomically(path, &rewritten.text)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }
    Ok(FileStatus::Updated(rewritten))
}

/// Replace `path` with `contents` through a temporary file in the same directory,
/// so the original is either kept whole or fully replaced.
///
/// Symlinks are resolved first: the link stays and its target is rewritten.
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;
    fs::set_permissions(temp.path(), permissions)?;
    temp.persist(&target)?;
    Ok(())
}
