//! Shared setup for every command that walks the source tree.
//!
//! Loads the configuration, resolves the source root and discovers the candidate
//! files once, so commands only deal with the per-file work.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{file_scanner::scan_files, rewrite::Rewriter};
use crate::config::{Config, load_config};

pub struct MigrateContext {
    pub config: Config,
    /// Absolute source root; reported paths are relative to it.
    pub root: PathBuf,
    /// Candidate files in discovery order.
    pub files: Vec<PathBuf>,
    pub verbose: bool,
}

impl MigrateContext {
    /// Load config from the working directory and scan the tree.
    ///
    /// `source_root` overrides the config value and is resolved against the working
    /// directory. The config value is resolved against the config file's directory.
    pub fn new(source_root: Option<&Path>, verbose: bool) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::from_dir(&cwd, source_root, verbose)
    }

    pub fn from_dir(start_dir: &Path, source_root: Option<&Path>, verbose: bool) -> Result<Self> {
        let loaded = load_config(start_dir)?;
        if verbose && let Some(path) = &loaded.path {
            eprintln!("{} {}", "config:".bold().cyan(), path.display());
        }

        let root = match source_root {
            Some(dir) => start_dir.join(dir),
            None => loaded
                .base_dir(start_dir)
                .join(&loaded.config.source_root),
        };
        let root = root
            .canonicalize()
            .with_context(|| format!("Source root does not exist: {}", root.display()))?;

        let config = loaded.config;
        let scan = scan_files(&root, &config.includes, &config.ignores, verbose);
        if verbose && scan.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) could not be accessed",
                "warning:".bold().yellow(),
                scan.skipped_count
            );
        }

        Ok(Self {
            config,
            root,
            files: scan.files,
            verbose,
        })
    }

    pub fn rewriter(&self) -> Result<Rewriter<'_>> {
        Rewriter::from_config(&self.config)
    }
}
