//! Init command - write the default `.tarjimrc.json`.
//!
//! The generated file spells out every default, including the full phrase table,
//! so it can be edited in place.

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    init_in(&cwd)
}

fn init_in(dir: &Path) -> Result<ExitStatus> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!(
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let defaults = Config::default();
    println!(
        "{} {} ({} include pattern(s), {} phrase(s))",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green(),
        defaults.includes.len(),
        defaults.phrases.len()
    );

    Ok(ExitStatus::Success)
}
