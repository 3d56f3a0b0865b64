//! Check command - report pages that still need migration.
//!
//! Read-only. Exits with failure when at least one page still carries Arabic text
//! without the hook import.

use std::fs;

use anyhow::Result;
use colored::Colorize;

use super::super::{
    args::CheckCommand,
    exit_status::ExitStatus,
    report::{print_check_summary, print_no_files, print_untranslated},
};
use crate::{
    core::{MigrateContext, detect, first_arabic},
    utils::display_relative,
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let CheckCommand { common } = cmd;
    let ctx = MigrateContext::new(common.source_root.as_deref(), common.verbose)?;

    if ctx.files.is_empty() {
        print_no_files(ctx.verbose);
    }

    let mut pending = 0;
    let mut unreadable = 0;
    for path in &ctx.files {
        let display_path = display_relative(path, &ctx.root);
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!(
                    "{} {}: {}",
                    "warning:".bold().yellow(),
                    display_path,
                    err
                );
                unreadable += 1;
                continue;
            }
        };

        if !detect(&text, &ctx.config.hook).needs_update() {
            continue;
        }
        pending += 1;
        if let Some(location) = first_arabic(&text) {
            print_untranslated(&display_path, &location);
        }
    }

    print_check_summary(pending, ctx.files.len() - unreadable);

    Ok(if pending > 0 {
        ExitStatus::Failure
    } else if unreadable > 0 {
        ExitStatus::Error
    } else {
        ExitStatus::Success
    })
}
