//! Migrate command - rewrite pages in place.
//!
//! Each file is reported as soon as it is processed. A file that cannot be read or
//! written is listed as an error and the run continues, so the command still exits
//! with success.

use anyhow::Result;

use super::super::{
    args::MigrateCommand,
    exit_status::ExitStatus,
    report::{print_no_files, print_outcome, print_summary},
};
use crate::core::{MigrateContext, migrate_files};

pub fn migrate(cmd: MigrateCommand) -> Result<ExitStatus> {
    let MigrateCommand { common, dry_run } = cmd;
    let ctx = MigrateContext::new(common.source_root.as_deref(), common.verbose)?;

    if ctx.files.is_empty() {
        print_no_files(ctx.verbose);
    }

    let rewriter = ctx.rewriter()?;
    let summary = migrate_files(&rewriter, &ctx.files, &ctx.root, !dry_run, |outcome| {
        print_outcome(outcome, dry_run, ctx.verbose)
    });
    print_summary(&summary);

    Ok(ExitStatus::Success)
}
