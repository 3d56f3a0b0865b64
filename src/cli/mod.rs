//! Command-line interface layer.
//!
//! Parses arguments, dispatches to a command and maps the outcome to an exit code.
//! Everything user-facing (colors, marks, summaries) lives in `report`.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, CheckCommand, Command, CommonArgs, MigrateCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run::run(args)?;
    Ok(status.into())
}
