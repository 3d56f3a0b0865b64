use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, migrate::migrate},
    exit_status::ExitStatus,
};

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Migrate(cmd)) => migrate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
