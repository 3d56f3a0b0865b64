//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `migrate`: Rewrite pages with hardcoded Arabic text to use translation lookups
//! - `check`: List pages that still need migration without touching them
//! - `init`: Initialize tarjim configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by commands that walk the source tree.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MigrateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rewrite pages to route Arabic text through the translation hook
    Migrate(MigrateCommand),
    /// List pages that still contain untranslated Arabic text
    Check(CheckCommand),
    /// Initialize a new .tarjimrc.json configuration file
    Init,
}
