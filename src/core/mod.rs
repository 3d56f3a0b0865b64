//! Core rewrite engine.
//!
//! A file goes through three stages, each a pure function of the text:
//!
//! ```text
//! detect      (needs migration? already migrated?)
//!     ↓
//! scaffold    ("use client", hook import, hook call)
//!     ↓
//! substitute  (phrases → t("key") calls)
//! ```
//!
//! `migrate` drives the stages over the files found by `file_scanner` and only
//! touches the filesystem at the edges.
//!
//! ## Module Structure
//!
//! - `context`: MigrateContext (config + source root + discovered files)
//! - `data`: PhraseDictionary, HookSpec, ReplacementContext
//! - `detect`: Script detection
//! - `file_scanner`: Candidate file discovery
//! - `migrate`: Batch read → rewrite → write loop and RunSummary
//! - `rewrite`: Per-file pipeline
//! - `scaffold`: Scaffold injection
//! - `substitute`: Phrase substitution

pub mod context;
pub mod data;
pub mod detect;
pub mod file_scanner;
pub mod migrate;
pub mod rewrite;
pub mod scaffold;
pub mod substitute;

pub use context::MigrateContext;
pub use data::{HookSpec, PhraseDictionary, ReplacementContext};
pub use detect::{Eligibility, TextLocation, detect, first_arabic};
pub use migrate::{FileOutcome, FileStatus, RunSummary, SkipReason, migrate_files};
pub use rewrite::{Rewrite, Rewriter, Rewritten};
pub use scaffold::{MissingAnchor, Scaffold, ScaffoldInjector, ScaffoldStep};
pub use substitute::{DEFAULT_QUOTE_LOOKBACK, Replacement, Substituter, Substitution};
