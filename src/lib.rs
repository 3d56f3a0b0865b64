//! Tarjim - batch migration of hardcoded Arabic UI text in Next.js pages
//!
//! Tarjim walks the `page.tsx` files of a Next.js app, adds the client directive,
//! the translation hook import and the hook call where they are missing, and
//! replaces known Arabic phrases with `t("key")` lookups.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit codes)
//! - `config`: Configuration file loading and validation
//! - `core`: Detection, scaffolding and substitution engine
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
