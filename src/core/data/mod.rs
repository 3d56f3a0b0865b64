//! Core data types shared by the rewrite pipeline.
//!
//! ## Module Structure
//!
//! - `dictionary`: PhraseDictionary (phrase → translation key table)
//! - `hook`: HookSpec (the translation hook a migrated file calls)
//! - `replacement_context`: ReplacementContext (text node vs quoted literal)

pub mod dictionary;
pub mod hook;
pub mod replacement_context;

pub use dictionary::PhraseDictionary;
pub use hook::HookSpec;
pub use replacement_context::ReplacementContext;
