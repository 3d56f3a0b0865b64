//! Script detection: decides whether a source file still needs migration.

use super::data::HookSpec;
use crate::utils::{contains_arabic, is_arabic};

/// Why a file is or is not a rewrite candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Contains Arabic text and does not import the translation hook yet.
    NeedsUpdate,
    /// Already imports the translation hook.
    AlreadyMigrated,
    /// Contains no Arabic text.
    NoArabicText,
}

impl Eligibility {
    pub fn needs_update(&self) -> bool {
        matches!(self, Eligibility::NeedsUpdate)
    }

    /// Short reason shown in verbose output for skipped files.
    pub fn reason(&self) -> &'static str {
        match self {
            Eligibility::NeedsUpdate => "needs update",
            Eligibility::AlreadyMigrated => "already migrated",
            Eligibility::NoArabicText => "no Arabic text",
        }
    }
}

/// Classify `text`. The import marker wins over any Arabic content.
pub fn detect(text: &str, hook: &HookSpec) -> Eligibility {
    if hook
        .import_markers()
        .iter()
        .any(|marker| text.contains(marker.as_str()))
    {
        return Eligibility::AlreadyMigrated;
    }

    if contains_arabic(text) {
        Eligibility::NeedsUpdate
    } else {
        Eligibility::NoArabicText
    }
}

/// Position of the first Arabic character in a file, for reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLocation {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub col: usize,
    /// The whole line, without its line ending.
    pub source_line: String,
}

pub fn first_arabic(text: &str) -> Option<TextLocation> {
    text.lines().enumerate().find_map(|(idx, line)| {
        line.chars().position(is_arabic).map(|pos| TextLocation {
            line: idx + 1,
            col: pos + 1,
            source_line: line.to_string(),
        })
    })
}
