//! Common utility functions shared across the codebase.

use std::path::Path;

/// Returns true if the character is in the Arabic Unicode block (U+0600..=U+06FF).
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Checks if the text contains at least one character from the Arabic block.
///
/// # Examples
///
/// ```
/// use tarjim::utils::contains_arabic;
///
/// assert!(contains_arabic("حفظ"));
/// assert!(contains_arabic("<button>حفظ</button>"));
/// assert!(contains_arabic("Save ١٢٣"));
/// assert!(!contains_arabic("Save"));
/// assert!(!contains_arabic(""));
/// ```
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic)
}

/// Returns true if `name` is a plain JavaScript identifier.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Display a path relative to `root`, falling back to the full path.
///
/// Separators are normalized to `/` so reports look the same on every platform.
pub fn display_relative(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.to_string_lossy().replace('\\', "/")
}

/// The newline sequence used by `text`: `\r\n` if it appears, `\n` otherwise.
pub fn newline_of(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}
