use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::utils::display_relative;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    /// Candidate files in discovery order, without duplicates.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect candidate source files under `root`.
///
/// Include patterns are expanded in the order given. Glob entries come back sorted
/// from the `glob` crate and literal directories are walked sorted by file name, so
/// the result is deterministic for a fixed tree.
pub fn scan_files(
    root: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut skipped_count = 0;

    let ignores: Vec<Pattern> = ignore_patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    let mut push = |path: PathBuf| {
        let relative = display_relative(&path, root);
        if ignores.iter().any(|p| p.matches(&relative)) {
            return;
        }
        if seen.insert(path.clone()) {
            files.push(path);
        }
    };

    for inc in includes {
        if is_glob_pattern(inc) {
            // Escape the root so `[locale]`-style directories are taken literally
            let full_pattern = format!(
                "{}/{}",
                Pattern::escape(&root.to_string_lossy()),
                inc.trim_start_matches("./")
            );
            match glob(&full_pattern) {
                Ok(entries) => {
                    for entry in entries {
                        match entry {
                            Ok(path) if path.is_file() => push(path),
                            Ok(_) => {}
                            Err(e) => {
                                skipped_count += 1;
                                if verbose {
                                    eprintln!(
                                        "{} Cannot access path: {}",
                                        "warning:".bold().yellow(),
                                        e
                                    );
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                }
            }
            continue;
        }

        let path = root.join(inc);
        if path.is_file() {
            push(path);
            continue;
        }
        if !path.exists() {
            if verbose {
                eprintln!(
                    "{} Include path does not exist: {}",
                    "warning:".bold().yellow(),
                    path.display()
                );
            }
            continue;
        }

        for entry in WalkDir::new(&path).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            if entry.file_type().is_file() && is_scannable_file(entry.path()) {
                push(entry.into_path());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
