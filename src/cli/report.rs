//! Report formatting and printing utilities.
//!
//! Status lines and summaries go to stdout, warnings to stderr. Every printer has a
//! `_to` variant taking a writer, which the tests use.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{FileOutcome, FileStatus, RunSummary, TextLocation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Mark for files left untouched.
pub const SKIP_MARK: &str = "-";

/// Print the status line for one processed file, plus any anchor warnings.
pub fn print_outcome(outcome: &FileOutcome, dry_run: bool, verbose: bool) {
    print_outcome_to(
        outcome,
        dry_run,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_outcome_to<W: Write, E: Write>(
    outcome: &FileOutcome,
    dry_run: bool,
    verbose: bool,
    writer: &mut W,
    warnings: &mut E,
) {
    let path = &outcome.display_path;
    match &outcome.status {
        FileStatus::Updated(rewritten) => {
            let label = if dry_run { "Would update:" } else { "Updated:" };
            let mut line = format!("{} {} {}", SUCCESS_MARK.green(), label.green(), path);
            if verbose {
                let mut detail = format!("{} replacement(s)", rewritten.replacements.len());
                if !rewritten.inserted.is_empty() {
                    let steps: Vec<String> =
                        rewritten.inserted.iter().map(|s| s.to_string()).collect();
                    detail.push_str(&format!("; added {}", steps.join(", ")));
                }
                line.push_str(&format!(" ({})", detail));
            }
            let _ = writeln!(writer, "{}", line);
        }
        FileStatus::Skipped(reason) => {
            let mut line = format!("{} {} {}", SKIP_MARK.dimmed(), "Skipped:".dimmed(), path);
            if verbose {
                line.push_str(&format!(" ({})", reason.describe()));
            }
            let _ = writeln!(writer, "{}", line);
        }
        FileStatus::Failed(err) => {
            let _ = writeln!(
                writer,
                "{} {} {}: {:#}",
                FAILURE_MARK.red(),
                "Error:".red().bold(),
                path,
                err
            );
        }
    }

    for anchor in outcome.missing_anchors() {
        let _ = writeln!(
            warnings,
            "{} {}: {}",
            "warning:".bold().yellow(),
            path,
            anchor
        );
    }
}

/// Print the end-of-run summary block.
pub fn print_summary(summary: &RunSummary) {
    print_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let (updated_label, list_label) = if summary.dry_run {
        ("Would update", "Files to update:")
    } else {
        ("Updated", "Updated files:")
    };

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Summary:".bold());
    let _ = writeln!(
        writer,
        "  {}: {} file(s)",
        updated_label,
        summary.updated.len()
    );
    if summary.replacement_count > 0 {
        let _ = writeln!(writer, "  Replacements: {}", summary.replacement_count);
    }
    let _ = writeln!(writer, "  Skipped: {} file(s)", summary.skipped.len());
    if !summary.failed.is_empty() {
        let _ = writeln!(
            writer,
            "  {}: {} file(s)",
            "Failed".red(),
            summary.failed.len()
        );
    }

    if !summary.updated.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", list_label.bold());
        for path in &summary.updated {
            let _ = writeln!(writer, "  - {}", path);
        }
    }

    if summary.dry_run && !summary.updated.is_empty() {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "Run without {} to write these changes.",
            "--dry-run".cyan()
        );
    }
}

/// Warn that the include patterns matched nothing.
pub fn print_no_files(verbose: bool) {
    let _ = writeln!(
        io::stderr().lock(),
        "{} no files matched the configured include patterns{}",
        "warning:".bold().yellow(),
        if verbose { "" } else { " (use -v for details)" }
    );
}

/// Print a file that still needs migration, pointing at its first Arabic character.
pub fn print_untranslated(path: &str, location: &TextLocation) {
    print_untranslated_to(path, location, &mut io::stdout().lock());
}

pub fn print_untranslated_to<W: Write>(path: &str, location: &TextLocation, writer: &mut W) {
    let TextLocation {
        line,
        col,
        source_line,
    } = location;
    let width = line.to_string().len();

    let _ = writeln!(
        writer,
        "{}: untranslated Arabic text  {}",
        "warning".bold().yellow(),
        "needs-migration".dimmed().cyan()
    );
    let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), path, line, col);
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line
    );

    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = width,
        padding = caret_padding
    );
    let _ = writeln!(writer);
}

/// Print the outcome of `check`.
pub fn print_check_summary(pending: usize, checked: usize) {
    print_check_summary_to(pending, checked, &mut io::stdout().lock());
}

pub fn print_check_summary_to<W: Write>(pending: usize, checked: usize, writer: &mut W) {
    if pending == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Checked {} file(s) - nothing to migrate", checked).green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} of {} file(s) need migration.",
        FAILURE_MARK.red(),
        pending,
        checked
    );
    let _ = writeln!(writer, "Run {} to rewrite them.", "tarjim migrate".cyan());
}
