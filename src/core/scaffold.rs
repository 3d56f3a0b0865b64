//! Scaffold injection.
//!
//! Before a file can call the translation accessor it needs three things, added in
//! this order and only when missing:
//!
//! 1. the client directive (`"use client";`) ahead of any code,
//! 2. an import of the translation hook after the last import line,
//! 3. a `const { t } = useLanguage();` binding at the top of the default-exported
//!    component.
//!
//! Anchors are found with line-oriented patterns, not a syntax tree. When an anchor
//! is missing the step is skipped and reported through [`Scaffold::missing`].

use std::{fmt, sync::LazyLock};

use anyhow::Result;
use regex::Regex;

use super::data::HookSpec;
use crate::utils::newline_of;

/// Matches a line that ends an import: `import x from "y";`, `import "y";`, or the
/// closing `} from "y";` line of a multi-line import.
static IMPORT_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?mR)^(?:import\b[^\r\n]*?\bfrom|\}[ \t]*from|import)[ \t]*["'][^"'\r\n]*["'][ \t]*;?[ \t]*$"#,
    )
    .unwrap()
});

/// Matches `export default function Name(params) {`, with an optional return type.
static COMPONENT_SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"export\s+default\s+function\s+[A-Za-z_$][\w$]*\s*\([^)]*\)(?:\s*:\s*[\w$.<>\[\]|, ]+?)?\s*\{",
    )
    .unwrap()
});

const DEFAULT_INDENT: &str = "  ";

/// A structural addition made by the injector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    Directive,
    HookImport,
    HookBinding,
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldStep::Directive => write!(f, "directive"),
            ScaffoldStep::HookImport => write!(f, "hook import"),
            ScaffoldStep::HookBinding => write!(f, "hook call"),
        }
    }
}

/// An anchor the injector looked for and could not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingAnchor {
    /// No import line to place the hook import after.
    ImportList,
    /// No `export default function` to place the hook call in.
    ComponentSignature,
}

impl fmt::Display for MissingAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingAnchor::ImportList => {
                write!(f, "no import statement found, hook import was not added")
            }
            MissingAnchor::ComponentSignature => write!(
                f,
                "no `export default function` found, hook call was not added"
            ),
        }
    }
}

/// Result of scaffold injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    pub text: String,
    pub inserted: Vec<ScaffoldStep>,
    pub missing: Vec<MissingAnchor>,
}

enum StepOutcome {
    Present,
    Inserted,
    Missing(MissingAnchor),
}

pub struct ScaffoldInjector<'a> {
    hook: &'a HookSpec,
    directive: &'a str,
    binding_regex: Regex,
}

impl<'a> ScaffoldInjector<'a> {
    pub fn new(hook: &'a HookSpec, directive: &'a str) -> Result<Self> {
        let accessor = regex::escape(&hook.accessor);
        let name = regex::escape(&hook.name);
        // `\b` is not enough here: accessors may start or end with `$`
        let binding_regex = Regex::new(&format!(
            r"\{{(?:[^{{}}]*[^\w${{}}])?{accessor}(?:[^\w${{}}][^{{}}]*)?\}}\s*=\s*{name}\s*\("
        ))?;
        Ok(Self {
            hook,
            directive,
            binding_regex,
        })
    }

    /// Establish the directive, the hook import and the hook binding in `text`.
    ///
    /// Each step checks for what it would add first, so injecting twice is a no-op.
    pub fn inject(&self, text: &str) -> Scaffold {
        let mut text = text.to_string();
        let mut inserted = Vec::new();
        let mut missing = Vec::new();

        let steps: [(ScaffoldStep, fn(&Self, &mut String) -> StepOutcome); 3] = [
            (ScaffoldStep::Directive, Self::ensure_directive),
            (ScaffoldStep::HookImport, Self::ensure_import),
            (ScaffoldStep::HookBinding, Self::ensure_binding),
        ];

        for (step, apply) in steps {
            match apply(self, &mut text) {
                StepOutcome::Present => {}
                StepOutcome::Inserted => inserted.push(step),
                StepOutcome::Missing(anchor) => missing.push(anchor),
            }
        }

        Scaffold {
            text,
            inserted,
            missing,
        }
    }

    fn ensure_directive(&self, text: &mut String) -> StepOutcome {
        let double = format!("\"{}\"", self.directive);
        let single = format!("'{}'", self.directive);
        if text.contains(&double) || text.contains(&single) {
            return StepOutcome::Present;
        }

        let nl = newline_of(text);
        let offset = leading_comment_end(text);
        // code may follow a closing `*/` on the same line
        let start = text[..offset].trim_end_matches([' ', '\t']).len();
        let mut insertion = String::new();
        if start > 0 && !text[..start].ends_with('\n') {
            insertion.push_str(nl);
        }
        insertion.push_str(&format!("{double};{nl}{nl}"));
        text.replace_range(start..offset, &insertion);
        StepOutcome::Inserted
    }

    fn ensure_import(&self, text: &mut String) -> StepOutcome {
        if text.contains(self.hook.name.as_str()) {
            return StepOutcome::Present;
        }

        let Some(last_import) = IMPORT_LINE_REGEX.find_iter(text).last() else {
            return StepOutcome::Missing(MissingAnchor::ImportList);
        };

        let end = last_import.end();
        let insertion = format!("{}{}", newline_of(text), self.hook.import_statement());
        text.insert_str(end, &insertion);
        StepOutcome::Inserted
    }

    fn ensure_binding(&self, text: &mut String) -> StepOutcome {
        if self.binding_regex.is_match(text) {
            return StepOutcome::Present;
        }

        let Some(signature) = COMPONENT_SIGNATURE_REGEX.find(text) else {
            return StepOutcome::Missing(MissingAnchor::ComponentSignature);
        };

        let brace_end = signature.end();
        let indent = body_indent(&text[brace_end..]);
        let insertion = format!(
            "{}{}{}",
            newline_of(text),
            indent,
            self.hook.binding_statement()
        );
        text.insert_str(brace_end, &insertion);
        StepOutcome::Inserted
    }
}

/// Byte offset of the first code after the leading comments and blank lines.
///
/// This is the start of a line, except when code follows a multi-line block
/// comment's closing `*/`. Returns `text.len()` if the file has no code at all.
fn leading_comment_end(text: &str) -> usize {
    let mut offset = 0;
    let mut in_block = false;

    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();

        if in_block {
            if let Some(end) = line.find("*/") {
                in_block = false;
                let code = line[end + 2..].trim_start();
                if !code.is_empty() && !code.starts_with("//") {
                    return offset + line.len() - code.len();
                }
            }
        } else if let Some(rest) = trimmed.strip_prefix("/*") {
            match rest.find("*/") {
                // `/* note */ const x = 1;` is code
                Some(end) if !rest[end + 2..].trim().is_empty() => return offset,
                Some(_) => {}
                None => in_block = true,
            }
        } else if !trimmed.is_empty() && !trimmed.starts_with("//") {
            return offset;
        }

        offset += line.len();
    }

    offset
}

/// Indentation of the first body line after an opening brace, or two spaces.
fn body_indent(after_brace: &str) -> &str {
    let Some(newline) = after_brace.find('\n') else {
        return DEFAULT_INDENT;
    };
    let next_line = after_brace[newline + 1..]
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches('\r');
    let trimmed = next_line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('}') {
        return DEFAULT_INDENT;
    }
    &next_line[..next_line.len() - trimmed.len()]
}
