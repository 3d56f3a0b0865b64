//! Phrase substitution.
//!
//! Replaces known Arabic phrases with calls into the translation accessor. Two
//! templates exist, chosen by the text around the phrase:
//!
//! - text node: `>حفظ<` becomes `>{t("common.save")}<`
//! - quoted literal: `"حفظ"` becomes `{t("common.save")}`, but only when a `>`
//!   appears within the lookback window before the opening quote. Without one the
//!   literal is more likely an import path or an object key and is left alone.
//!
//! Matching is plain substring matching on the delimited phrase. Phrases are tried
//! longest-first so a short phrase never splits a longer one.

use super::data::{HookSpec, PhraseDictionary, ReplacementContext};

/// Default number of characters inspected before a quoted literal.
pub const DEFAULT_QUOTE_LOOKBACK: usize = 50;

const QUOTES: [char; 2] = ['"', '\''];

/// One replaced occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub phrase: String,
    pub key: String,
    pub context: ReplacementContext,
}

/// Result of running the substituter over a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub replacements: Vec<Replacement>,
}

pub struct Substituter<'a> {
    dictionary: &'a PhraseDictionary,
    hook: &'a HookSpec,
    lookback: usize,
}

impl<'a> Substituter<'a> {
    pub fn new(dictionary: &'a PhraseDictionary, hook: &'a HookSpec, lookback: usize) -> Self {
        Self {
            dictionary,
            hook,
            lookback,
        }
    }

    pub fn apply(&self, text: &str) -> Substitution {
        let mut text = text.to_string();
        let mut replacements = Vec::new();

        for (phrase, key) in self.dictionary.longest_first() {
            let call = self.hook.lookup_call(key);
            let mut record = |context: ReplacementContext, count: usize| {
                replacements.extend((0..count).map(|_| Replacement {
                    phrase: phrase.to_string(),
                    key: key.to_string(),
                    context,
                }));
            };

            let node = format!(">{phrase}<");
            let count = text.matches(node.as_str()).count();
            if count > 0 {
                text = text.replace(node.as_str(), &format!(">{call}<"));
                record(ReplacementContext::TextNode, count);
            }

            for quote in QUOTES {
                let literal = format!("{quote}{phrase}{quote}");
                let (replaced, count) = replace_after_markup(&text, &literal, &call, self.lookback);
                if count > 0 {
                    text = replaced;
                    record(ReplacementContext::QuotedLiteral, count);
                }
            }
        }

        Substitution { text, replacements }
    }
}

/// Replace every `literal` whose preceding window contains `>`.
///
/// Windows are measured on `text` as given, so earlier replacements in the same
/// pass do not shift them.
fn replace_after_markup(text: &str, literal: &str, call: &str, lookback: usize) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut count = 0;

    for (start, _) in text.match_indices(literal) {
        if !has_markup_before(&text[..start], lookback) {
            continue;
        }
        out.push_str(&text[copied..start]);
        out.push_str(call);
        copied = start + literal.len();
        count += 1;
    }

    if count == 0 {
        return (text.to_string(), 0);
    }
    out.push_str(&text[copied..]);
    (out, count)
}

fn has_markup_before(prefix: &str, lookback: usize) -> bool {
    prefix.chars().rev().take(lookback).any(|c| c == '>')
}
