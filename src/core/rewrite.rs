//! Per-file rewrite: detection, then scaffold injection, then substitution.
//!
//! This is a pure text transform. Reading and writing files is left to
//! [`super::migrate`].

use anyhow::Result;

use super::{
    HookSpec, PhraseDictionary,
    detect::{Eligibility, detect},
    scaffold::{MissingAnchor, ScaffoldInjector, ScaffoldStep},
    substitute::{Replacement, Substituter},
};
use crate::config::Config;

/// A buffer the pipeline changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    pub inserted: Vec<ScaffoldStep>,
    pub missing: Vec<MissingAnchor>,
    pub replacements: Vec<Replacement>,
}

/// Outcome of rewriting one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Not a candidate, the buffer is returned untouched.
    Ineligible(Eligibility),
    /// A candidate the pipeline left byte-for-byte identical.
    Unchanged { missing: Vec<MissingAnchor> },
    Changed(Rewritten),
}

pub struct Rewriter<'a> {
    hook: &'a HookSpec,
    injector: ScaffoldInjector<'a>,
    substituter: Substituter<'a>,
}

impl<'a> Rewriter<'a> {
    pub fn new(
        hook: &'a HookSpec,
        directive: &'a str,
        dictionary: &'a PhraseDictionary,
        quote_lookback: usize,
    ) -> Result<Self> {
        Ok(Self {
            hook,
            injector: ScaffoldInjector::new(hook, directive)?,
            substituter: Substituter::new(dictionary, hook, quote_lookback),
        })
    }

    pub fn from_config(config: &'a Config) -> Result<Self> {
        Self::new(
            &config.hook,
            &config.directive,
            &config.phrases,
            config.quote_lookback,
        )
    }

    pub fn rewrite(&self, source: &str) -> Rewrite {
        let eligibility = detect(source, self.hook);
        if !eligibility.needs_update() {
            return Rewrite::Ineligible(eligibility);
        }

        let scaffold = self.injector.inject(source);
        let substitution = self.substituter.apply(&scaffold.text);

        if substitution.text == source {
            return Rewrite::Unchanged {
                missing: scaffold.missing,
            };
        }

        Rewrite::Changed(Rewritten {
            text: substitution.text,
            inserted: scaffold.inserted,
            missing: scaffold.missing,
            replacements: substitution.replacements,
        })
    }
}
