// authprov-core/src/core/pattern.rs
// ============================================================================
// Module: AuthProv Lazy Patterns
// Description: Lazily compiled, statically declared regular expressions.
// Purpose: Let validation rules declare patterns as statics without panics.
// Dependencies: regex
// ============================================================================

//! ## Overview
//! A [`Pattern`] pairs a static regex source with a compile-once cell. A
//! source that fails to compile never matches, so a broken pattern fails
//! closed instead of aborting the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Captures;
use regex::Regex;

// ============================================================================
// SECTION: Pattern
// ============================================================================

/// Statically declared regular expression compiled on first use.
#[derive(Debug)]
pub struct Pattern {
    /// Regex source text.
    source: &'static str,
    /// Compiled regex, `None` when the source is invalid.
    compiled: OnceLock<Option<Regex>>,
}

impl Pattern {
    /// Declares a pattern from its regex source.
    #[must_use]
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceLock::new(),
        }
    }

    /// Returns the regex source text.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.source
    }

    /// Returns true when `text` matches the pattern.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_some_and(|regex| regex.is_match(text))
    }

    /// Returns the capture groups for `text` when it matches.
    #[must_use]
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex()?.captures(text)
    }

    /// Replaces every match in `text` with the output of `replacer`.
    ///
    /// Text is returned unchanged when the pattern is invalid.
    pub fn replace_all<'t, F>(&self, text: &'t str, replacer: F) -> Cow<'t, str>
    where
        F: FnMut(&Captures<'_>) -> String,
    {
        match self.regex() {
            Some(regex) => regex.replace_all(text, replacer),
            None => Cow::Borrowed(text),
        }
    }

    /// Compiles the pattern once and returns the cached regex.
    fn regex(&self) -> Option<&Regex> {
        self.compiled.get_or_init(|| Regex::new(self.source).ok()).as_ref()
    }
}
