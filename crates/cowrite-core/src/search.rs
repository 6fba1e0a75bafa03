//! Locating lines by content.
//!
//! Actors usually address lines by identity, but they often first need to *find* that identity
//! from what a line says ("insert after the line containing `fn main`"). This module supports:
//!
//! - plain substring search (escaped and compiled into a regex)
//! - regex search
//! - optional whole-word matching
//!
//! Matching is performed per line; a pattern never spans a line separator.

use crate::line::Line;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Options that control how search is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// If `true`, performs a case-sensitive search.
    pub case_sensitive: bool,
    /// If `true`, matches only whole words (alphanumeric and `_`).
    pub whole_word: bool,
    /// If `true`, treats the query as a regex pattern.
    pub regex: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            whole_word: false,
            regex: false,
        }
    }
}

/// A line whose content matched a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// Index of the line at search time.
    pub index: usize,
    /// Copy of the matching line.
    pub line: Line,
}

/// Search errors.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The provided regex pattern failed to compile.
    #[error("Invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// A compiled query, reusable across lines.
#[derive(Debug)]
pub(crate) struct LineMatcher {
    re: Regex,
    whole_word: bool,
}

impl LineMatcher {
    /// Compile `query`; returns `Ok(None)` for an empty query, which matches nothing.
    pub(crate) fn new(query: &str, options: SearchOptions) -> Result<Option<Self>, SearchError> {
        if query.is_empty() {
            return Ok(None);
        }

        let pattern = if options.regex {
            query.to_string()
        } else {
            regex::escape(query)
        };

        let re = RegexBuilder::new(&pattern)
            .case_insensitive(!options.case_sensitive)
            .build()?;

        Ok(Some(Self {
            re,
            whole_word: options.whole_word,
        }))
    }

    pub(crate) fn is_match(&self, content: &str) -> bool {
        self.re.find_iter(content).any(|m| {
            !m.is_empty() && (!self.whole_word || is_whole_word(content, m.start(), m.end()))
        })
    }
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
