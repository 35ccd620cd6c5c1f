//! SpanLocator: Whole-Word Keyword Matching
//!
//! Each term is compiled to its own escaped, case-insensitive regex and run
//! against the ORIGINAL text, so every candidate span shares one coordinate
//! system no matter how many terms are searched.
//!
//! A "word" is a run of alphanumerics, `_` and `-`. Each end of a match must
//! sit on a class change, like a regex `\b` with that wider word class: the
//! neighbouring char (or the text edge, which counts as non-word) must not
//! share the class of the match's own edge char. So `.net` matches inside
//! `asp.net` but not after a space, and `c++` never matches before a space.

use regex::{Regex, RegexBuilder};

use super::index::IndexedTerm;
use super::types::MatchSpan;

/// Characters that extend a word. Hyphenated terms are one unit.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// True when `text[start..end]` starts and ends on a word-class change
pub fn has_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let matched = &text[start..end];
    let (first, last) = match (matched.chars().next(), matched.chars().next_back()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };

    let before = text[..start].chars().next_back().is_some_and(is_word_char);
    let after = text[end..].chars().next().is_some_and(is_word_char);

    before != is_word_char(first) && after != is_word_char(last)
}

// =============================================================================
// SpanLocator
// =============================================================================

#[derive(Debug, Clone)]
pub struct SpanLocator {
    size_limit: usize,
}

impl SpanLocator {
    pub fn new(size_limit: usize) -> Self {
        Self { size_limit }
    }

    /// Build the search pattern for a term. Metacharacters are escaped.
    pub fn compile(&self, term: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .size_limit(self.size_limit)
            .build()
    }

    /// All whole-word occurrences of `entry` in `text`
    pub fn locate(&self, text: &str, entry: &IndexedTerm) -> Result<Vec<MatchSpan>, regex::Error> {
        let pattern = self.compile(&entry.term)?;
        Ok(find_whole_words(text, &pattern, entry))
    }
}

/// Scan `text` with a compiled term pattern.
///
/// Accepted matches never overlap each other. A match rejected for its
/// boundaries resumes the scan one char later, so `"aa"` inside `"xaa aa"`
/// still finds the second occurrence.
pub fn find_whole_words(text: &str, pattern: &Regex, entry: &IndexedTerm) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(m) = pattern.find_at(text, pos) {
        if !m.is_empty() && has_word_boundaries(text, m.start(), m.end()) {
            spans.push(MatchSpan {
                start: m.start(),
                end: m.end(),
                term: m.as_str().to_string(),
                category: entry.category.clone(),
                weight: entry.weight,
            });
            pos = m.end();
            continue;
        }

        match text[m.start()..].chars().next() {
            Some(c) => pos = m.start() + c.len_utf8(),
            None => break,
        }
    }

    spans
}
