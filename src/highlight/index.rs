//! KeywordIndex: Normalized, De-duplicated Keyword Set
//!
//! Keeps each lower-cased term's first-seen category/weight and orders the
//! distinct terms longest first. That ordering is what gives
//! multi-word phrases precedence over the words they contain.

use std::collections::HashSet;

use super::types::KeywordRecord;

// =============================================================================
// Types
// =============================================================================

/// One distinct, searchable term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedTerm {
    /// Trimmed term as first seen (used to build the search pattern)
    pub term: String,
    /// Lower-cased lookup key
    pub key: String,
    /// Category with the `other` fallback applied
    pub category: String,
    pub weight: u32,
    /// Length in chars, the precedence key
    pub char_len: usize,
    /// Position in longest-first order
    pub rank: usize,
}

/// Distinct terms for one highlight call
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    terms: Vec<IndexedTerm>,
}

// =============================================================================
// Building
// =============================================================================

impl KeywordIndex {
    pub fn build(keywords: &[KeywordRecord]) -> Self {
        let mut terms: Vec<IndexedTerm> = Vec::with_capacity(keywords.len());
        let mut seen: HashSet<String> = HashSet::with_capacity(keywords.len());

        for record in keywords {
            let term = record.term.trim();
            if term.is_empty() {
                continue;
            }

            let key = term.to_lowercase();
            if !seen.insert(key.clone()) {
                continue;
            }

            terms.push(IndexedTerm {
                term: term.to_string(),
                char_len: term.chars().count(),
                key,
                category: record.effective_category().to_string(),
                weight: record.weight.max(1),
                rank: 0,
            });
        }

        // Stable: equal lengths keep input order
        terms.sort_by(|a, b| b.char_len.cmp(&a.char_len));

        for (rank, entry) in terms.iter_mut().enumerate() {
            entry.rank = rank;
        }

        Self { terms }
    }

    /// Distinct terms, longest first
    pub fn terms(&self) -> &[IndexedTerm] {
        &self.terms
    }

    /// Case-insensitive lookup
    #[cfg(test)]
    pub fn get(&self, term: &str) -> Option<&IndexedTerm> {
        let key = term.trim().to_lowercase();
        self.terms.iter().find(|entry| entry.key == key)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
