//! Overlap Resolver: Longest Keyword Wins
//!
//! Candidates from hidden categories are dropped BEFORE resolution, so a
//! hidden phrase never starves a visible shorter keyword of its text.
//! Survivors are accepted longest term first; a candidate is accepted only
//! if none of its bytes are already claimed.

use std::collections::BTreeMap;

use super::types::MatchSpan;
use super::visibility::CategoryVisibility;

// =============================================================================
// Candidate
// =============================================================================

/// A located span plus the precedence data of the term that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub span: MatchSpan,
    /// Char length of the keyword term (not of the matched text)
    pub term_len: usize,
    /// Term position in the index's longest-first order
    pub rank: usize,
}

// =============================================================================
// ClaimedRegions
// =============================================================================

/// Disjoint `[start, end)` intervals keyed by start offset
#[derive(Debug, Clone, Default)]
pub struct ClaimedRegions {
    intervals: BTreeMap<usize, usize>,
}

impl ClaimedRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any byte of `[start, end)` is already claimed.
    ///
    /// Intervals are disjoint, so only the last one starting before `end`
    /// can reach into the range.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.intervals
            .range(..end)
            .next_back()
            .is_some_and(|(_, &claimed_end)| claimed_end > start)
    }

    /// Claim `[start, end)` if free. Returns whether it was claimed.
    pub fn claim(&mut self, start: usize, end: usize) -> bool {
        if start >= end || self.overlaps(start, end) {
            return false;
        }
        self.intervals.insert(start, end);
        true
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of a resolution pass
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Winning spans, in processing order (not sorted by offset)
    pub accepted: Vec<MatchSpan>,
    /// Candidates discarded because their category is hidden
    pub hidden: usize,
}

/// Pick the non-overlapping winners among `candidates`
pub fn resolve(candidates: Vec<Candidate>, visibility: &CategoryVisibility) -> Resolution {
    let total = candidates.len();
    let mut visible: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| visibility.is_visible(&c.span.category))
        .collect();
    let hidden = total - visible.len();

    visible.sort_by(|a, b| {
        b.term_len
            .cmp(&a.term_len)
            .then_with(|| a.span.start.cmp(&b.span.start))
            .then_with(|| a.rank.cmp(&b.rank))
    });

    let mut claimed = ClaimedRegions::new();
    let mut accepted = Vec::new();

    for candidate in visible {
        if claimed.claim(candidate.span.start, candidate.span.end) {
            accepted.push(candidate.span);
        }
    }

    Resolution { accepted, hidden }
}
