//! RenderMemo: skip re-highlighting when the inputs are unchanged
//!
//! A highlight pass depends on four things: the text, the keyword records,
//! category visibility and the view mode. `fingerprint` folds them into one
//! u64; `RenderMemo` keeps the last fingerprint with the value it produced.
//! The engine itself never caches.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::cortex::ViewMode;
use super::types::KeywordRecord;
use super::visibility::CategoryVisibility;

/// Hash of everything a highlight pass depends on.
///
/// Visibility is hashed in sorted key order so toggling back and forth
/// lands on the same value.
pub fn fingerprint(
    text: &str,
    keywords: &[KeywordRecord],
    visibility: &CategoryVisibility,
    mode: ViewMode,
) -> u64 {
    let mut state = DefaultHasher::new();
    text.hash(&mut state);
    keywords.hash(&mut state);
    visibility.sorted_entries().hash(&mut state);
    mode.hash(&mut state);
    state.finish()
}

// =============================================================================
// RenderMemo
// =============================================================================

/// Single-slot memo keyed by input fingerprint
#[derive(Debug, Clone)]
pub struct RenderMemo<T> {
    slot: Option<(u64, T)>,
    lookups: u64,
    hits: u64,
}

impl<T> Default for RenderMemo<T> {
    fn default() -> Self {
        Self {
            slot: None,
            lookups: 0,
            hits: 0,
        }
    }
}

impl<T: Clone> RenderMemo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, if it is the last one stored. Counts the lookup.
    pub fn lookup(&mut self, key: u64) -> Option<T> {
        self.lookups += 1;
        match &self.slot {
            Some((stored, value)) if *stored == key => {
                self.hits += 1;
                Some(value.clone())
            }
            _ => None,
        }
    }

    /// Replace the slot
    pub fn store(&mut self, key: u64, value: T) {
        self.slot = Some((key, value));
    }

    /// Hits as a percentage of lookups
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.hits as f64 * 100.0 / self.lookups as f64
    }

    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn key(&self) -> Option<u64> {
        self.slot.as_ref().map(|(key, _)| *key)
    }

    /// Forget the slot and the counters
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
