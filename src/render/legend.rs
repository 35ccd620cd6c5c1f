//! Legend: one toggle per category present in the keyword set

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::palette::{CategoryPalette, StyleSpec};
use crate::highlight::types::{normalize_category, KeywordRecord};
use crate::highlight::visibility::CategoryVisibility;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Normalized category key (what the visibility set is toggled with)
    pub category: String,
    pub label: String,
    pub style: StyleSpec,
    pub visible: bool,
}

/// Distinct categories in first-seen order. A record without a category counts as `other`.
pub fn build_legend(
    keywords: &[KeywordRecord],
    visibility: &CategoryVisibility,
    palette: &CategoryPalette,
) -> Vec<LegendEntry> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for record in keywords {
        let category = normalize_category(&record.category);
        if !seen.insert(category.clone()) {
            continue;
        }
        entries.push(LegendEntry {
            label: palette.label(record.effective_category()),
            style: palette.style(&category).clone(),
            visible: visibility.is_visible(&category),
            category,
        });
    }

    entries
}
