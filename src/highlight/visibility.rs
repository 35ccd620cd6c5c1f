//! CategoryVisibility: Caller-Owned Category Toggles
//!
//! The legend owns and mutates this set; the engine only reads it. A category
//! with no entry is visible (fail-open), so newly introduced categories show
//! up until someone hides them. Keys are compared case-insensitively.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::types::normalize_category;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, bool>", into = "HashMap<String, bool>")]
pub struct CategoryVisibility {
    entries: HashMap<String, bool>,
}

impl CategoryVisibility {
    /// Everything visible
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, category: &str) -> bool {
        self.entries
            .get(&normalize_category(category))
            .copied()
            .unwrap_or(true)
    }

    pub fn set_visible(&mut self, category: &str, visible: bool) {
        self.entries.insert(normalize_category(category), visible);
    }

    /// Flip a category and return its new state
    pub fn toggle(&mut self, category: &str) -> bool {
        let visible = !self.is_visible(category);
        self.set_visible(category, visible);
        visible
    }

    /// Make every category visible again
    pub fn show_all(&mut self) {
        self.entries.clear();
    }

    /// Normalized hidden categories, sorted
    pub fn hidden(&self) -> Vec<&str> {
        let mut hidden: Vec<&str> = self
            .entries
            .iter()
            .filter(|&(_, &visible)| !visible)
            .map(|(category, _)| category.as_str())
            .collect();
        hidden.sort_unstable();
        hidden
    }

    /// Entries sorted by key, for hashing
    pub fn sorted_entries(&self) -> Vec<(&str, bool)> {
        let mut entries: Vec<(&str, bool)> = self
            .entries
            .iter()
            .map(|(category, &visible)| (category.as_str(), visible))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl From<HashMap<String, bool>> for CategoryVisibility {
    fn from(map: HashMap<String, bool>) -> Self {
        let mut visibility = Self::new();
        for (category, visible) in map {
            visibility.set_visible(&category, visible);
        }
        visibility
    }
}

impl From<CategoryVisibility> for HashMap<String, bool> {
    fn from(visibility: CategoryVisibility) -> Self {
        visibility.entries
    }
}

impl<'a> FromIterator<(&'a str, bool)> for CategoryVisibility {
    fn from_iter<I: IntoIterator<Item = (&'a str, bool)>>(iter: I) -> Self {
        let mut visibility = Self::new();
        for (category, visible) in iter {
            visibility.set_visible(category, visible);
        }
        visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_is_visible() {
        let visibility = CategoryVisibility::new();
        assert!(visibility.is_visible("brand new category"));
    }

    #[test]
    fn test_case_insensitive_keys() {
        let mut visibility = CategoryVisibility::new();
        visibility.set_visible("Technical Skill", false);
        assert!(!visibility.is_visible("technical skill"));
        assert!(!visibility.is_visible(" TECHNICAL SKILL "));
    }

    #[test]
    fn test_toggle() {
        let mut visibility = CategoryVisibility::new();
        assert!(!visibility.toggle("role"));
        assert!(!visibility.is_visible("role"));
        assert!(visibility.toggle("role"));
        assert!(visibility.is_visible("role"));
    }

    #[test]
    fn test_empty_category_maps_to_other() {
        let mut visibility = CategoryVisibility::new();
        visibility.set_visible("other", false);
        assert!(!visibility.is_visible(""));
    }

    #[test]
    fn test_hidden_and_show_all() {
        let mut visibility: CategoryVisibility =
            [("role", false), ("domain", true), ("Other", false)].into_iter().collect();
        assert_eq!(visibility.hidden(), vec!["other", "role"]);

        visibility.show_all();
        assert!(visibility.hidden().is_empty());
        assert!(visibility.is_visible("role"));
    }

    #[test]
    fn test_deserialize_from_map() {
        let visibility: CategoryVisibility =
            serde_json::from_str(r#"{"Soft Skill": false, "role": true}"#).unwrap();
        assert!(!visibility.is_visible("soft skill"));
        assert!(visibility.is_visible("role"));
    }
}
