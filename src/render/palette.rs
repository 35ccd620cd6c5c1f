//! CategoryPalette: category -> style lookup
//!
//! A total function: every category resolves to a style. Unknown categories
//! get the mandatory default entry, which looks the same as `other`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::highlight::types::normalize_category;

/// CSS classes for a highlighted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub background: String,
    pub foreground: String,
    pub border: String,
}

impl StyleSpec {
    pub fn new(background: &str, foreground: &str, border: &str) -> Self {
        Self {
            background: background.to_string(),
            foreground: foreground.to_string(),
            border: border.to_string(),
        }
    }
}

/// (category, label, background, border)
const STANDARD_CATEGORIES: &[(&str, &str, &str, &str)] = &[
    ("technical skill", "Programming Languages", "bg-blue-600", "border-blue-400"),
    ("soft skill", "Skills", "bg-green-600", "border-green-400"),
    ("role", "Roles", "bg-purple-600", "border-purple-400"),
    ("qualification", "Methodologies", "bg-yellow-600", "border-yellow-400"),
    ("domain", "Domains", "bg-teal-600", "border-teal-400"),
    ("experience", "Frameworks", "bg-orange-600", "border-orange-400"),
    ("related term", "Tools", "bg-pink-600", "border-pink-400"),
    ("other", "Other", "bg-gray-600", "border-gray-400"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPalette {
    styles: HashMap<String, StyleSpec>,
    labels: HashMap<String, String>,
    default: StyleSpec,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::standard()
    }
}

impl CategoryPalette {
    /// Empty palette; everything resolves to `default`
    pub fn new(default: StyleSpec) -> Self {
        Self {
            styles: HashMap::new(),
            labels: HashMap::new(),
            default,
        }
    }

    /// The eight canonical keyword categories
    pub fn standard() -> Self {
        let mut palette = Self::new(StyleSpec::new("bg-gray-600", "text-white", "border-gray-400"));
        for &(category, label, background, border) in STANDARD_CATEGORIES {
            palette.insert(category, label, StyleSpec::new(background, "text-white", border));
        }
        palette
    }

    pub fn insert(&mut self, category: &str, label: &str, style: StyleSpec) {
        let key = normalize_category(category);
        self.labels.insert(key.clone(), label.to_string());
        self.styles.insert(key, style);
    }

    pub fn style(&self, category: &str) -> &StyleSpec {
        self.styles
            .get(&normalize_category(category))
            .unwrap_or(&self.default)
    }

    /// Display label, falling back to the category itself
    pub fn label(&self, category: &str) -> String {
        match self.labels.get(&normalize_category(category)) {
            Some(label) => label.clone(),
            None => category.trim().to_string(),
        }
    }

    pub fn default_style(&self) -> &StyleSpec {
        &self.default
    }

    pub fn contains(&self, category: &str) -> bool {
        self.styles.contains_key(&normalize_category(category))
    }
}
