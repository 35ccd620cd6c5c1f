//! Core data structures for the highlight pipeline
//!
//! All three types are built and thrown away within a single `highlight()` call.

use serde::{Deserialize, Serialize};

/// Category assigned when a record carries none
pub const DEFAULT_CATEGORY: &str = "other";

fn default_weight() -> u32 {
    1
}

/// Canonical form of a category used for identity comparisons
/// (visibility, palette and legend lookups).
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

// =============================================================================
// KeywordRecord
// =============================================================================

/// An input keyword with its category and relevance weight.
///
/// Deserializes from both the extractor shape (`keyword`, `frequency`) and
/// the canonical one (`term`, `weight`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordRecord {
    #[serde(alias = "keyword")]
    pub term: String,
    /// Empty means "not categorized"; treated as `other`
    #[serde(default)]
    pub category: String,
    /// Rendering metadata only, never used for match precedence
    #[serde(alias = "frequency", default = "default_weight")]
    pub weight: u32,
}

impl KeywordRecord {
    pub fn new(term: &str, category: &str, weight: u32) -> Self {
        Self {
            term: term.to_string(),
            category: category.to_string(),
            weight,
        }
    }

    /// Category with the `other` fallback applied, original casing kept
    pub fn effective_category(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            DEFAULT_CATEGORY
        } else {
            trimmed
        }
    }
}

// =============================================================================
// MatchSpan
// =============================================================================

/// A located keyword occurrence.
///
/// `start..end` are byte offsets into the original text (end exclusive),
/// always on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    /// Substring of the source text, in its original casing
    pub term: String,
    pub category: String,
    pub weight: u32,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &MatchSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

// =============================================================================
// Token
// =============================================================================

/// Output unit of the assembled sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Passthrough text
    Literal { text: String },
    /// A keyword run
    Annotated {
        text: String,
        category: String,
        weight: u32,
    },
}

impl Token {
    pub fn literal(text: &str) -> Self {
        Token::Literal {
            text: text.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Token::Literal { text } | Token::Annotated { text, .. } => text,
        }
    }

    pub fn is_annotated(&self) -> bool {
        matches!(self, Token::Annotated { .. })
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Token::Annotated { category, .. } => Some(category),
            Token::Literal { .. } => None,
        }
    }
}

/// Concatenate token texts (the inverse of assembly)
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
