//! Error types for the highlight engine
//!
//! Only configuration-level problems are errors. A keyword that cannot be
//! searched is reported as a [`SkippedTerm`] and highlighting continues.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightError {
    TextTooLong { len: usize, max: usize },
    TooManyKeywords { count: usize, max: usize },
    InvalidConfig(String),
    Categorizer(String),
}

impl std::fmt::Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighlightError::TextTooLong { len, max } => {
                write!(f, "Text too long: {} bytes exceeds limit of {}", len, max)
            }
            HighlightError::TooManyKeywords { count, max } => {
                write!(f, "Too many keywords: {} exceeds limit of {}", count, max)
            }
            HighlightError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            HighlightError::Categorizer(msg) => write!(f, "Categorizer error: {}", msg),
        }
    }
}

impl std::error::Error for HighlightError {}

/// A keyword dropped from a highlight pass (non-fatal)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedTerm {
    pub term: String,
    pub reason: String,
}
