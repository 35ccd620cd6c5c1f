//! Configuration types and defaults for the highlight engine

use serde::{Deserialize, Serialize};

use super::error::HighlightError;

// =============================================================================
// Defaults
// =============================================================================

/// Default upper bound on text length (bytes)
pub const DEFAULT_MAX_TEXT_LEN: usize = 1_000_000;
/// Default upper bound on keyword records per call
pub const DEFAULT_MAX_KEYWORDS: usize = 5_000;
/// Default compiled size limit for a single term's pattern
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

// =============================================================================
// HighlightConfig
// =============================================================================

/// Limits applied by [`HighlightEngine`](super::engine::HighlightEngine).
///
/// Work per call is `O(terms × text length)`, so oversized inputs are
/// rejected up front rather than degrading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Maximum text length in bytes. `None` = unlimited
    pub max_text_len: Option<usize>,
    /// Maximum number of keyword records. `None` = unlimited
    pub max_keywords: Option<usize>,
    /// Size limit handed to the regex compiler for each term
    pub regex_size_limit: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_text_len: Some(DEFAULT_MAX_TEXT_LEN),
            max_keywords: Some(DEFAULT_MAX_KEYWORDS),
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}

impl HighlightConfig {
    /// No input limits. Used by the bare `highlight()` function
    pub fn unbounded() -> Self {
        Self {
            max_text_len: None,
            max_keywords: None,
            ..Self::default()
        }
    }

    /// Parse a config sent by the frontend as JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, HighlightError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HighlightError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HighlightError> {
        if self.regex_size_limit == 0 {
            return Err(HighlightError::InvalidConfig(
                "regex_size_limit must be > 0".to_string(),
            ));
        }
        if self.max_text_len == Some(0) {
            return Err(HighlightError::InvalidConfig(
                "max_text_len must be > 0".to_string(),
            ));
        }
        if self.max_keywords == Some(0) {
            return Err(HighlightError::InvalidConfig(
                "max_keywords must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Check a call's inputs against the limits
    pub fn check_input(&self, text_len: usize, keyword_count: usize) -> Result<(), HighlightError> {
        if let Some(max) = self.max_text_len {
            if text_len > max {
                return Err(HighlightError::TextTooLong { len: text_len, max });
            }
        }
        if let Some(max) = self.max_keywords {
            if keyword_count > max {
                return Err(HighlightError::TooManyKeywords {
                    count: keyword_count,
                    max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = HighlightConfig::default();
        assert_eq!(config.max_text_len, Some(DEFAULT_MAX_TEXT_LEN));
        assert_eq!(config.max_keywords, Some(DEFAULT_MAX_KEYWORDS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unbounded_accepts_anything() {
        let config = HighlightConfig::unbounded();
        assert!(config.check_input(usize::MAX, usize::MAX).is_ok());
    }

    #[test]
    fn test_check_input_limits() {
        let config = HighlightConfig {
            max_text_len: Some(10),
            max_keywords: Some(2),
            ..HighlightConfig::default()
        };
        assert!(config.check_input(10, 2).is_ok());
        assert_eq!(
            config.check_input(11, 2),
            Err(HighlightError::TextTooLong { len: 11, max: 10 })
        );
        assert_eq!(
            config.check_input(5, 3),
            Err(HighlightError::TooManyKeywords { count: 3, max: 2 })
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config = HighlightConfig::from_json(r#"{"max_keywords": 50}"#).unwrap();
        assert_eq!(config.max_keywords, Some(50));
        assert_eq!(config.max_text_len, Some(DEFAULT_MAX_TEXT_LEN));
        assert_eq!(config.regex_size_limit, DEFAULT_REGEX_SIZE_LIMIT);
    }

    #[test]
    fn test_from_json_null_disables_limit() {
        let config = HighlightConfig::from_json(r#"{"max_text_len": null}"#).unwrap();
        assert_eq!(config.max_text_len, None);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            HighlightConfig::from_json(r#"{"regex_size_limit": 0}"#),
            Err(HighlightError::InvalidConfig(_))
        ));
        assert!(matches!(
            HighlightConfig::from_json("not json"),
            Err(HighlightError::InvalidConfig(_))
        ));
    }
}
