//! HighlightEngine: text + keywords + visibility -> tokens
//!
//! One pass, left to right:
//! 1. KeywordIndex - normalize, de-duplicate, order longest first
//! 2. SpanLocator - whole-word candidates per term, on the original text
//! 3. resolve - drop hidden categories, then longest term claims its region
//! 4. assemble - Literal gaps + Annotated winners
//!
//! Nothing is kept between calls. Callers that re-highlight on every toggle
//! should memoize on the inputs (see `HighlightCortex`).

use serde::{Deserialize, Serialize};

use super::assembler::assemble;
use super::config::HighlightConfig;
use super::error::{HighlightError, SkippedTerm};
use super::index::KeywordIndex;
use super::locator::SpanLocator;
use super::resolver::{resolve, Candidate};
use super::types::{KeywordRecord, MatchSpan, Token};
use super::visibility::CategoryVisibility;

// =============================================================================
// Types
// =============================================================================

/// Timing per phase, in microseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightTimings {
    pub index_us: u64,
    pub locate_us: u64,
    pub resolve_us: u64,
    pub assemble_us: u64,
    pub total_us: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightStats {
    pub terms_indexed: usize,
    pub candidates_found: usize,
    pub hidden_suppressed: usize,
    pub spans_accepted: usize,
    pub timings: HighlightTimings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightResult {
    pub tokens: Vec<Token>,
    /// Winning spans sorted by start
    pub spans: Vec<MatchSpan>,
    pub skipped: Vec<SkippedTerm>,
    pub stats: HighlightStats,
}

// =============================================================================
// HighlightEngine
// =============================================================================

#[derive(Debug, Clone)]
pub struct HighlightEngine {
    config: HighlightConfig,
    locator: SpanLocator,
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::from_valid_config(HighlightConfig::default())
    }
}

impl HighlightEngine {
    pub fn new(config: HighlightConfig) -> Result<Self, HighlightError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Engine without input limits
    pub fn unbounded() -> Self {
        Self::from_valid_config(HighlightConfig::unbounded())
    }

    fn from_valid_config(config: HighlightConfig) -> Self {
        let locator = SpanLocator::new(config.regex_size_limit);
        Self { config, locator }
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    /// Highlight with limits enforced. Oversized input is rejected before any scanning.
    pub fn run(
        &self,
        text: &str,
        keywords: &[KeywordRecord],
        visibility: &CategoryVisibility,
    ) -> Result<HighlightResult, HighlightError> {
        self.config.check_input(text.len(), keywords.len())?;
        Ok(self.run_unchecked(text, keywords, visibility))
    }

    fn run_unchecked(
        &self,
        text: &str,
        keywords: &[KeywordRecord],
        visibility: &CategoryVisibility,
    ) -> HighlightResult {
        let overall_start = instant::Instant::now();
        let mut result = HighlightResult::default();

        if text.is_empty() {
            result.stats.timings.total_us = overall_start.elapsed().as_micros() as u64;
            return result;
        }

        // Phase 1: Index
        let index_start = instant::Instant::now();
        let index = KeywordIndex::build(keywords);
        result.stats.terms_indexed = index.len();
        result.stats.timings.index_us = index_start.elapsed().as_micros() as u64;

        // Phase 2: Locate (every term against the original text)
        let locate_start = instant::Instant::now();
        let mut candidates: Vec<Candidate> = Vec::new();
        for entry in index.terms() {
            match self.locator.locate(text, entry) {
                Ok(spans) => {
                    candidates.extend(spans.into_iter().map(|span| Candidate {
                        span,
                        term_len: entry.char_len,
                        rank: entry.rank,
                    }));
                }
                Err(e) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(
                        &format!("[HighlightEngine] Skipping keyword '{}': {}", entry.term, e).into(),
                    );
                    result.skipped.push(SkippedTerm {
                        term: entry.term.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        result.stats.candidates_found = candidates.len();
        result.stats.timings.locate_us = locate_start.elapsed().as_micros() as u64;

        // Phase 3: Resolve overlaps
        let resolve_start = instant::Instant::now();
        let resolution = resolve(candidates, visibility);
        result.stats.hidden_suppressed = resolution.hidden;
        result.stats.spans_accepted = resolution.accepted.len();
        result.stats.timings.resolve_us = resolve_start.elapsed().as_micros() as u64;

        // Phase 4: Assemble
        let assemble_start = instant::Instant::now();
        let mut spans = resolution.accepted;
        result.tokens = assemble(text, &mut spans);
        result.spans = spans;
        result.stats.timings.assemble_us = assemble_start.elapsed().as_micros() as u64;

        result.stats.timings.total_us = overall_start.elapsed().as_micros() as u64;
        result
    }
}

/// Highlight `text` with `keywords`, honoring `visibility`.
///
/// Pure and unbounded. Empty text gives an empty vector; otherwise the
/// token texts always concatenate back to `text`.
pub fn highlight(
    text: &str,
    keywords: &[KeywordRecord],
    visibility: &CategoryVisibility,
) -> Vec<Token> {
    HighlightEngine::unbounded()
        .run_unchecked(text, keywords, visibility)
        .tokens
}
