//! HighlightCortex: WASM Facade for the Highlight Engine
//!
//! Owns everything the frontend would otherwise keep as component state:
//! the categorized keyword set, category visibility, the view mode, and a
//! memo of the last view. The engine call underneath stays pure.
//!
//! Designed for WASM with a single cross-boundary call per render.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use super::change::{fingerprint, RenderMemo};
use super::config::HighlightConfig;
use super::engine::{HighlightEngine, HighlightResult, HighlightStats};
use super::error::{HighlightError, SkippedTerm};
use super::types::{KeywordRecord, Token};
use super::visibility::CategoryVisibility;
use crate::categorize::{Categorize, ExtractedKeyword, LexiconCategorizer};
use crate::render::{build_legend, CategoryPalette, LegendEntry, StyleSpec};

// =============================================================================
// Types
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Keywords annotated
    #[default]
    Highlighted,
    /// Text passed through untouched
    Original,
}

impl ViewMode {
    pub fn parse(mode: &str) -> Option<Self> {
        match mode.trim().to_lowercase().as_str() {
            "highlighted" => Some(ViewMode::Highlighted),
            "original" => Some(ViewMode::Original),
            _ => None,
        }
    }
}

/// A token plus what the renderer needs to draw it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedToken {
    #[serde(flatten)]
    pub token: Token,
    /// Present on annotated tokens only
    pub style: Option<StyleSpec>,
    /// Display label for the tooltip
    pub label: Option<String>,
}

/// Everything one render needs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighlightView {
    pub tokens: Vec<RenderedToken>,
    pub legend: Vec<LegendEntry>,
    pub stats: HighlightStats,
    pub skipped: Vec<SkippedTerm>,
    /// Input fingerprint as hex string (u64 would overflow JS Number.MAX_SAFE_INTEGER)
    pub content_hash: String,
    pub was_skipped: bool,
}

// =============================================================================
// HighlightCortex
// =============================================================================

#[wasm_bindgen]
pub struct HighlightCortex {
    engine: HighlightEngine,
    categorizer: LexiconCategorizer,
    palette: CategoryPalette,

    // Inputs
    keywords: Vec<KeywordRecord>,
    visibility: CategoryVisibility,
    mode: ViewMode,

    memo: RenderMemo<HighlightView>,
}

#[wasm_bindgen]
impl HighlightCortex {
    #[wasm_bindgen(constructor)]
    pub fn js_new() -> Result<HighlightCortex, JsValue> {
        Self::new().map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Categorize and store keywords (JS binding)
    ///
    /// keywords should be an array of { keyword|term, frequency|weight, category?, original_term? }
    #[wasm_bindgen(js_name = setKeywords)]
    pub fn js_set_keywords(&mut self, keywords: JsValue) -> Result<(), JsValue> {
        let keywords: Vec<ExtractedKeyword> = serde_wasm_bindgen::from_value(keywords)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse keywords: {}", e)))?;
        self.set_keywords(keywords);
        Ok(())
    }

    #[wasm_bindgen(js_name = keywordCount)]
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Flip a category, returning its new visibility
    #[wasm_bindgen(js_name = toggleCategory)]
    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.visibility.toggle(category)
    }

    #[wasm_bindgen(js_name = setCategoryVisible)]
    pub fn set_category_visible(&mut self, category: &str, visible: bool) {
        self.visibility.set_visible(category, visible);
    }

    #[wasm_bindgen(js_name = isCategoryVisible)]
    pub fn is_category_visible(&self, category: &str) -> bool {
        self.visibility.is_visible(category)
    }

    #[wasm_bindgen(js_name = showAllCategories)]
    pub fn show_all_categories(&mut self) {
        self.visibility.show_all();
    }

    /// "highlighted" or "original"
    #[wasm_bindgen(js_name = setViewMode)]
    pub fn js_set_view_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = ViewMode::parse(mode)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown view mode: {}", mode)))?;
        self.set_view_mode(mode);
        Ok(())
    }

    /// Replace engine limits from a JSON string
    #[wasm_bindgen(js_name = configure)]
    pub fn js_configure(&mut self, config_json: &str) -> Result<(), JsValue> {
        let config = HighlightConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.configure(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Highlight text into a renderable view (JS binding)
    #[wasm_bindgen(js_name = highlight)]
    pub fn js_highlight(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let view = self
            .highlight(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&view)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Legend entries for the current keyword set (JS binding)
    #[wasm_bindgen(js_name = legend)]
    pub fn js_legend(&self) -> JsValue {
        match serde_wasm_bindgen::to_value(&self.legend()) {
            Ok(v) => v,
            Err(e) => {
                web_sys::console::error_1(&format!("[HighlightCortex] Serialization failed: {:?}", e).into());
                JsValue::NULL
            }
        }
    }

    /// Percentage of highlight calls answered from the memo
    #[wasm_bindgen(js_name = skipRate)]
    pub fn skip_rate(&self) -> f64 {
        self.memo.hit_rate()
    }

    /// Drop the memo
    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&mut self) {
        self.memo.clear();
    }
}

impl HighlightCortex {
    pub fn new() -> Result<Self, HighlightError> {
        Ok(Self {
            engine: HighlightEngine::default(),
            categorizer: LexiconCategorizer::new()?,
            palette: CategoryPalette::standard(),
            keywords: Vec::new(),
            visibility: CategoryVisibility::new(),
            mode: ViewMode::default(),
            memo: RenderMemo::new(),
        })
    }

    /// Categorize freshly extracted keywords and make them current
    pub fn set_keywords(&mut self, keywords: Vec<ExtractedKeyword>) {
        self.keywords = self.categorizer.categorize(keywords);
    }

    /// Install keywords that were categorized elsewhere
    pub fn set_records(&mut self, records: Vec<KeywordRecord>) {
        self.keywords = records;
    }

    pub fn keywords(&self) -> &[KeywordRecord] {
        &self.keywords
    }

    pub fn visibility(&self) -> &CategoryVisibility {
        &self.visibility
    }

    pub fn visibility_mut(&mut self) -> &mut CategoryVisibility {
        &mut self.visibility
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_palette(&mut self, palette: CategoryPalette) {
        self.palette = palette;
        self.reset();
    }

    /// Swap engine limits. Clears the memo since limits change the output.
    pub fn configure(&mut self, config: HighlightConfig) -> Result<(), HighlightError> {
        self.engine = HighlightEngine::new(config)?;
        self.reset();
        Ok(())
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        build_legend(&self.keywords, &self.visibility, &self.palette)
    }

    /// Highlight `text` with the current keywords, visibility and mode.
    /// Original mode carries no legend.
    ///
    /// Identical inputs return the memoized view with `was_skipped = true`.
    pub fn highlight(&mut self, text: &str) -> Result<HighlightView, HighlightError> {
        let content_hash = fingerprint(text, &self.keywords, &self.visibility, self.mode);
        if let Some(mut view) = self.memo.lookup(content_hash) {
            view.was_skipped = true;
            return Ok(view);
        }

        let result = match self.mode {
            ViewMode::Highlighted => self.engine.run(text, &self.keywords, &self.visibility)?,
            ViewMode::Original => HighlightResult {
                tokens: if text.is_empty() {
                    Vec::new()
                } else {
                    vec![Token::literal(text)]
                },
                ..HighlightResult::default()
            },
        };

        let view = HighlightView {
            tokens: self.render_tokens(result.tokens),
            legend: match self.mode {
                ViewMode::Highlighted => self.legend(),
                ViewMode::Original => Vec::new(),
            },
            stats: result.stats,
            skipped: result.skipped,
            content_hash: format!("{:x}", content_hash),
            was_skipped: false,
        };

        self.memo.store(content_hash, view.clone());
        Ok(view)
    }

    fn render_tokens(&self, tokens: Vec<Token>) -> Vec<RenderedToken> {
        tokens
            .into_iter()
            .map(|token| {
                let (style, label) = match token.category() {
                    Some(category) => (
                        Some(self.palette.style(category).clone()),
                        Some(self.palette.label(category)),
                    ),
                    None => (None, None),
                };
                RenderedToken { token, style, label }
            })
            .collect()
    }
}
