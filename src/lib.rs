//! HighlightCore: Keyword Highlighting Engine
//!
//! A Rust/WASM implementation of the job-description keyword highlighter.
//!
//! # Architecture
//!
//! ## Highlight Pipeline
//! - `index.rs` - KeywordIndex: de-duplicated, longest-first term set
//! - `locator.rs` - SpanLocator: case-insensitive whole-word matching per term
//! - `resolver.rs` - Overlap resolution (longest keyword wins, hidden categories never block)
//! - `assembler.rs` - Lossless Literal/Annotated token assembly
//! - `visibility.rs` - CategoryVisibility: caller-owned category toggles
//! - `engine.rs` - `highlight()` + HighlightEngine (limits, stats, diagnostics)
//! - `cortex.rs` - HighlightCortex: WASM facade with memoized re-highlighting
//!
//! ## Collaborators
//! - `categorize` - Keyword categorizer (lexicon heuristics)
//! - `render` - Category palette and legend
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { HighlightCortex } from 'highlightcore';
//!
//! await init();
//!
//! const cortex = new HighlightCortex();
//! cortex.setKeywords([
//!   { keyword: 'machine learning', frequency: 4 },
//!   { keyword: 'Python', frequency: 3 },
//! ]);
//!
//! const view = cortex.highlight("Senior machine learning engineer, Python");
//! console.log(view.tokens);   // Literal + Annotated runs, styled
//! console.log(view.legend);   // One entry per category
//!
//! cortex.toggleCategory('technical skill');
//! cortex.highlight("Senior machine learning engineer, Python");
//! ```
//!
//! # Usage (Rust)
//! ```
//! use highlightcore::{highlight, CategoryVisibility, KeywordRecord};
//!
//! let keywords = vec![KeywordRecord::new("python", "technical skill", 3)];
//! let tokens = highlight("Python and PYTHON", &keywords, &CategoryVisibility::new());
//!
//! let annotated: Vec<&str> = tokens
//!     .iter()
//!     .filter(|t| t.is_annotated())
//!     .map(|t| t.text())
//!     .collect();
//! assert_eq!(annotated, vec!["Python", "PYTHON"]);
//! ```

pub mod highlight;
pub mod categorize;
pub mod render;

// Public exports - Highlight pipeline
pub use highlight::*;

// Public exports - Collaborators
pub use categorize::*;
pub use render::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("highlightcore v{}", env!("CARGO_PKG_VERSION"))
}
