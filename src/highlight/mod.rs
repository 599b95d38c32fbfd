//! Highlighter - NexaLang code sample highlighting
//!
//! Turns raw source text into HTML with one `<span class="...">` per
//! classified token. Classification is an ordered list of regex rules applied
//! to a span list (see `rules`), so a character is classified at most once and
//! markup only appears at render time.
//!
//! # Usage (JavaScript)
//! ```javascript,ignore
//! import init, { Highlighter } from 'nexadocs';
//!
//! await init();
//! const hl = new Highlighter();
//! block.innerHTML = hl.highlight(block.textContent);
//! ```

pub mod page;
pub mod render;
pub mod rules;
pub mod spans;
pub mod token;
pub mod vocab;

#[cfg(test)]
mod tests;

pub use page::{highlight_blocks, CodeBlock, PassReport};
pub use render::{escape_html, render_html, visible_text};
pub use token::{Category, Token};
pub use vocab::Vocabulary;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::DocsError;
use rules::RuleSet;

// ==================== TYPE DEFINITIONS ====================

/// Token counts per category for one input
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct HighlightStats {
    pub comments: usize,
    pub strings: usize,
    pub numbers: usize,
    pub keywords: usize,
    pub types: usize,
    pub functions: usize,
    pub operators: usize,
    pub plain: usize,
    pub text_length: usize,
}

// ==================== MAIN IMPLEMENTATION ====================

#[wasm_bindgen]
pub struct Highlighter {
    vocab: Vocabulary,
    rules: RuleSet,
}

impl Highlighter {
    /// Compile the rule set for `vocab`
    pub fn new(vocab: &Vocabulary) -> Result<Self, DocsError> {
        Ok(Self {
            vocab: vocab.clone(),
            rules: RuleSet::compile(vocab)?,
        })
    }

    pub fn nexalang() -> Result<Self, DocsError> {
        Self::new(&Vocabulary::nexalang())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Contiguous tokens covering all of `text`, in order
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.rules.apply(text, &self.vocab).into_tokens()
    }

    /// Rendered HTML for `text`
    pub fn highlight(&self, text: &str) -> String {
        render_html(text, &self.tokenize(text))
    }

    pub fn stats(&self, text: &str) -> HighlightStats {
        let mut stats = HighlightStats {
            text_length: text.chars().count(),
            ..HighlightStats::default()
        };
        for token in self.tokenize(text) {
            let slot = match token.category {
                Category::Comment => &mut stats.comments,
                Category::String => &mut stats.strings,
                Category::Number => &mut stats.numbers,
                Category::Keyword => &mut stats.keywords,
                Category::Type => &mut stats.types,
                Category::Function => &mut stats.functions,
                Category::Operator => &mut stats.operators,
                Category::Plain => &mut stats.plain,
            };
            *slot += 1;
        }
        stats
    }
}

// ==================== WASM BINDINGS ====================

#[wasm_bindgen]
impl Highlighter {
    /// Create a highlighter with the stock NexaLang vocabulary
    #[wasm_bindgen(constructor)]
    pub fn js_new() -> Result<Highlighter, JsValue> {
        Self::nexalang().map_err(JsValue::from)
    }

    /// Highlight source text, returning HTML
    #[wasm_bindgen(js_name = highlight)]
    pub fn js_highlight(&self, text: &str) -> String {
        self.highlight(text)
    }

    /// Array of `{ category, start, end }` (byte offsets)
    #[wasm_bindgen(js_name = tokenize)]
    pub fn js_tokenize(&self, text: &str) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.tokenize(text))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Per-category token counts
    #[wasm_bindgen(js_name = getStats)]
    pub fn js_get_stats(&self, text: &str) -> JsValue {
        serde_wasm_bindgen::to_value(&self.stats(text)).unwrap_or(JsValue::NULL)
    }
}
