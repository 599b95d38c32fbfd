//! Site configuration
//!
//! Every field has a default matching the stock NexaLang docs markup, so an
//! empty object (or `undefined` from JS) is a valid configuration.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::DocsError;
use crate::highlight::Vocabulary;
use crate::nav::DEFAULT_SCROLL_OFFSET;
use crate::schedule::{RetrySchedule, DEFAULT_RETRY_DELAYS_MS};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Code blocks to highlight
    #[serde(default = "default_code_selector")]
    pub code_selector: String,
    /// Same-page anchors that get smooth scrolling
    #[serde(default = "default_anchor_selector")]
    pub anchor_selector: String,
    /// Links whose active class tracks the current section
    #[serde(default = "default_sidebar_link_selector")]
    pub sidebar_link_selector: String,
    #[serde(default = "default_section_selector")]
    pub section_selector: String,
    #[serde(default = "default_active_class")]
    pub active_class: String,
    /// Attribute set on a code block once highlighted
    #[serde(default = "default_processed_attribute")]
    pub processed_attribute: String,
    /// Pixels added to `scrollY` before the section lookup
    #[serde(default = "default_scroll_offset")]
    pub scroll_offset: f64,
    /// Highlight retries, in ms after `load`
    #[serde(default = "default_retry_delays")]
    pub retry_delays_ms: Vec<u32>,
    #[serde(default)]
    pub extra_keywords: Vec<String>,
    #[serde(default)]
    pub extra_types: Vec<String>,
    #[serde(default)]
    pub extra_builtins: Vec<String>,
    /// Log each pass and navigation decision to the console
    #[serde(default)]
    pub verbose: bool,
}

fn default_code_selector() -> String { "pre code".to_string() }
fn default_anchor_selector() -> String { "a[href^=\"#\"]".to_string() }
fn default_sidebar_link_selector() -> String { ".sidebar nav a".to_string() }
fn default_section_selector() -> String { "section[id]".to_string() }
fn default_active_class() -> String { "active".to_string() }
fn default_processed_attribute() -> String { "data-highlighted".to_string() }
fn default_scroll_offset() -> f64 { DEFAULT_SCROLL_OFFSET }
fn default_retry_delays() -> Vec<u32> { DEFAULT_RETRY_DELAYS_MS.to_vec() }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            code_selector: default_code_selector(),
            anchor_selector: default_anchor_selector(),
            sidebar_link_selector: default_sidebar_link_selector(),
            section_selector: default_section_selector(),
            active_class: default_active_class(),
            processed_attribute: default_processed_attribute(),
            scroll_offset: default_scroll_offset(),
            retry_delays_ms: default_retry_delays(),
            extra_keywords: Vec::new(),
            extra_types: Vec::new(),
            extra_builtins: Vec::new(),
            verbose: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, DocsError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| DocsError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    /// Accepts `null`/`undefined` as "all defaults"
    pub fn from_js(value: JsValue) -> Result<Self, DocsError> {
        if value.is_null() || value.is_undefined() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_wasm_bindgen::from_value(value)
            .map_err(|e| DocsError::InvalidConfig(e.to_string()))?;
        config.validated()
    }

    fn validated(self) -> Result<Self, DocsError> {
        if !self.scroll_offset.is_finite() {
            return Err(DocsError::InvalidConfig("scroll_offset must be finite".to_string()));
        }
        for (name, value) in [
            ("code_selector", &self.code_selector),
            ("anchor_selector", &self.anchor_selector),
            ("sidebar_link_selector", &self.sidebar_link_selector),
            ("section_selector", &self.section_selector),
            ("active_class", &self.active_class),
            ("processed_attribute", &self.processed_attribute),
        ] {
            if value.trim().is_empty() {
                return Err(DocsError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        Ok(self)
    }

    /// Stock vocabulary plus the configured extras
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::nexalang()
            .with_keywords(self.extra_keywords.iter().cloned())
            .with_types(self.extra_types.iter().cloned())
            .with_builtins(self.extra_builtins.iter().cloned())
    }

    pub fn retry_schedule(&self) -> RetrySchedule {
        RetrySchedule::new(self.retry_delays_ms.clone())
    }
}
