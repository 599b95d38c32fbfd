//! NexaDocs: NexaLang documentation site scripts
//!
//! A Rust/WASM implementation of the docs site's client-side behavior.
//!
//! # Architecture
//!
//! ## Highlighting
//! - `highlight/rules.rs` - Ordered regex classification rules
//! - `highlight/spans.rs` - SpanList: contiguous classified spans, first claim wins
//! - `highlight/render.rs` - HTML escaping and span markup
//! - `highlight/page.rs` - Passes over code blocks, skipping processed ones
//! - `schedule.rs` - Lifecycle: DOMContentLoaded / load / bounded retries
//!
//! ## Navigation
//! - `nav/links.rs` - Sidebar links, exactly one active
//! - `nav/sections.rs` - Section boxes and the scroll probe
//! - `nav/mod.rs` - Navigator: click and scroll decisions
//!
//! ## Browser
//! - `dom/` - DocsSite: web-sys listeners wiring the above to the page
//! - `config.rs` - SiteConfig: selectors, offsets, retry delays, vocabulary extras
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { DocsSite, Highlighter } from 'nexadocs';
//!
//! await init();
//!
//! // Whole site: highlight `pre code`, smooth anchors, scroll spy
//! new DocsSite().install();
//!
//! // Or just the highlighter
//! const hl = new Highlighter();
//! console.log(hl.highlight('fn main() { print("hi"); }'));
//! console.log(hl.getStats('let x = 1 # one'));
//! ```

pub mod config;
mod console;
pub mod dom;
pub mod error;
pub mod highlight;
pub mod nav;
pub mod schedule;

pub use config::SiteConfig;
pub use dom::DocsSite;
pub use error::DocsError;
pub use highlight::{Category, Highlighter, Token, Vocabulary};
pub use nav::Navigator;

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
    format!("nexadocs v{}", env!("CARGO_PKG_VERSION"))
}
