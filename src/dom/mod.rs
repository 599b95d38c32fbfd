//! DocsSite - browser glue for the highlighter and navigator
//!
//! Binds page events to the target-independent logic:
//! - `DOMContentLoaded` / `load` / scheduled retries → highlight pass
//! - anchor `click` → smooth scroll + active link
//! - window `scroll` → active link for the current section
//!
//! # Usage (JavaScript)
//! ```javascript,ignore
//! import init, { DocsSite } from 'nexadocs';
//!
//! await init();
//! const site = new DocsSite({ scroll_offset: 200 });
//! site.install();
//! ```

pub mod blocks;
pub mod links;

pub use blocks::DomCodeBlock;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::SiteConfig;
use crate::console;
use crate::error::DocsError;
use crate::highlight::{highlight_blocks, Highlighter, PassReport};
use crate::nav::Navigator;
use crate::schedule::{Lifecycle, PageEvent};

// =============================================================================
// Shared State
// =============================================================================

/// State shared by every listener of one installed site
struct SiteState {
    config: SiteConfig,
    highlighter: Highlighter,
    navigator: Navigator,
    lifecycle: RefCell<Lifecycle>,
}

impl SiteState {
    fn debug(&self, msg: &str) {
        if self.config.verbose {
            console::log(msg);
        }
    }
}

// =============================================================================
// DocsSite
// =============================================================================

#[wasm_bindgen]
pub struct DocsSite {
    state: Rc<SiteState>,
}

#[wasm_bindgen]
impl DocsSite {
    /// Create a site from an optional config object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<DocsSite, JsValue> {
        let config = SiteConfig::from_js(config)?;
        let highlighter = Highlighter::new(&config.vocabulary())?;
        let state = SiteState {
            navigator: Navigator::new(config.scroll_offset),
            lifecycle: RefCell::new(Lifecycle::new(config.retry_schedule())),
            highlighter,
            config,
        };
        Ok(Self { state: Rc::new(state) })
    }

    /// Bind all page listeners. Highlights immediately if the document is
    /// already parsed.
    #[wasm_bindgen]
    pub fn install(&self) -> Result<(), JsValue> {
        install(&self.state).map_err(JsValue::from)
    }

    /// Bind click handlers to the anchors currently in the page, returning how
    /// many were bound. `install` does this once the document is parsed.
    #[wasm_bindgen(js_name = bindAnchors)]
    pub fn bind_anchors(&self) -> Result<u32, JsValue> {
        let bound = bind_anchors(&self.state)?;
        Ok(u32::try_from(bound).unwrap_or(u32::MAX))
    }

    /// Run one highlight pass now, returning `{ scanned, highlighted, skipped, elapsed_ms }`
    #[wasm_bindgen(js_name = highlightAll)]
    pub fn highlight_all(&self) -> Result<JsValue, JsValue> {
        let report = run_pass(&self.state)?;
        serde_wasm_bindgen::to_value(&report)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = getConfig)]
    pub fn config(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.state.config).unwrap_or(JsValue::NULL)
    }

    /// `idle`, `armed` or `exhausted`
    #[wasm_bindgen(js_name = lifecycleState)]
    pub fn lifecycle_state(&self) -> String {
        self.state.lifecycle.borrow().state_name().to_string()
    }
}

// =============================================================================
// DOM Access
// =============================================================================

fn window() -> Result<Window, DocsError> {
    web_sys::window().ok_or_else(|| DocsError::Dom("no global window".to_string()))
}

fn document() -> Result<Document, DocsError> {
    window()?
        .document()
        .ok_or_else(|| DocsError::Dom("window has no document".to_string()))
}

/// All elements matching `selector`, in document order
pub fn query_elements(document: &Document, selector: &str) -> Result<Vec<Element>, DocsError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| DocsError::dom(selector, &e))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

// =============================================================================
// Highlighting
// =============================================================================

fn run_pass(state: &SiteState) -> Result<PassReport, DocsError> {
    let document = document()?;
    let elements = query_elements(&document, &state.config.code_selector)?;
    let flag = state.config.processed_attribute.as_str();

    let report = highlight_blocks(
        &state.highlighter,
        elements.into_iter().map(|el| DomCodeBlock::new(el, flag)),
    );

    state.debug(&format!(
        "[Highlighter] pass: {} highlighted, {} skipped ({:.2}ms)",
        report.highlighted, report.skipped, report.elapsed_ms
    ));
    Ok(report)
}

fn on_page_event(state: &Rc<SiteState>, event: PageEvent) {
    let step = state.lifecycle.borrow_mut().on_event(event);

    if step.run_pass {
        if let Err(e) = run_pass(state) {
            console::error(&format!("[Highlighter] {:?} pass failed: {}", event, e));
        }
    }
    if let Some(delay) = step.next_retry_ms {
        if let Err(e) = schedule_retry(Rc::clone(state), delay) {
            console::error(&format!("[Highlighter] Could not schedule retry: {}", e));
        }
    }
}

fn schedule_retry(state: Rc<SiteState>, delay_ms: u32) -> Result<(), DocsError> {
    let callback = Closure::once_into_js(move || on_page_event(&state, PageEvent::Retry));
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), timeout)
        .map_err(|e| DocsError::dom("setTimeout", &e))?;
    Ok(())
}

// =============================================================================
// Navigation
// =============================================================================

fn handle_click(state: &SiteState, anchor: &Element, event: &Event) -> Result<(), DocsError> {
    event.prevent_default();

    let document = document()?;
    let class = state.config.active_class.as_str();
    let href = anchor.get_attribute("href").unwrap_or_default();
    let sidebar = query_elements(&document, &state.config.sidebar_link_selector)?;
    let clicked = sidebar
        .iter()
        .position(|el| js_sys::Object::is(el.as_ref(), anchor.as_ref()));

    let mut links = links::read_links(&sidebar, class);
    let outcome = state
        .navigator
        .on_click(&mut links, clicked, &href, |id| document.get_element_by_id(id).is_some());

    let Some(id) = outcome.scroll_to else {
        state.debug(&format!("[Navigator] no target for {:?}", href));
        return Ok(());
    };
    if let Some(target) = document.get_element_by_id(&id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    links::write_links(&sidebar, &links, class);
    if outcome.mark_clicked {
        links::set_active(anchor, true, class);
    }
    state.debug(&format!("[Navigator] click → #{}", id));
    Ok(())
}

fn handle_scroll(state: &SiteState) -> Result<(), DocsError> {
    let window = window()?;
    let document = document()?;
    let class = state.config.active_class.as_str();

    let scroll_y = window.scroll_y().map_err(|e| DocsError::dom("scrollY", &e))?;
    let sections = links::read_sections(&query_elements(&document, &state.config.section_selector)?);
    let sidebar = query_elements(&document, &state.config.sidebar_link_selector)?;

    let mut links = links::read_links(&sidebar, class);
    let outcome = state.navigator.on_scroll(&mut links, &sections, scroll_y);
    if outcome.changed {
        links::write_links(&sidebar, &links, class);
        state.debug(&format!("[Navigator] scroll → {:?}", outcome.section));
    }
    Ok(())
}

// =============================================================================
// Installation
// =============================================================================

fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), DocsError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| DocsError::dom(event, &e))?;
    // Listeners live for the whole page
    closure.forget();
    Ok(())
}

/// Work that needs the parsed document: the first highlight pass and the
/// anchor handlers.
fn on_ready(state: &Rc<SiteState>) {
    on_page_event(state, PageEvent::Ready);
    match bind_anchors(state) {
        Ok(count) => state.debug(&format!("[DocsSite] bound {} anchors", count)),
        Err(e) => console::error(&format!("[Navigator] Could not bind anchors: {}", e)),
    }
}

fn bind_anchors(state: &Rc<SiteState>) -> Result<usize, DocsError> {
    let anchors = query_elements(&document()?, &state.config.anchor_selector)?;
    for anchor in &anchors {
        let s = Rc::clone(state);
        let el = anchor.clone();
        listen(anchor, "click", move |event| {
            if let Err(e) = handle_click(&s, &el, &event) {
                console::error(&format!("[Navigator] click failed: {}", e));
            }
        })?;
    }
    Ok(anchors.len())
}

fn install(state: &Rc<SiteState>) -> Result<(), DocsError> {
    let window = window()?;
    let document = document()?;

    // `ready_state` is "loading", "interactive" or "complete"
    let ready_state = document.ready_state();
    if ready_state == "loading" {
        let s = Rc::clone(state);
        listen(&document, "DOMContentLoaded", move |_| on_ready(&s))?;
    } else {
        on_ready(state);
    }
    if ready_state == "complete" {
        on_page_event(state, PageEvent::Loaded);
    } else {
        let s = Rc::clone(state);
        listen(&window, "load", move |_| on_page_event(&s, PageEvent::Loaded))?;
    }

    // Scroll spy
    let s = Rc::clone(state);
    listen(&window, "scroll", move |_| {
        if let Err(e) = handle_scroll(&s) {
            console::error(&format!("[Navigator] scroll failed: {}", e));
        }
    })?;

    state.debug(&format!(
        "[DocsSite] installed ({}), retries at {:?}ms",
        ready_state, state.config.retry_delays_ms
    ));
    Ok(())
}
