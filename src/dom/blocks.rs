//! Code block elements as `CodeBlock`s

use web_sys::Element;

use crate::console;
use crate::highlight::CodeBlock;

/// A `pre code` element. The highlighted flag is an attribute on the element
/// itself, so it lives exactly as long as the page.
pub struct DomCodeBlock<'a> {
    element: Element,
    flag_attribute: &'a str,
}

impl<'a> DomCodeBlock<'a> {
    pub fn new(element: Element, flag_attribute: &'a str) -> Self {
        Self { element, flag_attribute }
    }
}

impl CodeBlock for DomCodeBlock<'_> {
    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn replace_markup(&mut self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn is_highlighted(&self) -> bool {
        self.element.has_attribute(self.flag_attribute)
    }

    fn mark_highlighted(&mut self) {
        if self.element.set_attribute(self.flag_attribute, "true").is_err() {
            console::warn(&format!(
                "[Highlighter] Could not set {} on code block",
                self.flag_attribute
            ));
        }
    }
}
