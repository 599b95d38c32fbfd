//! Highlighting passes over a page's code blocks
//!
//! Each block carries its own "highlighted" flag (a DOM attribute in the
//! browser). A pass skips flagged blocks, so repeated passes from load events
//! and retries never wrap a block twice.

use serde::{Deserialize, Serialize};

use super::Highlighter;

/// A code block the highlighter can read and rewrite
pub trait CodeBlock {
    /// Raw text content of the block
    fn text(&self) -> String;
    /// Replace the block's markup with rendered HTML
    fn replace_markup(&mut self, html: &str);
    fn is_highlighted(&self) -> bool;
    fn mark_highlighted(&mut self);
}

impl<T: CodeBlock + ?Sized> CodeBlock for &mut T {
    fn text(&self) -> String {
        (**self).text()
    }

    fn replace_markup(&mut self, html: &str) {
        (**self).replace_markup(html)
    }

    fn is_highlighted(&self) -> bool {
        (**self).is_highlighted()
    }

    fn mark_highlighted(&mut self) {
        (**self).mark_highlighted()
    }
}

/// Outcome of one highlighting pass
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PassReport {
    pub scanned: usize,
    pub highlighted: usize,
    pub skipped: usize,
    pub elapsed_ms: f64,
}

/// Highlight every block not yet flagged, then flag it
pub fn highlight_blocks<B, I>(highlighter: &Highlighter, blocks: I) -> PassReport
where
    B: CodeBlock,
    I: IntoIterator<Item = B>,
{
    let started = instant::Instant::now();
    let mut report = PassReport::default();

    for mut block in blocks {
        report.scanned += 1;
        if block.is_highlighted() {
            report.skipped += 1;
            continue;
        }
        let html = highlighter.highlight(&block.text());
        block.replace_markup(&html);
        block.mark_highlighted();
        report.highlighted += 1;
    }

    report.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    report
}
