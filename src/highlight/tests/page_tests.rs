use crate::highlight::{highlight_blocks, CodeBlock, Highlighter};

#[derive(Debug, Default)]
struct MockBlock {
    source: String,
    markup: Option<String>,
    flagged: bool,
    writes: usize,
}

impl MockBlock {
    fn new(source: &str) -> Self {
        Self { source: source.to_string(), ..Self::default() }
    }
}

impl CodeBlock for MockBlock {
    fn text(&self) -> String {
        self.source.clone()
    }

    fn replace_markup(&mut self, html: &str) {
        self.markup = Some(html.to_string());
        self.writes += 1;
    }

    fn is_highlighted(&self) -> bool {
        self.flagged
    }

    fn mark_highlighted(&mut self) {
        self.flagged = true;
    }
}

#[test]
fn test_pass_highlights_and_flags_every_block() {
    let hl = Highlighter::nexalang().unwrap();
    let mut blocks = vec![MockBlock::new("let a = 1"), MockBlock::new("# note")];

    let report = highlight_blocks(&hl, blocks.iter_mut());

    assert_eq!(report.scanned, 2);
    assert_eq!(report.highlighted, 2);
    assert_eq!(report.skipped, 0);
    assert!(blocks.iter().all(|b| b.flagged));
    assert_eq!(
        blocks[1].markup.as_deref(),
        Some("<span class=\"comment\"># note</span>")
    );
}

#[test]
fn test_second_pass_is_noop() {
    let hl = Highlighter::nexalang().unwrap();
    let mut blocks = vec![MockBlock::new("fn main() {}")];

    highlight_blocks(&hl, blocks.iter_mut());
    let first = blocks[0].markup.clone();

    let report = highlight_blocks(&hl, blocks.iter_mut());
    assert_eq!(report.highlighted, 0);
    assert_eq!(report.skipped, 1);
    assert_eq!(blocks[0].markup, first);
    assert_eq!(blocks[0].writes, 1);
}

#[test]
fn test_blocks_added_later_are_picked_up() {
    let hl = Highlighter::nexalang().unwrap();
    let mut blocks = vec![MockBlock::new("let a = 1")];
    highlight_blocks(&hl, blocks.iter_mut());

    blocks.push(MockBlock::new("let b = 2"));
    let report = highlight_blocks(&hl, blocks.iter_mut());

    assert_eq!(report.scanned, 2);
    assert_eq!(report.highlighted, 1);
    assert_eq!(report.skipped, 1);
    assert!(blocks[1].markup.is_some());
}

#[test]
fn test_empty_block_still_flagged() {
    let hl = Highlighter::nexalang().unwrap();
    let mut blocks = vec![MockBlock::new("")];
    let report = highlight_blocks(&hl, blocks.iter_mut());
    assert_eq!(report.highlighted, 1);
    assert_eq!(blocks[0].markup.as_deref(), Some(""));
    assert!(blocks[0].flagged);
}

#[test]
fn test_no_blocks() {
    let hl = Highlighter::nexalang().unwrap();
    let report = highlight_blocks(&hl, Vec::<MockBlock>::new());
    assert_eq!(report.scanned, 0);
    assert!(report.elapsed_ms >= 0.0);
}
