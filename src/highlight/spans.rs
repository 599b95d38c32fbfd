//! SpanList - contiguous classified spans over a source string
//!
//! Starts as one `Plain` span covering the whole text. Rules claim byte ranges
//! out of plain spans; a claim never crosses a span edge, so a character is
//! classified at most once and earlier rules always win.

use super::token::{Category, Token};

#[derive(Debug, Clone)]
pub struct SpanList {
    tokens: Vec<Token>,
}

impl SpanList {
    pub fn new(len: usize) -> Self {
        let tokens = if len == 0 {
            Vec::new()
        } else {
            vec![Token::new(Category::Plain, 0, len)]
        };
        Self { tokens }
    }

    /// Index of the span containing byte `pos`
    fn locate(&self, pos: usize) -> Option<usize> {
        let idx = self.tokens.partition_point(|t| t.end <= pos);
        match self.tokens.get(idx) {
            Some(t) if t.start <= pos => Some(idx),
            _ => None,
        }
    }

    /// True when `[start, end)` lies entirely inside one plain span
    pub fn is_plain(&self, start: usize, end: usize) -> bool {
        if start >= end {
            return false;
        }
        match self.locate(start) {
            Some(idx) => {
                let t = &self.tokens[idx];
                t.category == Category::Plain && end <= t.end
            }
            None => false,
        }
    }

    /// Classify `[start, end)` if it is still plain. Returns whether the claim
    /// succeeded.
    pub fn claim(&mut self, start: usize, end: usize, category: Category) -> bool {
        if category == Category::Plain || !self.is_plain(start, end) {
            return false;
        }
        let Some(idx) = self.locate(start) else {
            return false;
        };
        let host = self.tokens[idx];

        let mut pieces = Vec::with_capacity(3);
        if host.start < start {
            pieces.push(Token::new(Category::Plain, host.start, start));
        }
        pieces.push(Token::new(category, start, end));
        if end < host.end {
            pieces.push(Token::new(Category::Plain, end, host.end));
        }
        self.tokens.splice(idx..=idx, pieces);
        true
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_spans() {
        let spans = SpanList::new(0);
        assert!(spans.tokens().is_empty());
        assert!(!spans.is_plain(0, 0));
    }

    #[test]
    fn test_claim_splits_plain_span() {
        let mut spans = SpanList::new(10);
        assert!(spans.claim(3, 5, Category::Number));

        let cats: Vec<_> = spans.tokens().iter().map(|t| (t.category, t.start, t.end)).collect();
        assert_eq!(cats, vec![
            (Category::Plain, 0, 3),
            (Category::Number, 3, 5),
            (Category::Plain, 5, 10),
        ]);
    }

    #[test]
    fn test_claim_at_edges() {
        let mut spans = SpanList::new(6);
        assert!(spans.claim(0, 2, Category::Keyword));
        assert!(spans.claim(4, 6, Category::Type));
        assert_eq!(spans.tokens().len(), 3);
        assert_eq!(spans.tokens()[1], Token::new(Category::Plain, 2, 4));
    }

    #[test]
    fn test_overlapping_claim_rejected() {
        let mut spans = SpanList::new(10);
        assert!(spans.claim(2, 6, Category::String));
        // inside
        assert!(!spans.claim(3, 4, Category::Keyword));
        // straddling
        assert!(!spans.claim(5, 8, Category::Keyword));
        assert!(!spans.claim(0, 3, Category::Keyword));
        assert_eq!(spans.tokens().len(), 3);
    }

    #[test]
    fn test_claim_plain_is_noop() {
        let mut spans = SpanList::new(4);
        assert!(!spans.claim(0, 2, Category::Plain));
        assert_eq!(spans.tokens().len(), 1);
    }

    #[test]
    fn test_spans_stay_contiguous() {
        let mut spans = SpanList::new(12);
        spans.claim(8, 12, Category::Comment);
        spans.claim(0, 1, Category::Operator);
        spans.claim(4, 6, Category::Function);

        let tokens = spans.into_tokens();
        assert_eq!(tokens.first().map(|t| t.start), Some(0));
        assert_eq!(tokens.last().map(|t| t.end), Some(12));
        for pair in tokens.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
