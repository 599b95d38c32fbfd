//! Token categories and classified spans

use serde::{Deserialize, Serialize};

/// Syntax category of a span of source text
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comment,
    String,
    Number,
    Keyword,
    Type,
    Function,
    Operator,
    Plain,
}

impl Category {
    /// CSS class used in rendered markup. `Plain` renders without a wrapper.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Category::Comment => Some("comment"),
            Category::String => Some("string"),
            Category::Number => Some("number"),
            Category::Keyword => Some("keyword"),
            Category::Type => Some("type"),
            Category::Function => Some("function"),
            Category::Operator => Some("operator"),
            Category::Plain => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.css_class().unwrap_or("plain")
    }
}

/// A classified byte range `[start, end)` of the source text
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(category: Category, start: usize, end: usize) -> Self {
        Self { category, start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice of `source` this token covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_css_class() {
        assert_eq!(Category::Plain.css_class(), None);
        assert_eq!(Category::Plain.as_str(), "plain");
        assert_eq!(Category::Function.css_class(), Some("function"));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Token::new(Category::Keyword, 0, 2)).unwrap();
        assert_eq!(json, r#"{"category":"keyword","start":0,"end":2}"#);
    }

    #[test]
    fn test_token_text_slice() {
        let src = "let x";
        let tok = Token::new(Category::Keyword, 0, 3);
        assert_eq!(tok.text(src), "let");
        assert_eq!(tok.len(), 3);
        assert!(!tok.is_empty());
    }
}
