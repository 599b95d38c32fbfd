//! Error types for NexaDocs
//!
//! Page behavior never surfaces errors to the reader. These types only cover
//! construction-time failures (rule compilation, config parsing) and DOM calls
//! that the glue layer logs and drops.

use wasm_bindgen::JsValue;

/// NexaDocs errors
#[derive(Debug, Clone, PartialEq)]
pub enum DocsError {
    /// A highlighter rule failed to compile
    InvalidPattern(String),
    /// Site configuration could not be parsed
    InvalidConfig(String),
    /// A DOM call failed or an expected node was missing
    Dom(String),
}

impl std::fmt::Display for DocsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocsError::InvalidPattern(msg) => write!(f, "Invalid highlight pattern: {}", msg),
            DocsError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            DocsError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for DocsError {}

impl From<regex::Error> for DocsError {
    fn from(e: regex::Error) -> Self {
        DocsError::InvalidPattern(e.to_string())
    }
}

impl From<DocsError> for JsValue {
    fn from(e: DocsError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

impl DocsError {
    /// Wrap a thrown JS value from a DOM call
    pub fn dom(context: &str, err: &JsValue) -> Self {
        DocsError::Dom(format!("{}: {:?}", context, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            DocsError::InvalidConfig("missing field".to_string()).to_string(),
            "Invalid config: missing field"
        );
        assert_eq!(
            DocsError::Dom("no window".to_string()).to_string(),
            "DOM error: no window"
        );
    }

    #[test]
    fn test_regex_error_converts() {
        let err = regex::Regex::new("(unclosed").unwrap_err();
        let docs: DocsError = err.into();
        assert!(matches!(docs, DocsError::InvalidPattern(_)));
    }
}
