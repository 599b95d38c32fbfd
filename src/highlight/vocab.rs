//! NexaLang vocabulary: keywords, primitive types and builtins
//!
//! Membership is always an exact-name test, never a substring match.

use std::collections::HashSet;

pub const KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "return", "if", "else", "while", "match",
    "struct", "enum", "impl", "self", "kernel", "region", "in",
    "unsafe", "true", "false", "as",
];

pub const PRIMITIVE_TYPES: &[&str] = &[
    "i32", "i64", "u8", "bool", "f32", "char", "string", "void",
];

/// Builtins highlighted when followed by `(`
pub const BUILTIN_FUNCTIONS: &[&str] = &[
    "print", "panic", "assert", "malloc", "free", "realloc", "memcpy",
    "slice_from_array",
];

/// Builtins highlighted when followed by a generic `<`
pub const GENERIC_BUILTINS: &[&str] = &["cast", "sizeof", "ptr_offset"];

/// Namespace whose members are all builtins (`gpu::thread_id(...)`)
pub const BUILTIN_NAMESPACE: &str = "gpu";

/// Word lists driving the highlighter rules
#[derive(Clone, Debug, PartialEq)]
pub struct Vocabulary {
    keywords: Vec<String>,
    types: Vec<String>,
    builtins: Vec<String>,
    generic_builtins: Vec<String>,
    namespace: Option<String>,
    reserved: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::nexalang()
    }
}

impl Vocabulary {
    /// The stock NexaLang word lists
    pub fn nexalang() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut vocab = Self {
            keywords: owned(KEYWORDS),
            types: owned(PRIMITIVE_TYPES),
            builtins: owned(BUILTIN_FUNCTIONS),
            generic_builtins: owned(GENERIC_BUILTINS),
            namespace: Some(BUILTIN_NAMESPACE.to_string()),
            reserved: HashSet::new(),
        };
        vocab.rebuild_reserved();
        vocab
    }

    /// Vocabulary with no words at all (every rule depending on a list is skipped)
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
            types: Vec::new(),
            builtins: Vec::new(),
            generic_builtins: Vec::new(),
            namespace: None,
            reserved: HashSet::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.keywords, words);
        self.rebuild_reserved();
        self
    }

    pub fn with_types<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.types, words);
        self.rebuild_reserved();
        self
    }

    pub fn with_builtins<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        push_unique(&mut self.builtins, words);
        self.rebuild_reserved();
        self
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn builtins(&self) -> &[String] {
        &self.builtins
    }

    pub fn generic_builtins(&self) -> &[String] {
        &self.generic_builtins
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn is_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| k == name)
    }

    pub fn is_primitive_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    /// Names a call-suffix match must never re-wrap: keywords, primitive types
    /// and generic builtins.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    fn rebuild_reserved(&mut self) {
        self.reserved = self
            .keywords
            .iter()
            .chain(self.types.iter())
            .chain(self.generic_builtins.iter())
            .cloned()
            .collect();
    }
}

fn push_unique<I, S>(list: &mut Vec<String>, words: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for word in words {
        let word = word.into();
        let word = word.trim();
        if !word.is_empty() && !list.iter().any(|w| w == word) {
            list.push(word.to_string());
        }
    }
}
