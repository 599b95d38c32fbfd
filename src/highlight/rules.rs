//! Ordered classification rules
//!
//! Each rule is a regex run over the whole source (so word boundaries see the real
//! neighbouring characters) whose match, or one capture group of it, is
//! claimed in the span list only while that range is still plain. Rule order
//! is precedence order:
//!
//! 1. comments and string/char literals
//! 2. numbers
//! 3. keywords
//! 4. primitive types
//! 5. generic builtins before `<`
//! 6. builtins before `(` (including `gpu::name`)
//! 7. other lowercase names before `(` or `::`
//! 8. PascalCase names
//! 9. single operator characters

use regex::Regex;

use super::spans::SpanList;
use super::token::Category;
use super::vocab::Vocabulary;
use crate::error::DocsError;

// ==================== PATTERNS ====================

/// `#` to end of line, or a quoted literal running to its closing quote (across
/// newlines). A quote with no closing partner runs to end of line. Leftmost
/// match wins, so `"#"` is a string and `# "x"` is a comment.
const LITERAL_PATTERN: &str = r#"#[^\r\n]*|"[^"]*"|"[^"\r\n]*|'[^']*'|'[^'\r\n]*"#;

// Word boundaries are ASCII-only: `é` is not a word character here.

const NUMBER_PATTERN: &str = r"(?-u:\b)[0-9]+\.?[0-9]*(?-u:\b)";

const CALL_PATTERN: &str = r"(?-u:\b)([a-z_][a-z0-9_]*)\s*(?:\(|::)";

const PASCAL_PATTERN: &str = r"(?-u:\b)[A-Z][a-zA-Z0-9_]*(?-u:\b)";

const OPERATOR_PATTERN: &str = r"[+\-*/=<>!&|:;,.(){}\[\]]";

// ==================== RULE TYPES ====================

/// How a matched range gets its category
#[derive(Debug, Clone, Copy)]
enum Classify {
    Fixed(Category),
    /// Comment if it starts with `#`, string otherwise
    Literal,
}

/// Membership check applied to the matched name before claiming it
#[derive(Debug, Clone, Copy, PartialEq)]
enum Guard {
    Always,
    NotReserved,
    NotPrimitiveLowercase,
}

#[derive(Debug)]
struct Rule {
    name: &'static str,
    pattern: Regex,
    group: usize,
    classify: Classify,
    guard: Guard,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, classify: Classify) -> Result<Self, DocsError> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            group: 0,
            classify,
            guard: Guard::Always,
        })
    }

    fn group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    fn guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    fn allows(&self, name: &str, vocab: &Vocabulary) -> bool {
        match self.guard {
            Guard::Always => true,
            Guard::NotReserved => !vocab.is_reserved(name),
            Guard::NotPrimitiveLowercase => !vocab.is_primitive_type(&name.to_lowercase()),
        }
    }

    fn category_for(&self, matched: &str) -> Category {
        match self.classify {
            Classify::Fixed(category) => category,
            Classify::Literal if matched.trim_start().starts_with('#') => Category::Comment,
            Classify::Literal => Category::String,
        }
    }

    /// Claim every acceptable match. Returns the number of claims made.
    fn apply(&self, text: &str, spans: &mut SpanList, vocab: &Vocabulary) -> usize {
        let mut claimed = 0;
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            let accepted = match caps.get(self.group) {
                Some(target) if !target.is_empty() && self.allows(target.as_str(), vocab) => {
                    let category = self.category_for(target.as_str());
                    spans.claim(target.start(), target.end(), category)
                }
                _ => false,
            };

            if accepted && whole.end() > whole.start() {
                claimed += 1;
                pos = whole.end();
            } else {
                // Retry one character further so matches starting inside a
                // rejected one are still found.
                pos = whole.start() + text[whole.start()..].chars().next().map_or(1, char::len_utf8);
            }
        }

        claimed
    }
}

// ==================== RULE SET ====================

/// The full, ordered rule pipeline compiled for one vocabulary
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn compile(vocab: &Vocabulary) -> Result<Self, DocsError> {
        let mut rules = vec![
            Rule::new("literal", LITERAL_PATTERN, Classify::Literal)?,
            Rule::new("number", NUMBER_PATTERN, Classify::Fixed(Category::Number))?,
        ];

        if let Some(words) = alternation(vocab.keywords()) {
            rules.push(Rule::new(
                "keyword",
                &format!(r"(?-u:\b)(?:{})(?-u:\b)", words),
                Classify::Fixed(Category::Keyword),
            )?);
        }

        if let Some(words) = alternation(vocab.types()) {
            rules.push(Rule::new(
                "primitive_type",
                &format!(r"(?-u:\b)(?:{})(?-u:\b)", words),
                Classify::Fixed(Category::Type),
            )?);
        }

        if let Some(words) = alternation(vocab.generic_builtins()) {
            rules.push(
                Rule::new(
                    "generic_builtin",
                    &format!(r"(?-u:\b)({})\s*<", words),
                    Classify::Fixed(Category::Function),
                )?
                .group(1),
            );
        }

        let mut builtin_alts: Vec<String> = vocab.builtins().iter().map(|b| regex::escape(b)).collect();
        if let Some(ns) = vocab.namespace() {
            builtin_alts.push(format!(r"{}::[A-Za-z0-9_]+", regex::escape(ns)));
        }
        if !builtin_alts.is_empty() {
            rules.push(
                Rule::new(
                    "builtin",
                    &format!(r"(?-u:\b)({})\s*\(", builtin_alts.join("|")),
                    Classify::Fixed(Category::Function),
                )?
                .group(1),
            );
        }

        rules.push(
            Rule::new("call", CALL_PATTERN, Classify::Fixed(Category::Function))?
                .group(1)
                .guard(Guard::NotReserved),
        );
        rules.push(
            Rule::new("pascal_type", PASCAL_PATTERN, Classify::Fixed(Category::Type))?
                .guard(Guard::NotPrimitiveLowercase),
        );
        rules.push(Rule::new("operator", OPERATOR_PATTERN, Classify::Fixed(Category::Operator))?);

        Ok(Self { rules })
    }

    /// Run every rule in order over `text`
    pub fn apply(&self, text: &str, vocab: &Vocabulary) -> SpanList {
        let mut spans = SpanList::new(text.len());
        for rule in &self.rules {
            rule.apply(text, &mut spans, vocab);
        }
        spans
    }

    /// Rule names in precedence order
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

fn alternation(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    Some(words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|"))
}
