//! HTML rendering of classified spans

use super::token::{Category, Token};

/// Escape the three characters that would otherwise be parsed as markup.
/// Quotes are left alone: output only ever lands in element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render tokens over `source` as HTML. Plain spans are emitted bare, every
/// other span as `<span class="...">`.
pub fn render_html(source: &str, tokens: &[Token]) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for token in tokens {
        let text = escape_html(token.text(source));
        match token.category.css_class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                out.push_str(&text);
                out.push_str("</span>");
            }
            None => out.push_str(&text),
        }
    }
    out
}

/// Strip tags from rendered markup, leaving the escaped text a browser would
/// show as characters.
pub fn visible_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Spans of `category` found in rendered markup, in order
pub fn spans_of(html: &str, category: Category) -> Vec<String> {
    let Some(class) = category.css_class() else {
        return Vec::new();
    };
    let open = format!("<span class=\"{}\">", class);
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(at) = rest.find(&open) {
        let body = &rest[at + open.len()..];
        match body.find("</span>") {
            Some(close) => {
                found.push(body[..close].to_string());
                rest = &body[close..];
            }
            None => break,
        }
    }
    found
}
