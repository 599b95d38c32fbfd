//! Page sections and scroll-position lookup

use serde::{Deserialize, Serialize};

/// Offset added to the scroll position before looking up the current section
pub const DEFAULT_SCROLL_OFFSET: f64 = 200.0;

/// Vertical extent of a `section[id]` element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `[top, bottom)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Section containing `scroll_y + offset`. When sections overlap (nesting),
/// the last one in document order wins.
pub fn section_at(sections: &[SectionBox], scroll_y: f64, offset: f64) -> Option<&SectionBox> {
    let probe = scroll_y + offset;
    sections.iter().rev().find(|s| s.contains(probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBox> {
        vec![
            SectionBox::new("intro", 0.0, 500.0),
            SectionBox::new("install", 500.0, 300.0),
            SectionBox::new("usage", 800.0, 1000.0),
        ]
    }

    #[test]
    fn test_offset_applied() {
        let sections = page();
        assert_eq!(section_at(&sections, 0.0, 200.0).map(|s| s.id.as_str()), Some("intro"));
        // 300 + 200 = 500 is the first pixel of `install`
        assert_eq!(section_at(&sections, 300.0, 200.0).map(|s| s.id.as_str()), Some("install"));
        assert_eq!(section_at(&sections, 299.0, 200.0).map(|s| s.id.as_str()), Some("intro"));
    }

    #[test]
    fn test_past_the_end() {
        let sections = page();
        assert!(section_at(&sections, 1700.0, 200.0).is_none());
    }

    #[test]
    fn test_nested_last_wins() {
        let sections = vec![
            SectionBox::new("outer", 0.0, 1000.0),
            SectionBox::new("inner", 100.0, 200.0),
        ];
        assert_eq!(section_at(&sections, 0.0, 150.0).map(|s| s.id.as_str()), Some("inner"));
        assert_eq!(section_at(&sections, 0.0, 500.0).map(|s| s.id.as_str()), Some("outer"));
    }

    #[test]
    fn test_zero_height_never_matches() {
        let sections = vec![SectionBox::new("empty", 100.0, 0.0)];
        assert!(section_at(&sections, 0.0, 100.0).is_none());
    }
}
