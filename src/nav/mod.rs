//! Navigator - in-page anchor navigation and scroll spy
//!
//! Decides, per click or scroll event, which sidebar link is active. The DOM
//! layer reads hrefs, section boxes and the scroll position, calls in here, and
//! writes the resulting `active` classes back.

pub mod links;
pub mod sections;

pub use links::{fragment_id, LinkSet, NavLink};
pub use sections::{section_at, SectionBox, DEFAULT_SCROLL_OFFSET};

use serde::{Deserialize, Serialize};

// ==================== TYPE DEFINITIONS ====================

/// Result of an anchor click
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ClickOutcome {
    /// Section id to scroll smoothly into view
    pub scroll_to: Option<String>,
    /// The clicked anchor itself should get the active class
    pub mark_clicked: bool,
    /// Sidebar active flags changed
    pub changed: bool,
}

/// Result of a scroll event
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ScrollOutcome {
    /// Section under the probe line, if any
    pub section: Option<String>,
    pub changed: bool,
}

// ==================== MAIN IMPLEMENTATION ====================

#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    offset: f64,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_OFFSET)
    }
}

impl Navigator {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Handle a click on a same-page anchor.
    ///
    /// `clicked` is the anchor's index in `links` when it is itself a sidebar
    /// link. Nothing changes when the href has no fragment or its target does
    /// not exist; the default jump is suppressed either way.
    pub fn on_click<F>(
        &self,
        links: &mut LinkSet,
        clicked: Option<usize>,
        href: &str,
        target_exists: F,
    ) -> ClickOutcome
    where
        F: Fn(&str) -> bool,
    {
        let Some(id) = fragment_id(href) else {
            return ClickOutcome::default();
        };
        if !target_exists(id) {
            return ClickOutcome::default();
        }

        let before = snapshot(links);
        match clicked {
            Some(index) => links.activate_only(index),
            None => links.clear(),
        }

        ClickOutcome {
            scroll_to: Some(id.to_string()),
            mark_clicked: true,
            changed: before != snapshot(links),
        }
    }

    /// Handle a scroll event. With no section under the probe line the links
    /// keep whatever state they had.
    pub fn on_scroll(&self, links: &mut LinkSet, sections: &[SectionBox], scroll_y: f64) -> ScrollOutcome {
        let Some(section) = section_at(sections, scroll_y, self.offset) else {
            return ScrollOutcome::default();
        };

        let before = snapshot(links);
        links.activate_href(&section.id);

        ScrollOutcome {
            section: Some(section.id.clone()),
            changed: before != snapshot(links),
        }
    }
}

fn snapshot(links: &LinkSet) -> Vec<bool> {
    links.links().iter().map(|l| l.active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> LinkSet {
        LinkSet::from_hrefs(["#intro", "#install", "#usage"])
    }

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox::new("intro", 0.0, 500.0),
            SectionBox::new("install", 500.0, 300.0),
            SectionBox::new("usage", 800.0, 1000.0),
        ]
    }

    // -------------------------------------------------------------------------
    // Clicks
    // -------------------------------------------------------------------------

    #[test]
    fn test_click_marks_exactly_one() {
        let nav = Navigator::default();
        let mut links = sidebar();
        links.activate_only(0);

        let out = nav.on_click(&mut links, Some(2), "#usage", |_| true);

        assert_eq!(out.scroll_to.as_deref(), Some("usage"));
        assert!(out.mark_clicked);
        assert!(out.changed);
        assert_eq!(links.active_index(), Some(2));
        assert_eq!(links.active_count(), 1);
    }

    #[test]
    fn test_click_missing_target_changes_nothing() {
        let nav = Navigator::default();
        let mut links = sidebar();
        links.activate_only(1);

        let out = nav.on_click(&mut links, Some(0), "#gone", |id| id != "gone");

        assert_eq!(out, ClickOutcome::default());
        assert_eq!(links.active_index(), Some(1));
    }

    #[test]
    fn test_click_bare_hash_is_noop() {
        let nav = Navigator::default();
        let mut links = sidebar();
        let out = nav.on_click(&mut links, Some(0), "#", |_| true);
        assert!(out.scroll_to.is_none());
        assert_eq!(links.active_count(), 0);
    }

    #[test]
    fn test_click_outside_sidebar_clears_sidebar() {
        let nav = Navigator::default();
        let mut links = sidebar();
        links.activate_only(0);

        let out = nav.on_click(&mut links, None, "#install", |_| true);

        assert!(out.mark_clicked);
        assert_eq!(links.active_count(), 0);
    }

    #[test]
    fn test_repeat_click_reports_unchanged() {
        let nav = Navigator::default();
        let mut links = sidebar();
        nav.on_click(&mut links, Some(1), "#install", |_| true);
        let out = nav.on_click(&mut links, Some(1), "#install", |_| true);
        assert!(!out.changed);
        assert_eq!(links.active_index(), Some(1));
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    #[test]
    fn test_scroll_activates_section_link() {
        let nav = Navigator::default();
        let mut links = sidebar();

        let out = nav.on_scroll(&mut links, &sections(), 400.0);

        assert_eq!(out.section.as_deref(), Some("install"));
        assert!(out.changed);
        assert_eq!(links.active_index(), Some(1));
    }

    #[test]
    fn test_scroll_without_section_keeps_state() {
        let nav = Navigator::default();
        let mut links = sidebar();
        links.activate_only(2);

        let out = nav.on_scroll(&mut links, &sections(), 5000.0);

        assert_eq!(out, ScrollOutcome::default());
        assert_eq!(links.active_index(), Some(2));
    }

    #[test]
    fn test_scroll_to_unlinked_section_clears() {
        let nav = Navigator::default();
        let mut links = LinkSet::from_hrefs(["#intro"]);
        links.activate_only(0);
        let sections = vec![SectionBox::new("appendix", 0.0, 1000.0)];

        let out = nav.on_scroll(&mut links, &sections, 0.0);

        assert_eq!(out.section.as_deref(), Some("appendix"));
        assert_eq!(links.active_count(), 0);
    }

    #[test]
    fn test_custom_offset() {
        let nav = Navigator::new(0.0);
        let mut links = sidebar();
        nav.on_scroll(&mut links, &sections(), 450.0);
        assert_eq!(links.active_index(), Some(0));
    }
}
