//! Sidebar link set with a single active link

use serde::{Deserialize, Serialize};

/// One sidebar navigation link
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NavLink {
    /// Raw `href` attribute, e.g. `#install`
    pub href: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            active: false,
        }
    }

    /// True when this link points at the section with `id`
    pub fn points_to(&self, id: &str) -> bool {
        fragment_id(&self.href) == Some(id)
    }
}

/// Identifier of a same-page `href` (`#id` → `id`). `None` for other links and
/// for a bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// All sidebar links in document order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LinkSet {
    links: Vec<NavLink>,
}

impl LinkSet {
    pub fn new(links: Vec<NavLink>) -> Self {
        Self { links }
    }

    pub fn from_hrefs<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(hrefs.into_iter().map(NavLink::new).collect())
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn clear(&mut self) {
        for link in &mut self.links {
            link.active = false;
        }
    }

    /// Make `index` the only active link. Out-of-range indexes just clear.
    pub fn activate_only(&mut self, index: usize) {
        for (i, link) in self.links.iter_mut().enumerate() {
            link.active = i == index;
        }
    }

    /// Clear every link, then activate those whose href is exactly `#id`.
    /// Returns whether any link matched.
    pub fn activate_href(&mut self, id: &str) -> bool {
        let mut matched = false;
        for link in &mut self.links {
            link.active = link.points_to(id);
            matched |= link.active;
        }
        matched
    }

    /// First active link, if any
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }

    pub fn active_count(&self) -> usize {
        self.links.iter().filter(|l| l.active).count()
    }
}
