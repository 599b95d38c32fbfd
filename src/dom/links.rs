//! Reading nav state out of the DOM and writing it back

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::console;
use crate::nav::{LinkSet, NavLink, SectionBox};

/// Sidebar links with their current active class
pub fn read_links(elements: &[Element], active_class: &str) -> LinkSet {
    LinkSet::new(
        elements
            .iter()
            .map(|el| NavLink {
                href: el.get_attribute("href").unwrap_or_default(),
                active: el.class_list().contains(active_class),
            })
            .collect(),
    )
}

/// Push `links` active flags onto the matching elements
pub fn write_links(elements: &[Element], links: &LinkSet, active_class: &str) {
    for (el, link) in elements.iter().zip(links.links()) {
        set_active(el, link.active, active_class);
    }
}

pub fn set_active(el: &Element, active: bool, active_class: &str) {
    let classes = el.class_list();
    let result = if active {
        classes.add_1(active_class)
    } else {
        classes.remove_1(active_class)
    };
    if result.is_err() {
        console::warn(&format!("[Navigator] Could not toggle .{}", active_class));
    }
}

/// Vertical boxes of `section[id]` elements, in document order
pub fn read_sections(elements: &[Element]) -> Vec<SectionBox> {
    elements
        .iter()
        .filter_map(|el| {
            let html = el.dyn_ref::<HtmlElement>()?;
            Some(SectionBox::new(
                el.id(),
                f64::from(html.offset_top()),
                f64::from(html.offset_height()),
            ))
        })
        .collect()
}
