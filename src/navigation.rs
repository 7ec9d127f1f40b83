use serde_json::json;

use crate::{controller::PageController, dom::Dom, logging::LogLevel};

const SECTION_SELECTOR: &str = "section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const HAMBURGER_BAR_SELECTOR: &str = ".bar";
const ACTIVE_CLASS: &str = "active";

/// Sections count as current from this far above their top edge.
const SECTION_LEAD_PX: f64 = 100.0;
/// Height of the fixed header cleared by smooth scrolling.
const HEADER_OFFSET_PX: f64 = 80.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionExtent {
    fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// The last section in document order whose extent holds `scroll_top`.
pub fn active_section(sections: &[SectionExtent], scroll_top: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(scroll_top))
        .last()
        .map(|section| section.id.as_str())
}

/// Transform for hamburger bar `index` while the menu is open.
pub fn open_bar_transform(index: usize) -> &'static str {
    match index {
        0 => "rotate(45deg) translate(6px, 6px)",
        1 => "rotate(0deg) translate(0px, 0px)",
        _ => "rotate(-45deg) translate(-6px, -6px)",
    }
}

impl<D: Dom> PageController<D> {
    pub(crate) fn update_active_nav_link(&self, scroll_top: f64) {
        let sections: Vec<SectionExtent> = self
            .dom
            .query_all(SECTION_SELECTOR)
            .iter()
            .filter_map(|section| {
                Some(SectionExtent {
                    id: self.dom.attribute(section, "id")?,
                    top: self.dom.offset_top(section) - SECTION_LEAD_PX,
                    height: self.dom.client_height(section),
                })
            })
            .collect();

        let target = active_section(&sections, scroll_top).map(|id| format!("#{id}"));

        for link in self.dom.query_all(NAV_LINK_SELECTOR) {
            self.dom.remove_class(&link, ACTIVE_CLASS);
            if target.is_some() && self.dom.attribute(&link, "href") == target {
                self.dom.add_class(&link, ACTIVE_CLASS);
            }
        }
    }

    pub fn menu_open(&self) -> bool {
        self.refs
            .nav_menu
            .as_ref()
            .is_some_and(|menu| self.dom.has_class(menu, ACTIVE_CLASS))
    }

    pub fn toggle_mobile_menu(&mut self) {
        let (Some(hamburger), Some(menu)) = (&self.refs.hamburger, &self.refs.nav_menu) else {
            return;
        };

        let open = !self.dom.has_class(menu, ACTIVE_CLASS);
        for element in [menu, hamburger] {
            if open {
                self.dom.add_class(element, ACTIVE_CLASS);
            } else {
                self.dom.remove_class(element, ACTIVE_CLASS);
            }
        }

        let bars = self.dom.query_within(hamburger, HAMBURGER_BAR_SELECTOR);
        for (index, bar) in bars.iter().enumerate() {
            let transform = if open {
                open_bar_transform(index)
            } else {
                "none"
            };
            self.dom.set_style(bar, "transform", transform);
        }
    }

    pub fn on_nav_link_click(&mut self) {
        if self.menu_open() {
            self.toggle_mobile_menu();
        }
    }

    /// Smooth-scrolls to the section an in-page `#id` link points at.
    pub fn on_anchor_click(&mut self, href: &str) {
        let target = href.strip_prefix('#').unwrap_or(href);
        self.scroll_to_section(target);
    }

    pub fn scroll_to_section(&self, section_id: &str) {
        match self.dom.element_by_id(section_id) {
            Some(section) => {
                self.dom
                    .smooth_scroll_to(self.dom.offset_top(&section) - HEADER_OFFSET_PX);
            }
            None => self.log(
                LogLevel::Debug,
                "anchor_target_missing",
                json!({ "section": section_id }),
            ),
        }
    }
}
