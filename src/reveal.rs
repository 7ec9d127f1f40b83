use serde_json::json;

use crate::{
    controller::{PageController, Task},
    dom::Dom,
    logging::LogLevel,
    styles::{css_number, set_styles},
};

pub const REVEAL_SELECTOR: &str = ".skill-item, .project-card, .contact-card, .about-card";
/// Observer options used by the web host.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const REVEAL_THRESHOLD: f64 = 0.1;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const SKILL_ITEM_CLASS: &str = "skill-item";
const SKILL_PROGRESS_SELECTOR: &str = ".skill-progress";
const ANIMATED_CLASS: &str = "animated";

const REVEAL_DELAY_MS: u32 = 100;
const SKILL_FILL_DELAY_MS: u32 = 500;
const SKILL_INTRO_STAGGER_MS: u32 = 200;
const SKILL_INTRO_SETTLE_MS: u32 = 100;

/// Parses a skill's `data-level` percentage. Anything that is not a finite,
/// non-negative number is rejected.
pub fn parse_skill_level(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|level| level.is_finite() && *level >= 0.0)
}

impl<D: Dom> PageController<D> {
    pub fn reveal_targets(&self) -> Vec<D::Element> {
        self.dom.query_all(REVEAL_SELECTOR)
    }

    /// Called the first time an observed element crosses the visibility
    /// threshold. Later calls for the same element do nothing.
    pub fn on_element_visible(&mut self, element: &D::Element) {
        if self.dom.has_class(element, ANIMATED_CLASS) {
            return;
        }
        self.dom.add_class(element, ANIMATED_CLASS);

        if self.dom.has_class(element, SKILL_ITEM_CLASS) {
            self.animate_skill_bar(element);
        }

        set_styles(
            &self.dom,
            element,
            &[("opacity", "0"), ("transform", "translateY(30px)")],
        );
        self.timeline
            .schedule(REVEAL_DELAY_MS, Task::SettleReveal(element.clone()));
    }

    pub(crate) fn settle_reveal(&self, element: &D::Element) {
        set_styles(
            &self.dom,
            element,
            &[
                ("transition", "all 0.8s ease"),
                ("opacity", "1"),
                ("transform", "translateY(0)"),
            ],
        );
    }

    fn animate_skill_bar(&mut self, item: &D::Element) {
        let bars = self.dom.query_within(item, SKILL_PROGRESS_SELECTOR);
        let Some(bar) = bars.into_iter().next() else {
            return;
        };

        self.dom.set_style(&bar, "width", "0%");

        let raw = self.dom.attribute(item, "data-level").unwrap_or_default();
        match parse_skill_level(&raw) {
            Some(level) => {
                self.timeline
                    .schedule(SKILL_FILL_DELAY_MS, Task::FillSkillBar { bar, level });
            }
            None => self.log(
                LogLevel::Debug,
                "skill_level_invalid",
                json!({ "level": raw }),
            ),
        }
    }

    pub(crate) fn fill_skill_bar(&self, bar: &D::Element, level: f64) {
        let width = format!("{}%", css_number(level));
        set_styles(
            &self.dom,
            bar,
            &[("transition", "width 2s ease"), ("width", width.as_str())],
        );
    }

    pub(crate) fn stagger_skill_intro(&mut self) {
        let items = self.dom.query_all(&format!(".{SKILL_ITEM_CLASS}"));
        for (index, item) in items.into_iter().enumerate() {
            let delay = SKILL_INTRO_STAGGER_MS.saturating_mul(index as u32);
            self.timeline.schedule(delay, Task::StartSkillIntro(item));
        }
    }

    pub(crate) fn start_skill_intro(&mut self, item: &D::Element) {
        set_styles(
            &self.dom,
            item,
            &[
                ("opacity", "0"),
                ("transform", "translateY(30px)"),
                ("transition", "all 0.6s ease"),
            ],
        );
        self.timeline
            .schedule(SKILL_INTRO_SETTLE_MS, Task::SettleSkillIntro(item.clone()));
    }

    pub(crate) fn settle_skill_intro(&self, item: &D::Element) {
        set_styles(
            &self.dom,
            item,
            &[("opacity", "1"), ("transform", "translateY(0)")],
        );
    }
}
