use crate::{
    controller::{PageController, Task},
    dom::{Dom, Rect},
    styles::{css_number, ensure_style, set_styles, RIPPLE_STYLES, RIPPLE_STYLES_ID},
};

/// Elements the web host attaches card and button listeners to.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub const CTA_BUTTON_SELECTOR: &str = ".cta-button";

const BUTTON_GLOW_SELECTOR: &str = ".btn-glow";
const TOUCH_ACTIVE_CLASS: &str = "touch-active";

const TOUCH_RELEASE_MS: u32 = 150;
const GLOW_SWEEP_DELAY_MS: u32 = 50;
const RIPPLE_LIFETIME_MS: u32 = 600;

/// Square overlay centred on a click, sized to cover the button's longer side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn centred(button: Rect, client_x: f64, client_y: f64) -> Self {
        let size = button.width.max(button.height);
        Self {
            size,
            left: client_x - button.left - size / 2.0,
            top: client_y - button.top - size / 2.0,
        }
    }
}

fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

impl<D: Dom> PageController<D> {
    pub fn on_card_enter(&mut self, card: &D::Element) {
        if self.viewport.is_mobile() {
            return;
        }

        set_styles(
            &self.dom,
            card,
            &[
                ("transform", "translateY(-10px) scale(1.02)"),
                ("transition", "all 0.3s ease"),
                ("box-shadow", "0 20px 40px rgba(0, 204, 255, 0.3)"),
            ],
        );
    }

    pub fn on_card_leave(&mut self, card: &D::Element) {
        if self.viewport.is_mobile() {
            return;
        }

        set_styles(
            &self.dom,
            card,
            &[
                ("transform", "translateY(0) scale(1)"),
                ("box-shadow", "none"),
            ],
        );
    }

    pub fn on_card_touch_start(&mut self, card: &D::Element) {
        if self.viewport.is_mobile() {
            self.dom.add_class(card, TOUCH_ACTIVE_CLASS);
        }
    }

    pub fn on_card_touch_end(&mut self, card: &D::Element) {
        if self.viewport.is_mobile() {
            self.timeline
                .schedule(TOUCH_RELEASE_MS, Task::ClearTouch(card.clone()));
        }
    }

    pub(crate) fn clear_touch(&self, card: &D::Element) {
        self.dom.remove_class(card, TOUCH_ACTIVE_CLASS);
    }

    pub fn on_cta_enter(&mut self, button: &D::Element) {
        let glows = self.dom.query_within(button, BUTTON_GLOW_SELECTOR);
        let Some(glow) = glows.into_iter().next() else {
            return;
        };

        self.dom.set_style(&glow, "left", "-100%");
        self.timeline
            .schedule(GLOW_SWEEP_DELAY_MS, Task::SweepGlow(glow));
    }

    pub(crate) fn sweep_glow(&self, glow: &D::Element) {
        set_styles(
            &self.dom,
            glow,
            &[("transition", "left 0.6s ease"), ("left", "100%")],
        );
    }

    pub fn on_cta_click(&mut self, button: &D::Element, client_x: f64, client_y: f64) {
        let Some(ripple) = self.dom.create_element("span") else {
            return;
        };

        let geometry = RippleGeometry::centred(self.dom.bounding_rect(button), client_x, client_y);
        let (left, top, size) = (px(geometry.left), px(geometry.top), px(geometry.size));
        set_styles(
            &self.dom,
            &ripple,
            &[
                ("position", "absolute"),
                ("border-radius", "50%"),
                ("background", "rgba(255, 255, 255, 0.3)"),
                ("transform", "scale(0)"),
                ("animation", "ripple 0.6s ease-out"),
                ("left", left.as_str()),
                ("top", top.as_str()),
                ("width", size.as_str()),
                ("height", size.as_str()),
                ("pointer-events", "none"),
            ],
        );

        self.dom.append_child(button, &ripple);
        self.timeline
            .schedule(RIPPLE_LIFETIME_MS, Task::RemoveRipple(ripple));

        ensure_style(&self.dom, RIPPLE_STYLES_ID, RIPPLE_STYLES);
    }
}
