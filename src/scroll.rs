use crate::{
    controller::PageController,
    dom::Dom,
    styles::{append_transform, css_number},
};

const FLOATING_LAYER_SELECTOR: &str = ".floating-cloud";
const NAVBAR_FADE_DISTANCE_PX: f64 = 100.0;

/// Background alpha of the navigation bar at a given scroll offset.
pub fn navbar_alpha(scroll_top: f64) -> f64 {
    let opacity = (scroll_top / NAVBAR_FADE_DISTANCE_PX).clamp(0.0, 1.0);
    0.05 + opacity * 0.1
}

pub fn layer_scroll_speed(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

impl<D: Dom> PageController<D> {
    pub fn on_scroll(&mut self) {
        let scroll_top = self.dom.scroll_top();

        if let Some(navbar) = &self.refs.navbar {
            let alpha = css_number(navbar_alpha(scroll_top));
            let background = format!("rgba(255, 255, 255, {alpha})");
            self.dom.set_style(navbar, "background", &background);
        }

        // Offsets compound on every event, matching the page's established drift.
        if !self.viewport.is_mobile() {
            let layers = self.dom.query_all(FLOATING_LAYER_SELECTOR);
            for (index, layer) in layers.iter().enumerate() {
                let shift = css_number(scroll_top * layer_scroll_speed(index));
                append_transform(&self.dom, layer, &format!("translateY({shift}px)"));
            }
        }

        self.update_active_nav_link(scroll_top);
    }
}
