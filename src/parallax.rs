use crate::{
    controller::{PageController, Task},
    dom::Dom,
    styles::{append_transform, css_number},
    viewport::PointerState,
};

/// Decorative layers that drift against the pointer, with their sensitivity.
const PARALLAX_LAYERS: [(&str, f64); 7] = [
    (".cloud-1", 0.5),
    (".cloud-2", -0.3),
    (".cloud-3", 0.7),
    (".cloud-4", -0.4),
    (".server-1", 0.2),
    (".server-2", -0.2),
    (".hero-visual", 0.1),
];

const PARALLAX_RANGE_PX: f64 = 20.0;

pub struct ParallaxBinding<E> {
    pub element: E,
    pub speed: f64,
}

impl<E> ParallaxBinding<E> {
    pub fn offset(&self, pointer: PointerState) -> (f64, f64) {
        (
            pointer.x * self.speed * PARALLAX_RANGE_PX,
            pointer.y * self.speed * PARALLAX_RANGE_PX,
        )
    }
}

fn translate3d(x: f64, y: f64) -> String {
    format!("translate3d({}px, {}px, 0)", css_number(x), css_number(y))
}

impl<D: Dom> PageController<D> {
    pub(crate) fn setup_parallax(&mut self) {
        if self.viewport.is_mobile() {
            return;
        }

        self.parallax = PARALLAX_LAYERS
            .iter()
            .filter_map(|(selector, speed)| {
                self.dom.query(selector).map(|element| ParallaxBinding {
                    element,
                    speed: *speed,
                })
            })
            .collect();
    }

    /// Records the pointer and queues at most one parallax frame; further
    /// moves before that frame runs only refresh the stored position.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        if self.viewport.is_mobile() {
            return;
        }

        let (width, height) = self.dom.viewport_size();
        let Some(pointer) = PointerState::normalized(client_x, client_y, width, height) else {
            return;
        };
        self.pointer = pointer;

        if !self.frame_pending {
            self.frame_pending = true;
            self.timeline.request_frame(Task::ApplyParallax);
        }
    }

    pub(crate) fn apply_parallax(&self) {
        if self.viewport.is_mobile() {
            return;
        }

        for binding in &self.parallax {
            let (x, y) = binding.offset(self.pointer);
            append_transform(&self.dom, &binding.element, &translate3d(x, y));
        }
    }
}
