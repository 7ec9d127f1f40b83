use fastrand::Rng;

use crate::{
    controller::PageController,
    dom::Dom,
    styles::{css_number, ensure_style, set_styles, PARTICLE_STYLES, PARTICLE_STYLES_ID},
};

const PARTICLE_CLASS: &str = "data-particle";

/// Random placement and timing for one floating dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    /// Percent of the container width, in `[0, 100)`.
    pub left: f64,
    /// Percent of the container height, in `[0, 100)`.
    pub top: f64,
    /// Seconds, in `[5, 10)`.
    pub duration: f64,
    /// Seconds, in `[0, 2)`.
    pub delay: f64,
}

impl ParticleDescriptor {
    pub fn random(rng: &mut Rng) -> Self {
        Self {
            left: rng.f64() * 100.0,
            top: rng.f64() * 100.0,
            duration: 5.0 + rng.f64() * 5.0,
            delay: rng.f64() * 2.0,
        }
    }
}

pub struct Particle<E> {
    pub element: E,
    pub descriptor: ParticleDescriptor,
}

impl<D: Dom> PageController<D> {
    pub(crate) fn create_particles(&mut self) {
        if self.viewport.is_mobile() {
            return;
        }
        let Some(container) = self.refs.particle_container.clone() else {
            return;
        };

        for _ in 0..self.config.particle_count {
            let Some(element) = self.dom.create_element("div") else {
                continue;
            };
            let descriptor = ParticleDescriptor::random(&mut self.rng);

            self.dom.add_class(&element, PARTICLE_CLASS);
            let left = format!("{}%", css_number(descriptor.left));
            let top = format!("{}%", css_number(descriptor.top));
            let animation = format!(
                "particleFloat {}s ease-in-out infinite",
                css_number(descriptor.duration)
            );
            let delay = format!("{}s", css_number(descriptor.delay));
            set_styles(
                &self.dom,
                &element,
                &[
                    ("position", "absolute"),
                    ("width", "4px"),
                    ("height", "4px"),
                    ("background", "#00ccff"),
                    ("border-radius", "50%"),
                    ("box-shadow", "0 0 10px #00ccff"),
                    ("opacity", "0.7"),
                    ("pointer-events", "none"),
                    ("left", left.as_str()),
                    ("top", top.as_str()),
                    ("animation", animation.as_str()),
                    ("animation-delay", delay.as_str()),
                ],
            );

            self.dom.append_child(&container, &element);
            self.particles.push(Particle {
                element,
                descriptor,
            });
        }

        ensure_style(&self.dom, PARTICLE_STYLES_ID, PARTICLE_STYLES);
    }

    pub(crate) fn clear_particles(&mut self) {
        if let Some(container) = &self.refs.particle_container {
            self.dom.clear_children(container);
        }
        self.particles.clear();
    }
}
