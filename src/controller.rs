//! The page controller: one instance per page load, owning every piece of
//! shared state the page's behaviors read and write.

use std::cell::RefCell;

use fastrand::Rng;
use serde_json::{json, Value};

use crate::{
    config::PageConfig,
    contact_form::FormPhase,
    dom::Dom,
    logging::{log_event, LogLevel},
    parallax::ParallaxBinding,
    particles::Particle,
    scheduler::{Arm, TimerId, Timeline},
    styles::{ensure_style, INTERACTION_STYLES, INTERACTION_STYLES_ID},
    viewport::{PointerState, ViewportClass},
};

const NAVBAR_ID: &str = "navbar";
const HAMBURGER_ID: &str = "hamburger";
const NAV_MENU_ID: &str = "nav-menu";
const CONTACT_FORM_ID: &str = "contact-form";
const PARTICLE_CONTAINER_ID: &str = "particles";

const LOADED_CLASS: &str = "loaded";
const LOADED_DELAY_MS: u32 = 500;

/// Named regions of the host document, resolved once at startup.
pub struct PageRefs<E> {
    pub navbar: Option<E>,
    pub hamburger: Option<E>,
    pub nav_menu: Option<E>,
    pub contact_form: Option<E>,
    pub particle_container: Option<E>,
}

impl<E> PageRefs<E> {
    fn resolve<D: Dom<Element = E>>(dom: &D) -> Self {
        Self {
            navbar: dom.element_by_id(NAVBAR_ID),
            hamburger: dom.element_by_id(HAMBURGER_ID),
            nav_menu: dom.element_by_id(NAV_MENU_ID),
            contact_form: dom.element_by_id(CONTACT_FORM_ID),
            particle_container: dom.element_by_id(PARTICLE_CONTAINER_ID),
        }
    }
}

/// Deferred work. Each variant is run by [`PageController::run_task`] once its
/// timer or frame comes due.
pub enum Task<E> {
    ApplyParallax,
    StartSkillIntro(E),
    SettleSkillIntro(E),
    SettleReveal(E),
    FillSkillBar { bar: E, level: f64 },
    ClearTouch(E),
    SweepGlow(E),
    RemoveRipple(E),
    ShowSent { button: E, label: String },
    ResetForm { button: E, label: String },
    MarkLoaded,
}

pub struct PageController<D: Dom> {
    pub(crate) dom: D,
    pub(crate) config: PageConfig,
    pub(crate) refs: PageRefs<D::Element>,
    pub(crate) viewport: ViewportClass,
    pub(crate) pointer: PointerState,
    pub(crate) frame_pending: bool,
    pub(crate) parallax: Vec<ParallaxBinding<D::Element>>,
    pub(crate) particles: Vec<Particle<D::Element>>,
    pub(crate) form: FormPhase,
    pub(crate) timeline: Timeline<Task<D::Element>>,
    pub(crate) rng: Rng,
}

impl<D: Dom> PageController<D> {
    pub fn start(dom: D, config: PageConfig, rng: Rng) -> Self {
        let refs = PageRefs::resolve(&dom);
        let (width, _) = dom.viewport_size();
        let viewport = ViewportClass::classify(width, config.mobile_breakpoint);

        let mut page = Self {
            dom,
            config,
            refs,
            viewport,
            pointer: PointerState::default(),
            frame_pending: false,
            parallax: Vec::new(),
            particles: Vec::new(),
            form: FormPhase::Idle,
            timeline: Timeline::default(),
            rng,
        };

        page.log(
            LogLevel::Info,
            "page_initialized",
            json!({ "viewport": viewport.as_str(), "width": width }),
        );

        ensure_style(&page.dom, INTERACTION_STYLES_ID, INTERACTION_STYLES);
        page.create_particles();
        page.setup_parallax();
        page.stagger_skill_intro();
        page.timeline.schedule(LOADED_DELAY_MS, Task::MarkLoaded);
        page
    }

    #[cfg(test)]
    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn take_arms(&mut self) -> Vec<Arm> {
        self.timeline.take_arms()
    }

    pub fn fire_timer(&mut self, id: TimerId) {
        if let Some(task) = self.timeline.take_timer(id) {
            self.run_task(task);
        }
    }

    pub fn run_frame(&mut self) {
        for task in self.timeline.take_frame_tasks() {
            self.run_task(task);
        }
    }

    /// Fires every timer due within the next `ms` milliseconds of virtual time,
    /// including timers scheduled by tasks fired along the way.
    #[cfg(test)]
    pub fn advance_by(&mut self, ms: u64) {
        let until = self.timeline.now_ms() + ms;
        while let Some(task) = self.timeline.pop_due(until) {
            self.run_task(task);
        }
        self.timeline.set_now(until);
    }

    fn run_task(&mut self, task: Task<D::Element>) {
        match task {
            Task::ApplyParallax => {
                self.apply_parallax();
                self.frame_pending = false;
            }
            Task::StartSkillIntro(item) => self.start_skill_intro(&item),
            Task::SettleSkillIntro(item) => self.settle_skill_intro(&item),
            Task::SettleReveal(element) => self.settle_reveal(&element),
            Task::FillSkillBar { bar, level } => self.fill_skill_bar(&bar, level),
            Task::ClearTouch(card) => self.clear_touch(&card),
            Task::SweepGlow(glow) => self.sweep_glow(&glow),
            Task::RemoveRipple(ripple) => self.dom.remove(&ripple),
            Task::ShowSent { button, label } => self.show_sent(button, label),
            Task::ResetForm { button, label } => self.reset_form(&button, &label),
            Task::MarkLoaded => {
                if let Some(body) = self.dom.body() {
                    self.dom.add_class(&body, LOADED_CLASS);
                }
            }
        }
    }

    pub fn on_resize(&mut self) {
        let (width, _) = self.dom.viewport_size();
        let previous = self.viewport;
        self.viewport = ViewportClass::classify(width, self.config.mobile_breakpoint);

        match (previous, self.viewport) {
            (ViewportClass::Mobile, ViewportClass::Desktop) => {
                self.create_particles();
                self.setup_parallax();
            }
            (ViewportClass::Desktop, ViewportClass::Mobile) => {
                self.clear_particles();
                self.parallax.clear();
            }
            _ => return,
        }

        self.log(
            LogLevel::Info,
            "viewport_changed",
            json!({ "from": previous.as_str(), "to": self.viewport.as_str(), "width": width }),
        );
    }

    pub fn on_load(&mut self) {
        if let Some(duration_ms) = self.dom.navigation_load_duration() {
            self.log(
                LogLevel::Info,
                "page_loaded",
                json!({ "load_ms": duration_ms }),
            );
        }

        if self.dom.service_worker_supported() {
            self.log(LogLevel::Info, "service_worker_supported", json!({}));
        }
    }

    pub(crate) fn log(&self, level: LogLevel, event: &str, fields: Value) {
        log_event(self.config.log_level, level, event, fields);
    }
}

/// Runs `action` against a controller shared with event callbacks and returns
/// the timers and frames it queued. A controller that is already borrowed
/// drops the action and logs `controller_busy`.
pub fn drive<D: Dom>(
    page: &RefCell<PageController<D>>,
    action: impl FnOnce(&mut PageController<D>),
) -> Vec<Arm> {
    let Ok(mut controller) = page.try_borrow_mut() else {
        log_event(LogLevel::Info, LogLevel::Info, "controller_busy", json!({}));
        return Vec::new();
    };

    action(&mut controller);
    controller.take_arms()
}
