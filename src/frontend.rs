use std::{cell::RefCell, rc::Rc};

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, NodeList,
    PerformanceNavigationTiming, ScrollBehavior, ScrollToOptions, Window,
};

use crate::{
    config::PageConfig,
    controller::{drive, PageController},
    dom::{load_event_duration, Dom, Rect},
    interactions::{CTA_BUTTON_SELECTOR, PROJECT_CARD_SELECTOR},
    logging::{log_event, LogLevel},
    reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD},
    scheduler::Arm,
};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const NAV_LINK_SELECTOR: &str = ".nav-link";

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

fn node_list_elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn html_element(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

impl Dom for WebDom {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        node_list_elements(self.document.query_selector_all(selector))
    }

    fn query_within(&self, root: &Element, selector: &str) -> Vec<Element> {
        node_list_elements(root.query_selector_all(selector))
    }

    fn document_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }

    fn clear_children(&self, element: &Element) {
        element.set_inner_html("");
    }

    fn inject_style(&self, id: &str, css: &str) {
        let Some(head) = self.document.head() else {
            return;
        };
        let Ok(style) = self.document.create_element("style") else {
            return;
        };

        style.set_id(id);
        style.set_text_content(Some(css));
        let _ = head.append_child(&style);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn style(&self, element: &Element, property: &str) -> String {
        html_element(element)
            .and_then(|element| element.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        if let Some(element) = html_element(element) {
            let _ = element.style().set_property(property, value);
        }
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_disabled(&self, element: &Element, disabled: bool) {
        let _ = if disabled {
            element.set_attribute("disabled", "")
        } else {
            element.remove_attribute("disabled")
        };
    }

    fn form_value(&self, form: &Element, name: &str) -> Option<String> {
        let form = form.dyn_ref::<HtmlFormElement>()?;
        FormData::new_with_form(form).ok()?.get(name).as_string()
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        html_element(element)
            .map(|element| f64::from(element.offset_top()))
            .unwrap_or(0.0)
    }

    fn client_height(&self, element: &Element) -> f64 {
        f64::from(element.client_height())
    }

    fn viewport_size(&self) -> (f64, f64) {
        let width = self
            .window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(1280.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(720.0);

        (width, height)
    }

    fn scroll_top(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn navigation_load_duration(&self) -> Option<f64> {
        let performance = self.window.performance()?;
        let timing = performance
            .get_entries_by_type("navigation")
            .get(0)
            .dyn_into::<PerformanceNavigationTiming>()
            .ok()?;

        load_event_duration(timing.load_event_start(), timing.load_event_end())
    }

    fn service_worker_supported(&self) -> bool {
        let navigator = self.window.navigator();
        Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false)
    }
}

type SharedPage = Rc<RefCell<PageController<WebDom>>>;

/// Runs `action` against the controller, then arms whatever timers and
/// frames it queued.
fn dispatch(page: &SharedPage, action: impl FnOnce(&mut PageController<WebDom>)) {
    for arm in drive::<WebDom>(page, action) {
        arm_callback(page, arm);
    }
}

fn arm_callback(page: &SharedPage, arm: Arm) {
    match arm {
        Arm::Timer { id, delay_ms } => {
            let page = page.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                dispatch(&page, |controller| controller.fire_timer(id));
            });
        }
        Arm::Frame => {
            let Some(win) = window() else {
                return;
            };
            let page = page.clone();
            let run_frame = move || dispatch(&page, PageController::run_frame);
            let callback = Closure::once_into_js(run_frame);
            let _ = win.request_animation_frame(callback.unchecked_ref());
        }
    }
}

fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn wire_navigation(page: &SharedPage, dom: &WebDom) -> Result<(), JsValue> {
    for anchor in dom.query_all(ANCHOR_SELECTOR) {
        let page = page.clone();
        let href_source = anchor.clone();
        listen(&anchor, "click", move |event: Event| {
            event.prevent_default();
            let href = href_source.get_attribute("href").unwrap_or_default();
            dispatch(&page, |controller| controller.on_anchor_click(&href));
        })?;
    }

    let hamburger = dom.element_by_id("hamburger");
    let menu = dom.element_by_id("nav-menu");
    if let (Some(hamburger), Some(menu)) = (hamburger, menu) {
        let toggle_page = page.clone();
        listen(&hamburger, "click", move |_: Event| {
            dispatch(&toggle_page, PageController::toggle_mobile_menu);
        })?;

        for link in dom.query_within(&menu, NAV_LINK_SELECTOR) {
            let page = page.clone();
            listen(&link, "click", move |_: Event| {
                dispatch(&page, PageController::on_nav_link_click);
            })?;
        }
    }

    Ok(())
}

fn wire_window(page: &SharedPage, dom: &WebDom) -> Result<(), JsValue> {
    let pointer_page = page.clone();
    listen(&dom.document, "mousemove", move |event: MouseEvent| {
        let x = f64::from(event.client_x());
        let y = f64::from(event.client_y());
        dispatch(&pointer_page, |controller| controller.on_pointer_move(x, y));
    })?;

    let scroll_page = page.clone();
    listen(&dom.window, "scroll", move |_: Event| {
        dispatch(&scroll_page, PageController::on_scroll);
    })?;

    let resize_page = page.clone();
    listen(&dom.window, "resize", move |_: Event| {
        dispatch(&resize_page, PageController::on_resize);
    })?;

    if let Some(form) = dom.element_by_id("contact-form") {
        let page = page.clone();
        listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            dispatch(&page, PageController::on_submit);
        })?;
    }

    let scroll_page = page.clone();
    let scroll_to_section = Closure::<dyn FnMut(String)>::new(move |section_id: String| {
        dispatch(&scroll_page, |controller| {
            controller.scroll_to_section(&section_id)
        });
    });
    Reflect::set(
        &dom.window,
        &JsValue::from_str("scrollToSection"),
        scroll_to_section.as_ref(),
    )?;
    scroll_to_section.forget();

    Ok(())
}

fn wire_cards(page: &SharedPage, dom: &WebDom) -> Result<(), JsValue> {
    for card in dom.query_all(PROJECT_CARD_SELECTOR) {
        let handlers: [(&str, fn(&mut PageController<WebDom>, &Element)); 4] = [
            ("mouseenter", PageController::on_card_enter),
            ("mouseleave", PageController::on_card_leave),
            ("touchstart", PageController::on_card_touch_start),
            ("touchend", PageController::on_card_touch_end),
        ];

        for (event_name, handler) in handlers {
            let page = page.clone();
            let target = card.clone();
            listen(&card, event_name, move |_: Event| {
                dispatch(&page, |controller| handler(controller, &target));
            })?;
        }
    }

    for button in dom.query_all(CTA_BUTTON_SELECTOR) {
        let enter_page = page.clone();
        let enter_target = button.clone();
        listen(&button, "mouseenter", move |_: Event| {
            dispatch(&enter_page, |controller| {
                controller.on_cta_enter(&enter_target)
            });
        })?;

        let click_page = page.clone();
        let click_target = button.clone();
        listen(&button, "click", move |event: MouseEvent| {
            let x = f64::from(event.client_x());
            let y = f64::from(event.client_y());
            dispatch(&click_page, |controller| {
                controller.on_cta_click(&click_target, x, y)
            });
        })?;
    }

    Ok(())
}

fn wire_reveal(page: &SharedPage) -> Result<(), JsValue> {
    let targets = page.borrow().reveal_targets();
    if targets.is_empty() {
        return Ok(());
    }

    let observer_page = page.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                observer.unobserve(&target);
                dispatch(&observer_page, |controller| {
                    controller.on_element_visible(&target)
                });
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let handler = callback.as_ref().unchecked_ref();
    let observer = IntersectionObserver::new_with_options(handler, &options)?;
    callback.forget();

    for target in &targets {
        observer.observe(target);
    }

    Ok(())
}

/// Reports load timing one tick later, once `loadEventEnd` is filled in.
fn report_load_soon(page: &SharedPage) {
    let page = page.clone();
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        dispatch(&page, PageController::on_load);
    });
}

fn wire_load(page: &SharedPage, dom: &WebDom) -> Result<(), JsValue> {
    if dom.document.ready_state() == "complete" {
        report_load_soon(page);
        return Ok(());
    }

    let page = page.clone();
    listen(&dom.window, "load", move |_: Event| report_load_soon(&page))
}

fn boot(win: Window, document: Document) -> Result<(), JsValue> {
    let dom = WebDom {
        window: win,
        document,
    };
    let config = PageConfig::from_document(&dom);
    let controller = PageController::start(dom.clone(), config, fastrand::Rng::new());
    let page: SharedPage = Rc::new(RefCell::new(controller));

    // Arms queued during startup.
    dispatch(&page, |_| ());

    wire_navigation(&page, &dom)?;
    wire_window(&page, &dom)?;
    wire_cards(&page, &dom)?;
    wire_reveal(&page)?;
    wire_load(&page, &dom)
}

fn report_boot(result: Result<(), JsValue>) {
    if let Err(error) = result {
        log_event(
            LogLevel::Info,
            LogLevel::Info,
            "boot_failed",
            json!({ "error": format!("{error:?}") }),
        );
    }
}

pub fn run() {
    let Some(win) = window() else {
        return;
    };
    let Some(document) = win.document() else {
        return;
    };

    if document.ready_state() != "loading" {
        report_boot(boot(win, document));
        return;
    }

    let mut pending = Some((win, document.clone()));
    let on_ready = listen(&document, "DOMContentLoaded", move |_: Event| {
        if let Some((win, document)) = pending.take() {
            report_boot(boot(win, document));
        }
    });
    report_boot(on_ready);
}
