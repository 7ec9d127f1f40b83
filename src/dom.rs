//! The slice of the host document the page controller is allowed to touch.
//!
//! Every lookup is optional: a missing element yields `None` or an empty list
//! and the behavior bound to it is skipped.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Duration between `loadEventStart` and `loadEventEnd`. The entry reports a
/// zero end until the load event has finished, which yields `None`.
pub fn load_event_duration(start_ms: f64, end_ms: f64) -> Option<f64> {
    (end_ms > 0.0 && end_ms >= start_ms).then(|| end_ms - start_ms)
}

pub trait Dom {
    type Element: Clone + PartialEq;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn query_within(&self, root: &Self::Element, selector: &str) -> Vec<Self::Element>;
    fn document_element(&self) -> Option<Self::Element>;
    fn body(&self) -> Option<Self::Element>;

    fn create_element(&self, tag: &str) -> Option<Self::Element>;
    fn append_child(&self, parent: &Self::Element, child: &Self::Element);
    fn remove(&self, element: &Self::Element);
    fn clear_children(&self, element: &Self::Element);
    /// Appends a `<style id=...>` block to the document head.
    fn inject_style(&self, id: &str, css: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn add_class(&self, element: &Self::Element, class: &str);
    fn remove_class(&self, element: &Self::Element, class: &str);
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Inline style value, empty when unset.
    fn style(&self, element: &Self::Element, property: &str) -> String;
    fn set_style(&self, element: &Self::Element, property: &str, value: &str);
    fn text(&self, element: &Self::Element) -> String;
    fn set_text(&self, element: &Self::Element, text: &str);
    fn set_disabled(&self, element: &Self::Element, disabled: bool);

    fn form_value(&self, form: &Self::Element, name: &str) -> Option<String>;
    fn reset_form(&self, form: &Self::Element);

    fn bounding_rect(&self, element: &Self::Element) -> Rect;
    fn offset_top(&self, element: &Self::Element) -> f64;
    fn client_height(&self, element: &Self::Element) -> f64;

    fn viewport_size(&self) -> (f64, f64);
    fn scroll_top(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);

    /// Load duration of the navigation entry once the load event has finished.
    fn navigation_load_duration(&self) -> Option<f64>;
    fn service_worker_supported(&self) -> bool;
}
