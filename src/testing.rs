//! In-memory host document for native tests.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::dom::{Dom, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const ROOT: NodeId = NodeId(0);
const HEAD: NodeId = NodeId(1);
const BODY: NodeId = NodeId(2);

#[derive(Default)]
struct FakeNode {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    offset_top: f64,
    client_height: f64,
    fields: BTreeMap<String, String>,
}

struct FakeDocument {
    nodes: Vec<FakeNode>,
    viewport: (f64, f64),
    scroll_top: f64,
    scroll_requests: Vec<f64>,
    load_duration: Option<f64>,
    service_worker: bool,
}

impl FakeDocument {
    fn push(&mut self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FakeNode {
            tag: tag.to_string(),
            parent,
            ..FakeNode::default()
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    fn node(&self, id: NodeId) -> &FakeNode {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut FakeNode {
        &mut self.nodes[id.0]
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
    }

    fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if current == ROOT {
                return true;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    /// Pre-order descendants of `root`, excluding `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut ordered = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            ordered.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        ordered
    }

    fn select(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|id| matches_selector(self.node(*id), selector))
            .collect()
    }
}

fn matches_selector(node: &FakeNode, selector: &str) -> bool {
    selector
        .split(',')
        .any(|part| matches_simple_selector(node, part.trim()))
}

fn matches_simple_selector(node: &FakeNode, selector: &str) -> bool {
    let (head, attribute) = match selector.split_once('[') {
        Some((head, rest)) => (head, Some(rest.trim_end_matches(']'))),
        None => (selector, None),
    };

    let head_matches = if let Some(class) = head.strip_prefix('.') {
        node.classes.iter().any(|value| value == class)
    } else if let Some(id) = head.strip_prefix('#') {
        node.attributes.get("id").map(String::as_str) == Some(id)
    } else {
        head.is_empty() || node.tag.eq_ignore_ascii_case(head)
    };

    head_matches && attribute.map_or(true, |test| matches_attribute(node, test))
}

fn matches_attribute(node: &FakeNode, test: &str) -> bool {
    if let Some((name, value)) = test.split_once("^=") {
        node.attributes
            .get(name)
            .is_some_and(|actual| actual.starts_with(unquote(value)))
    } else if let Some((name, value)) = test.split_once('=') {
        node.attributes
            .get(name)
            .is_some_and(|actual| actual == unquote(value))
    } else {
        node.attributes.contains_key(test)
    }
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"').trim_matches('\'')
}

#[derive(Clone)]
pub struct FakeDom {
    document: Rc<RefCell<FakeDocument>>,
}

impl FakeDom {
    pub fn new(width: f64, height: f64) -> Self {
        let mut document = FakeDocument {
            nodes: Vec::new(),
            viewport: (width, height),
            scroll_top: 0.0,
            scroll_requests: Vec::new(),
            load_duration: None,
            service_worker: false,
        };
        document.push("html", None);
        document.push("head", Some(ROOT));
        document.push("body", Some(ROOT));

        Self {
            document: Rc::new(RefCell::new(document)),
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn body_node(&self) -> NodeId {
        BODY
    }

    pub fn node(&self, parent: NodeId, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        let mut document = self.document.borrow_mut();
        let node = document.push(tag, Some(parent));
        let entry = document.node_mut(node);
        if let Some(id) = id {
            entry.attributes.insert("id".to_string(), id.to_string());
        }
        entry.classes = classes.iter().map(ToString::to_string).collect();
        node
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.document
            .borrow_mut()
            .node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_layout(&self, node: NodeId, offset_top: f64, client_height: f64) {
        let mut document = self.document.borrow_mut();
        let entry = document.node_mut(node);
        entry.offset_top = offset_top;
        entry.client_height = client_height;
    }

    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.document.borrow_mut().node_mut(node).rect = rect;
    }

    pub fn set_field(&self, form: NodeId, name: &str, value: &str) {
        self.document
            .borrow_mut()
            .node_mut(form)
            .fields
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_viewport(&self, width: f64, height: f64) {
        self.document.borrow_mut().viewport = (width, height);
    }

    pub fn set_scroll_top(&self, top: f64) {
        self.document.borrow_mut().scroll_top = top;
    }

    pub fn set_load_duration(&self, duration: Option<f64>) {
        self.document.borrow_mut().load_duration = duration;
    }

    pub fn set_service_worker(&self, supported: bool) {
        self.document.borrow_mut().service_worker = supported;
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.document.borrow().node(node).children.clone()
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.document.borrow().node(node).tag.clone()
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        self.document.borrow().is_attached(node)
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.document.borrow().node(node).disabled
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.document.borrow().scroll_requests.clone()
    }

    pub fn head_styles(&self) -> Vec<NodeId> {
        self.document.borrow().node(HEAD).children.clone()
    }
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.document
            .borrow()
            .select(ROOT, &format!("#{id}"))
            .into_iter()
            .next()
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.document
            .borrow()
            .select(ROOT, selector)
            .into_iter()
            .next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.document.borrow().select(ROOT, selector)
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Vec<NodeId> {
        self.document.borrow().select(*root, selector)
    }

    fn document_element(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        Some(self.document.borrow_mut().push(tag, None))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut document = self.document.borrow_mut();
        document.detach(*child);
        document.node_mut(*child).parent = Some(*parent);
        document.node_mut(*parent).children.push(*child);
    }

    fn remove(&self, element: &NodeId) {
        self.document.borrow_mut().detach(*element);
    }

    fn clear_children(&self, element: &NodeId) {
        let mut document = self.document.borrow_mut();
        let children = document.node(*element).children.clone();
        for child in children {
            document.detach(child);
        }
    }

    fn inject_style(&self, id: &str, css: &str) {
        let mut document = self.document.borrow_mut();
        let style = document.push("style", Some(HEAD));
        let entry = document.node_mut(style);
        entry.attributes.insert("id".to_string(), id.to_string());
        entry.text = css.to_string();
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.document
            .borrow()
            .node(*element)
            .classes
            .iter()
            .any(|value| value == class)
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        let mut document = self.document.borrow_mut();
        let classes = &mut document.node_mut(*element).classes;
        if !classes.iter().any(|value| value == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        self.document
            .borrow_mut()
            .node_mut(*element)
            .classes
            .retain(|value| value != class);
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.document
            .borrow()
            .node(*element)
            .attributes
            .get(name)
            .cloned()
    }

    fn style(&self, element: &NodeId, property: &str) -> String {
        self.document
            .borrow()
            .node(*element)
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        let mut document = self.document.borrow_mut();
        let styles = &mut document.node_mut(*element).styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_string(), value.to_string());
        }
    }

    fn text(&self, element: &NodeId) -> String {
        self.document.borrow().node(*element).text.clone()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.document.borrow_mut().node_mut(*element).text = text.to_string();
    }

    fn set_disabled(&self, element: &NodeId, disabled: bool) {
        self.document.borrow_mut().node_mut(*element).disabled = disabled;
    }

    fn form_value(&self, form: &NodeId, name: &str) -> Option<String> {
        self.document.borrow().node(*form).fields.get(name).cloned()
    }

    fn reset_form(&self, form: &NodeId) {
        let mut document = self.document.borrow_mut();
        for value in document.node_mut(*form).fields.values_mut() {
            value.clear();
        }
    }

    fn bounding_rect(&self, element: &NodeId) -> Rect {
        self.document.borrow().node(*element).rect
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.document.borrow().node(*element).offset_top
    }

    fn client_height(&self, element: &NodeId) -> f64 {
        self.document.borrow().node(*element).client_height
    }

    fn viewport_size(&self) -> (f64, f64) {
        self.document.borrow().viewport
    }

    fn scroll_top(&self) -> f64 {
        self.document.borrow().scroll_top
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.document.borrow_mut().scroll_requests.push(top);
    }

    fn navigation_load_duration(&self) -> Option<f64> {
        self.document.borrow().load_duration
    }

    fn service_worker_supported(&self) -> bool {
        self.document.borrow().service_worker
    }
}

/// Handles to a complete portfolio page built inside a [`FakeDom`].
pub struct PortfolioPage {
    pub dom: FakeDom,
    pub navbar: NodeId,
    pub hamburger: NodeId,
    pub bars: Vec<NodeId>,
    pub nav_menu: NodeId,
    pub nav_links: Vec<NodeId>,
    pub sections: Vec<NodeId>,
    pub clouds: Vec<NodeId>,
    pub servers: Vec<NodeId>,
    pub hero_visual: NodeId,
    pub particles: NodeId,
    pub skill_items: Vec<NodeId>,
    pub skill_bars: Vec<NodeId>,
    pub project_cards: Vec<NodeId>,
    pub about_card: NodeId,
    pub contact_card: NodeId,
    pub cta: NodeId,
    pub cta_glow: NodeId,
    pub form: NodeId,
    pub submit: NodeId,
}

impl PortfolioPage {
    pub fn build(width: f64) -> Self {
        let dom = FakeDom::new(width, 800.0);
        let body = dom.body_node();

        let navbar = dom.node(body, "nav", Some("navbar"), &["navbar"]);
        let nav_menu = dom.node(navbar, "ul", Some("nav-menu"), &["nav-menu"]);
        let nav_links = ["about", "projects", "contact"]
            .iter()
            .map(|target| {
                let link = dom.node(nav_menu, "a", None, &["nav-link"]);
                dom.set_attribute(link, "href", &format!("#{target}"));
                link
            })
            .collect();
        let hamburger = dom.node(navbar, "div", Some("hamburger"), &["hamburger"]);
        let bars = (0..3).map(|_| dom.node(hamburger, "span", None, &["bar"])).collect();

        let hero = dom.node(body, "header", None, &["hero"]);
        let hero_visual = dom.node(hero, "div", None, &["hero-visual"]);
        let clouds = (1..=4)
            .map(|index| {
                let class = format!("cloud-{index}");
                let classes = ["floating-cloud", class.as_str()];
                dom.node(hero_visual, "div", None, &classes)
            })
            .collect();
        let servers = (1..=2)
            .map(|index| {
                let class = format!("server-{index}");
                dom.node(hero_visual, "div", None, &["server-rack", class.as_str()])
            })
            .collect();
        let particles = dom.node(hero, "div", Some("particles"), &[]);
        let cta = dom.node(hero, "button", None, &["cta-button"]);
        let cta_glow = dom.node(cta, "span", None, &["btn-glow"]);
        dom.set_rect(
            cta,
            Rect {
                left: 100.0,
                top: 200.0,
                width: 160.0,
                height: 48.0,
            },
        );

        let about = dom.node(body, "section", Some("about"), &[]);
        dom.set_layout(about, 100.0, 300.0);
        let about_card = dom.node(about, "div", None, &["about-card"]);
        let skill_items: Vec<NodeId> = ["90", "75"]
            .iter()
            .map(|level| {
                let item = dom.node(about, "div", None, &["skill-item"]);
                dom.set_attribute(item, "data-level", level);
                item
            })
            .collect();
        let skill_bars = skill_items
            .iter()
            .map(|item| dom.node(*item, "div", None, &["skill-progress"]))
            .collect();

        let projects = dom.node(body, "section", Some("projects"), &[]);
        dom.set_layout(projects, 400.0, 400.0);
        let project_cards = (0..2)
            .map(|_| dom.node(projects, "article", None, &["project-card"]))
            .collect();

        let contact = dom.node(body, "section", Some("contact"), &[]);
        dom.set_layout(contact, 800.0, 500.0);
        let contact_card = dom.node(contact, "div", None, &["contact-card"]);
        let form = dom.node(contact, "form", Some("contact-form"), &[]);
        dom.set_field(form, "name", "Ada Lovelace");
        dom.set_field(form, "email", "ada@example.com");
        dom.set_field(form, "message", "Hello there");
        let submit = dom.node(form, "button", None, &[]);
        dom.set_attribute(submit, "type", "submit");
        dom.set_text(&submit, "Send Message");

        Self {
            dom,
            navbar,
            hamburger,
            bars,
            nav_menu,
            nav_links,
            sections: vec![about, projects, contact],
            clouds,
            servers,
            hero_visual,
            particles,
            skill_items,
            skill_bars,
            project_cards,
            about_card,
            contact_card,
            cta,
            cta_glow,
            form,
            submit,
        }
    }
}
