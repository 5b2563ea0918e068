#![cfg(target_arch = "wasm32")]

use landing_core::motion::REDUCED_MOTION_QUERY;
use landing_core::{Environment, LandingError, MotionPreference, PageHost, UiElement};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, Node, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

/// A live DOM element.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement(Element);

impl PageElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl UiElement for PageElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            log::warn!("Could not add class {class}: {err:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            log::warn!("Could not remove class {class}: {err:?}");
        }
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or_else(|err| {
            log::warn!("Could not toggle class {class}: {err:?}");
            self.has_class(class)
        })
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(err) = self.0.class_list().toggle_with_force(class, present) {
            log::warn!("Could not set class {class}: {err:?}");
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log::warn!("Could not set attribute {name}: {err:?}");
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = self.0.remove_attribute(name) {
            log::warn!("Could not remove attribute {name}: {err:?}");
        }
    }

    fn style(&self, property: &str) -> String {
        self.html()
            .and_then(|html| html.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(html) = self.html() else {
            log::debug!("Skipping inline {property} on a non-HTML element");
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("Could not set {property}: {err:?}");
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn tag_name(&self) -> String {
        self.0.tag_name().to_lowercase()
    }

    fn contains(&self, other: &Self) -> bool {
        let node: &Node = other.0.as_ref();
        self.0.contains(Some(node))
    }

    fn descendants(&self) -> Vec<Self> {
        match self.0.query_selector_all("*") {
            Ok(nodes) => elements(&nodes),
            Err(err) => {
                log::warn!("Could not list descendants: {err:?}");
                Vec::new()
            }
        }
    }

    fn focus(&self) {
        if let Some(html) = self.html() {
            if let Err(err) = html.focus() {
                log::warn!("Could not move focus: {err:?}");
            }
        }
    }

    fn is_focused(&self) -> bool {
        self.0
            .owner_document()
            .and_then(|document| document.active_element())
            .map_or(false, |active| active == self.0)
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }

    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }
}

/// The browser window and its document.
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    pub fn new() -> Result<Self, LandingError> {
        let window =
            web_sys::window().ok_or_else(|| LandingError::Host("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| LandingError::Host("no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Capture the clock, timezone, motion preference and observer support.
    pub fn environment(&self) -> Result<Environment, LandingError> {
        let reduced = self
            .window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map_or(false, |query| query.matches());
        let timezone_offset = js_sys::Date::new_0().get_timezone_offset();
        let intersection_observer =
            js_sys::Reflect::has(&self.window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);

        Ok(Environment {
            motion: MotionPreference::from_reduced(reduced),
            now: landing_wasm::instant_from_js(js_sys::Date::now())?,
            local_offset: landing_wasm::local_offset_from_js(timezone_offset as i32),
            intersection_observer,
        })
    }
}

impl PageHost for BrowserHost {
    type Element = PageElement;

    fn query(&self, selector: &str) -> Option<PageElement> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(PageElement::new),
            Err(err) => {
                log::warn!("{}", invalid_selector(selector, &err));
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<PageElement> {
        match self.document.query_selector_all(selector) {
            Ok(nodes) => elements(&nodes),
            Err(err) => {
                log::warn!("{}", invalid_selector(selector, &err));
                Vec::new()
            }
        }
    }

    fn body(&self) -> Option<PageElement> {
        self.document
            .body()
            .map(|body| PageElement::new(Element::from(body)))
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

fn elements(nodes: &NodeList) -> Vec<PageElement> {
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(PageElement::new)
        .collect()
}

fn invalid_selector(selector: &str, err: &JsValue) -> LandingError {
    LandingError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    }
}
