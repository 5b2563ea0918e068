//! In-memory page for tests (`mock` feature).
//!
//! Selectors are not parsed: elements are registered under the selector strings
//! a behavior will query, which keeps fixtures explicit about what each query
//! returns.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::dom::{PageHost, UiElement};

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    connected: bool,
    viewport_top: f64,
}

#[derive(Debug, Default)]
struct DocumentState {
    nodes: Vec<NodeData>,
    registry: Vec<(String, usize)>,
    focused: Option<usize>,
    scroll_y: f64,
    scroll_requests: Vec<f64>,
}

impl DocumentState {
    fn push(&mut self, tag: &str, parent: Option<usize>) -> usize {
        let id = self.nodes.len();
        self.nodes.push(NodeData {
            tag: tag.to_lowercase(),
            parent,
            connected: true,
            ..NodeData::default()
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    fn collect_descendants(&self, id: usize, out: &mut Vec<usize>) {
        for &child in &self.nodes[id].children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }
}

const BODY: usize = 0;

/// A fake document rooted at a `<body>` element.
#[derive(Clone)]
pub struct MockDocument {
    state: Rc<RefCell<DocumentState>>,
}

impl Default for MockDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockDocument")
            .field("nodes", &self.state.borrow().nodes.len())
            .finish()
    }
}

impl MockDocument {
    pub fn new() -> Self {
        let mut state = DocumentState::default();
        state.push("body", None);
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    fn handle(&self, id: usize) -> MockElement {
        MockElement {
            id,
            state: Rc::clone(&self.state),
        }
    }

    /// Create an element appended to the body.
    pub fn create(&self, tag: &str) -> MockElement {
        let id = self.state.borrow_mut().push(tag, Some(BODY));
        self.handle(id)
    }

    /// Make `element` one of the results for `selector`, after any registered
    /// before it.
    pub fn register(&self, selector: &str, element: &MockElement) {
        self.state
            .borrow_mut()
            .registry
            .push((selector.to_string(), element.id));
    }

    pub fn body_element(&self) -> MockElement {
        self.handle(BODY)
    }

    pub fn focused(&self) -> Option<MockElement> {
        let focused = self.state.borrow().focused;
        focused.map(|id| self.handle(id))
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.state.borrow_mut().scroll_y = scroll_y;
    }

    /// Every position passed to [`PageHost::smooth_scroll_to`], oldest first.
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.state.borrow().scroll_requests.clone()
    }
}

impl PageHost for MockDocument {
    type Element = MockElement;

    fn query(&self, selector: &str) -> Option<MockElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<MockElement> {
        let ids: Vec<usize> = self
            .state
            .borrow()
            .registry
            .iter()
            .filter(|(registered, _)| registered == selector)
            .map(|(_, id)| *id)
            .collect();
        ids.into_iter().map(|id| self.handle(id)).collect()
    }

    fn body(&self) -> Option<MockElement> {
        Some(self.body_element())
    }

    fn scroll_y(&self) -> f64 {
        self.state.borrow().scroll_y
    }

    fn smooth_scroll_to(&self, top: f64) {
        let mut state = self.state.borrow_mut();
        state.scroll_requests.push(top);
        state.scroll_y = top;
    }
}

/// Handle to a node of a [`MockDocument`].
#[derive(Clone)]
pub struct MockElement {
    id: usize,
    state: Rc<RefCell<DocumentState>>,
}

impl PartialEq for MockElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for MockElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        let node = &state.nodes[self.id];
        f.debug_struct("MockElement")
            .field("id", &self.id)
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .finish()
    }
}

impl MockElement {
    /// Create a child element of this one.
    pub fn child(&self, tag: &str) -> MockElement {
        let id = self.state.borrow_mut().push(tag, Some(self.id));
        MockElement {
            id,
            state: Rc::clone(&self.state),
        }
    }

    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn set_viewport_top(&self, top: f64) {
        self.state.borrow_mut().nodes[self.id].viewport_top = top;
    }

    /// Detach the element and its subtree from the document.
    pub fn detach(&self) {
        let mut state = self.state.borrow_mut();
        if let Some(parent) = state.nodes[self.id].parent.take() {
            state.nodes[parent].children.retain(|child| *child != self.id);
        }
        let mut subtree = vec![self.id];
        state.collect_descendants(self.id, &mut subtree);
        for id in subtree {
            state.nodes[id].connected = false;
        }
    }
}

impl UiElement for MockElement {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().nodes[self.id]
            .classes
            .iter()
            .any(|existing| existing == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.state.borrow_mut().nodes[self.id]
                .classes
                .push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.state.borrow_mut().nodes[self.id]
            .classes
            .retain(|existing| existing != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let present = !self.has_class(class);
        self.set_class(class, present);
        present
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().nodes[self.id]
            .attributes
            .get(name)
            .cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state.borrow_mut().nodes[self.id]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.borrow_mut().nodes[self.id]
            .attributes
            .remove(name);
    }

    fn style(&self, property: &str) -> String {
        self.state.borrow().nodes[self.id]
            .styles
            .get(property)
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        self.state.borrow_mut().nodes[self.id]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.state.borrow().nodes[self.id].text.clone()
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().nodes[self.id].text = text.to_string();
    }

    fn tag_name(&self) -> String {
        self.state.borrow().nodes[self.id].tag.clone()
    }

    fn contains(&self, other: &Self) -> bool {
        if !Rc::ptr_eq(&self.state, &other.state) {
            return false;
        }
        let state = self.state.borrow();
        let mut cursor = Some(other.id);
        while let Some(id) = cursor {
            if id == self.id {
                return true;
            }
            cursor = state.nodes[id].parent;
        }
        false
    }

    fn descendants(&self) -> Vec<Self> {
        let mut ids = Vec::new();
        self.state.borrow().collect_descendants(self.id, &mut ids);
        ids.into_iter()
            .map(|id| MockElement {
                id,
                state: Rc::clone(&self.state),
            })
            .collect()
    }

    fn focus(&self) {
        self.state.borrow_mut().focused = Some(self.id);
    }

    fn is_focused(&self) -> bool {
        self.state.borrow().focused == Some(self.id)
    }

    fn is_connected(&self) -> bool {
        self.state.borrow().nodes[self.id].connected
    }

    fn viewport_top(&self) -> f64 {
        self.state.borrow().nodes[self.id].viewport_top
    }
}
