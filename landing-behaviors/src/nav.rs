//! Mobile navigation drawer.

use landing_core::{UiElement, ACTIVE_CLASS, MENU_OPEN_CLASS};

const EXPANDED_ATTRIBUTE: &str = "aria-expanded";
const ESCAPE_KEY: &str = "Escape";

/// Opens and closes the drawer behind the hamburger control.
#[derive(Debug, Clone)]
pub struct NavDrawer<E> {
    trigger: E,
    drawer: E,
    body: E,
}

impl<E: UiElement> NavDrawer<E> {
    pub fn new(trigger: E, drawer: E, body: E) -> Self {
        Self {
            trigger,
            drawer,
            body,
        }
    }

    pub fn trigger(&self) -> &E {
        &self.trigger
    }

    pub fn drawer(&self) -> &E {
        &self.drawer
    }

    pub fn is_open(&self) -> bool {
        self.drawer.has_class(ACTIVE_CLASS)
    }

    // each piece flips from its own current value
    pub fn toggle(&self) {
        let expanded = self.trigger.attribute(EXPANDED_ATTRIBUTE).as_deref() == Some("true");
        self.trigger
            .set_attribute(EXPANDED_ATTRIBUTE, if expanded { "false" } else { "true" });
        self.drawer.toggle_class(ACTIVE_CLASS);
        self.body.toggle_class(MENU_OPEN_CLASS);
    }

    pub fn close(&self) {
        self.trigger.set_attribute(EXPANDED_ATTRIBUTE, "false");
        self.drawer.remove_class(ACTIVE_CLASS);
        self.body.remove_class(MENU_OPEN_CLASS);
    }

    pub fn on_link_click(&self) {
        self.close();
    }

    /// `target` is `None` for clicks not coming from an element.
    pub fn on_document_click(&self, target: Option<&E>) {
        if !self.is_open() {
            return;
        }
        let inside = target
            .map(|target| self.drawer.contains(target) || self.trigger.contains(target))
            .unwrap_or(false);
        if !inside {
            self.close();
        }
    }

    pub fn on_keydown(&self, key: &str) {
        if key == ESCAPE_KEY && self.is_open() {
            self.close();
        }
    }
}
