//! Footer link group toggle.

use landing_core::{UiElement, ACTIVE_CLASS};

#[derive(Debug, Clone)]
pub struct FooterDropdown<E> {
    toggle: E,
    links: Vec<E>,
}

impl<E: UiElement> FooterDropdown<E> {
    pub fn new(toggle: E, links: Vec<E>) -> Self {
        Self { toggle, links }
    }

    pub fn toggle_element(&self) -> &E {
        &self.toggle
    }

    /// Flip every link's inline display. Anything but `block`, including no
    /// inline value at all, becomes `block`.
    pub fn on_click(&self) {
        self.toggle.toggle_class(ACTIVE_CLASS);
        for link in &self.links {
            let next = if link.style("display") == "block" {
                "none"
            } else {
                "block"
            };
            link.set_style("display", next);
        }
    }
}
