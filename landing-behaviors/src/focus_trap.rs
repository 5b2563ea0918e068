//! Keeps Tab focus inside the open drawer.

use landing_core::focus::{focusable_descendants, wrap_target};
use landing_core::{EventDisposition, UiElement, ACTIVE_CLASS};

const TAB_KEY: &str = "Tab";

/// Result of a class change on the trapped container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapActivation {
    /// The container is not active; nothing changed.
    Inactive,
    /// First activation: the keydown listener must be attached now.
    Installed,
    /// Already installed; the focusable list was recomputed.
    Refreshed,
}

/// Focus trap over one container. The keydown listener is installed at most
/// once per container no matter how many times the drawer opens.
#[derive(Debug, Clone)]
pub struct FocusTrap<E> {
    container: E,
    focusables: Vec<E>,
    installed: bool,
}

impl<E: UiElement> FocusTrap<E> {
    pub fn new(container: E) -> Self {
        Self {
            container,
            focusables: Vec::new(),
            installed: false,
        }
    }

    pub fn container(&self) -> &E {
        &self.container
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// React to a class mutation on the container.
    pub fn on_class_mutation(&mut self) -> TrapActivation {
        if !self.container.has_class(ACTIVE_CLASS) {
            return TrapActivation::Inactive;
        }

        self.focusables = focusable_descendants(&self.container);
        if self.installed {
            TrapActivation::Refreshed
        } else {
            self.installed = true;
            TrapActivation::Installed
        }
    }

    pub fn on_keydown(&self, key: &str, shift: bool) -> EventDisposition {
        if key != TAB_KEY {
            return EventDisposition::Allow;
        }

        let current = self.focusables.iter().position(|element| element.is_focused());
        match wrap_target(self.focusables.len(), current, shift) {
            Some(target) => {
                self.focusables[target].focus();
                EventDisposition::PreventDefault
            }
            None => EventDisposition::Allow,
        }
    }
}
