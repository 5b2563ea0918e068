//! Host traits through which behaviors read and mutate the page.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::MotionPreference;

/// A handle to one element of the page. Hosts log failed mutations instead of
/// returning them.
pub trait UiElement: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;

    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    /// Inline style value, empty when unset.
    fn style(&self, property: &str) -> String;
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Lowercase tag name.
    fn tag_name(&self) -> String;
    /// Whether `other` is this element or one of its descendants.
    fn contains(&self, other: &Self) -> bool;
    /// Every descendant element in document order.
    fn descendants(&self) -> Vec<Self>;

    fn focus(&self);
    fn is_focused(&self) -> bool;
    /// Whether the element is still attached to the document.
    fn is_connected(&self) -> bool;
    /// Distance from the viewport top to the element's border box (px).
    fn viewport_top(&self) -> f64;
}

/// Document-level capabilities.
pub trait PageHost {
    type Element: UiElement;

    /// First element matching `selector`; `None` when nothing matches or the
    /// selector is rejected by the host.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
    fn body(&self) -> Option<Self::Element>;
    /// Current vertical scroll position of the page (px).
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

/// Whether the browser should go ahead with an event's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    Allow,
    PreventDefault,
}

impl EventDisposition {
    pub fn is_prevented(self) -> bool {
        self == Self::PreventDefault
    }
}

/// Environmental signals captured once when the page initializes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub motion: MotionPreference,
    pub now: DateTime<Utc>,
    /// Offset of the page's local time from UTC, used for deadlines without one.
    pub local_offset: FixedOffset,
    pub intersection_observer: bool,
}

impl Environment {
    /// Full motion, UTC, intersection observation available.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            motion: MotionPreference::Full,
            now,
            local_offset: utc_offset(),
            intersection_observer: true,
        }
    }

    pub fn with_motion(mut self, motion: MotionPreference) -> Self {
        self.motion = motion;
        self
    }

    pub fn with_local_offset(mut self, local_offset: FixedOffset) -> Self {
        self.local_offset = local_offset;
        self
    }

    pub fn without_intersection_observer(mut self) -> Self {
        self.intersection_observer = false;
        self
    }
}

/// Offset for UTC itself.
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}
