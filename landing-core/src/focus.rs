//! Focusability rules and Tab wrapping for the focus trap.

use crate::UiElement;

/// Tags that take focus without further qualification.
const FOCUSABLE_TAGS: [&str; 4] = ["button", "textarea", "input", "select"];

/// Whether keyboard focus can land on `element`: links with a destination,
/// form controls, and anything with a `tabindex` other than `-1`.
pub fn is_focusable<E: UiElement>(element: &E) -> bool {
    let tag = element.tag_name();
    if tag == "a" && element.attribute("href").is_some() {
        return true;
    }
    if FOCUSABLE_TAGS.contains(&tag.as_str()) {
        return true;
    }
    matches!(element.attribute("tabindex"), Some(index) if index.trim() != "-1")
}

/// Focusable descendants of `container` in document order.
pub fn focusable_descendants<E: UiElement>(container: &E) -> Vec<E> {
    container
        .descendants()
        .into_iter()
        .filter(is_focusable)
        .collect()
}

/// Where focus should move when Tab is pressed at `current` among `count`
/// focusable elements, or `None` to let the browser move it.
pub fn wrap_target(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (current, backwards) {
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}
