//! Anchor destinations and header-compensated scroll positions.

/// What a same-page link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    /// Bare `#`: nothing to scroll to.
    Top,
    /// Any other fragment, kept with its leading `#` so it can be queried.
    Selector(String),
}

impl AnchorTarget {
    /// Classify an `href`; `None` for links leaving the page.
    pub fn from_href(href: &str) -> Option<Self> {
        if !href.starts_with('#') {
            return None;
        }
        if href == "#" {
            return Some(Self::Top);
        }
        Some(Self::Selector(href.to_string()))
    }
}

/// Document scroll position that puts an element `header_offset` pixels below
/// the viewport top.
pub fn scroll_position(element_viewport_top: f64, page_scroll_y: f64, header_offset: f64) -> f64 {
    element_viewport_top + page_scroll_y - header_offset
}
