//! Smooth scrolling for same-page links.

use landing_core::scroll::{scroll_position, AnchorTarget};
use landing_core::{EventDisposition, PageHost, UiElement};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorScroller {
    header_offset: f64,
}

impl AnchorScroller {
    pub fn new(header_offset: f64) -> Self {
        Self { header_offset }
    }

    /// Every `#` link is prevented, even when nothing matches.
    pub fn on_click<H: PageHost>(&self, host: &H, href: &str) -> EventDisposition {
        let Some(target) = AnchorTarget::from_href(href) else {
            return EventDisposition::Allow;
        };

        if let AnchorTarget::Selector(selector) = target {
            match host.query(&selector) {
                Some(element) => {
                    let top = scroll_position(
                        element.viewport_top(),
                        host.scroll_y(),
                        self.header_offset,
                    );
                    host.smooth_scroll_to(top);
                }
                None => log::debug!("No element for anchor {selector}"),
            }
        }

        EventDisposition::PreventDefault
    }
}
