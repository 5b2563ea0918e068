//! Host-neutral building blocks for the landing page interaction layer.

pub mod config;
pub mod countdown;
pub mod dom;
pub mod filter;
pub mod focus;
#[cfg(feature = "mock")]
pub mod mock;
pub mod motion;
pub mod scroll;

pub use config::LandingConfig;
pub use countdown::{Countdown, Deadline};
pub use dom::{EventDisposition, Environment, PageHost, UiElement};
pub use filter::FilterKey;
pub use motion::{MotionPreference, PointerPhase};

/// Class toggled on the drawer, the footer toggle and the selected filter control.
pub const ACTIVE_CLASS: &str = "active";
/// Class toggled on the body while the drawer is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";
/// Base class for elements waiting to be revealed.
pub const FADE_IN_CLASS: &str = "fade-in";
/// Class added when an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";
/// Class added to filtered-out cards.
pub const HIDDEN_CLASS: &str = "hidden";

/// Errors raised while resolving or configuring the page.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LandingError {
    #[error("Required element not found: {0}")]
    MissingElement(String),
    #[error("Unreadable deadline {raw:?}")]
    InvalidDeadline { raw: String },
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Host error: {0}")]
    Host(String),
}
