//! Reduced-motion preference and the pointer feedback transforms it gates.

use serde::{Deserialize, Serialize};

/// Media query a browser matches when the user asked for less motion.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduced
    }
}

/// Pointer transitions the hover feedback reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Enter,
    Leave,
    Press,
    Release,
}

impl PointerPhase {
    /// Map a DOM event type (`mouseenter`, `mouseleave`, ...) to a phase.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "mouseenter" => Some(Self::Enter),
            "mouseleave" => Some(Self::Leave),
            "mousedown" => Some(Self::Press),
            "mouseup" => Some(Self::Release),
            _ => None,
        }
    }

    pub fn event_type(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
            Self::Press => "mousedown",
            Self::Release => "mouseup",
        }
    }
}

/// Inline transform for a button. Leaving always resets, whatever the
/// preference.
pub fn button_transform(phase: PointerPhase, motion: MotionPreference) -> Option<&'static str> {
    match phase {
        PointerPhase::Leave => Some("scale(1)"),
        _ if motion.is_reduced() => None,
        PointerPhase::Enter | PointerPhase::Release => Some("scale(1.05)"),
        PointerPhase::Press => Some("scale(0.98)"),
    }
}

/// Inline transform for a card. Cards only react to enter and leave.
pub fn card_transform(phase: PointerPhase, motion: MotionPreference) -> Option<&'static str> {
    match phase {
        PointerPhase::Leave => Some("translateY(0)"),
        PointerPhase::Enter if !motion.is_reduced() => Some("translateY(-10px)"),
        _ => None,
    }
}
