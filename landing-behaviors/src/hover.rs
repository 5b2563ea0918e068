//! Pointer feedback for buttons and cards.

use landing_core::motion::{button_transform, card_transform};
use landing_core::{MotionPreference, PointerPhase, UiElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Button,
    Card,
}

/// Applies inline transforms on pointer transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverFeedback {
    motion: MotionPreference,
}

impl HoverFeedback {
    pub fn new(motion: MotionPreference) -> Self {
        Self { motion }
    }

    /// Pointer phases a [`FeedbackKind`] listens for.
    pub fn phases(kind: FeedbackKind) -> &'static [PointerPhase] {
        match kind {
            FeedbackKind::Button => &[
                PointerPhase::Enter,
                PointerPhase::Leave,
                PointerPhase::Press,
                PointerPhase::Release,
            ],
            FeedbackKind::Card => &[PointerPhase::Enter, PointerPhase::Leave],
        }
    }

    pub fn on_pointer<E: UiElement>(&self, kind: FeedbackKind, element: &E, phase: PointerPhase) {
        let transform = match kind {
            FeedbackKind::Button => button_transform(phase, self.motion),
            FeedbackKind::Card => card_transform(phase, self.motion),
        };
        if let Some(transform) = transform {
            element.set_style("transform", transform);
        }
    }
}
