//! Scroll-triggered fade-in reveals.

use landing_core::{LandingConfig, MotionPreference, UiElement, FADE_IN_CLASS, VISIBLE_CLASS};

/// One element reported by an intersection callback.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<E> {
    pub target: E,
    pub is_intersecting: bool,
}

/// A reveal to run once `delay_ms` has elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal<E> {
    pub target: E,
    pub delay_ms: u32,
}

/// Observed targets waiting to be revealed. Only constructed when motion is
/// allowed; with reduced motion the page keeps its default, fully visible
/// state and there is nothing to observe.
#[derive(Debug, Clone)]
pub struct FadeInAnimator<E> {
    targets: Vec<E>,
    stagger_ms: u32,
    threshold: f64,
    root_margin: String,
}

impl<E: UiElement> FadeInAnimator<E> {
    /// Tag every target with the fade-in class and pre-assign the card
    /// transition stagger. Returns `None` under reduced motion.
    pub fn new(
        motion: MotionPreference,
        targets: Vec<E>,
        cards: &[E],
        config: &LandingConfig,
    ) -> Option<Self> {
        if motion.is_reduced() {
            return None;
        }

        let mut unique: Vec<E> = Vec::with_capacity(targets.len());
        for target in targets {
            if !unique.contains(&target) {
                target.add_class(FADE_IN_CLASS);
                unique.push(target);
            }
        }

        for (index, card) in cards.iter().enumerate() {
            card.set_style("transition-delay", &config.card_transition_delay(index));
        }

        Some(Self {
            targets: unique,
            stagger_ms: config.fade_stagger_ms,
            threshold: config.fade_threshold,
            root_margin: config.fade_root_margin.clone(),
        })
    }

    /// Elements to hand to the intersection observer.
    pub fn targets(&self) -> &[E] {
        &self.targets
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn root_margin(&self) -> &str {
        &self.root_margin
    }

    /// Stagger the entries of one callback batch by their position in it.
    /// Entries leaving the viewport are skipped; nothing is ever hidden again.
    pub fn schedule(&self, batch: &[IntersectionEntry<E>]) -> Vec<Reveal<E>> {
        batch
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_intersecting)
            .map(|(index, entry)| Reveal {
                target: entry.target.clone(),
                delay_ms: (index as u32).saturating_mul(self.stagger_ms),
            })
            .collect()
    }

    pub fn reveal(target: &E) {
        target.add_class(FADE_IN_CLASS);
        target.add_class(VISIBLE_CLASS);
    }
}
