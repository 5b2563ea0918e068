//! Selectors, attribute names and tuning constants for every behavior.

use serde::{Deserialize, Serialize};

use crate::LandingError;

/// Page wiring configuration. Every field has a default matching the stock
/// landing page markup, so a partial JSON object is enough to override one
/// selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LandingConfig {
    pub nav_trigger: String,
    pub nav_drawer: String,
    pub nav_links: String,
    /// Selectors revealed on scroll.
    pub fade_selectors: Vec<String>,
    pub card: String,
    pub timer: String,
    /// Attribute holding each timer's deadline.
    pub deadline_attribute: String,
    pub anchor: String,
    pub button: String,
    pub lazy_image: String,
    /// Attribute holding the deferred image source.
    pub deferred_source_attribute: String,
    pub footer_toggle: String,
    pub footer_links: String,
    pub filter_control: String,
    pub year: String,
    /// Fixed header height compensated when scrolling to an anchor (px).
    pub header_offset: f64,
    pub fade_threshold: f64,
    pub fade_root_margin: String,
    /// Delay between reveals of elements that intersect together (ms).
    pub fade_stagger_ms: u32,
    /// Transition delay step pre-assigned to each card (s).
    pub card_transition_stagger_secs: f64,
    pub countdown_tick_ms: u32,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            nav_trigger: ".hamburger".to_string(),
            nav_drawer: ".mobile-nav".to_string(),
            nav_links: ".mobile-nav-link".to_string(),
            fade_selectors: vec![
                ".why-different".to_string(),
                ".explore-artwork".to_string(),
                ".nft-card".to_string(),
                ".partners".to_string(),
            ],
            card: ".nft-card".to_string(),
            timer: ".timer-value".to_string(),
            deadline_attribute: "data-end-time".to_string(),
            anchor: "a[href^=\"#\"]".to_string(),
            button: ".btn".to_string(),
            lazy_image: "img[data-src]".to_string(),
            deferred_source_attribute: "data-src".to_string(),
            footer_toggle: "#city".to_string(),
            footer_links: ".foot-cont-three a".to_string(),
            filter_control: ".filter-btn".to_string(),
            year: "#year".to_string(),
            header_offset: 80.0,
            fade_threshold: 0.15,
            fade_root_margin: "0px 0px -50px 0px".to_string(),
            fade_stagger_ms: 100,
            card_transition_stagger_secs: 0.1,
            countdown_tick_ms: 1000,
        }
    }
}

impl LandingConfig {
    /// Check the values a browser would reject or that would make a behavior spin.
    pub fn validate(&self) -> Result<(), LandingError> {
        if self.countdown_tick_ms == 0 {
            return Err(LandingError::Config(
                "countdown_tick_ms must be greater than zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.fade_threshold) {
            return Err(LandingError::Config(format!(
                "fade_threshold must be within [0, 1], received {}",
                self.fade_threshold
            )));
        }

        if self.header_offset.is_nan() || self.card_transition_stagger_secs.is_nan() {
            return Err(LandingError::Config(
                "header_offset and card_transition_stagger_secs must be numbers".to_string(),
            ));
        }

        let selectors = [
            ("nav_trigger", &self.nav_trigger),
            ("nav_drawer", &self.nav_drawer),
            ("nav_links", &self.nav_links),
            ("card", &self.card),
            ("timer", &self.timer),
            ("anchor", &self.anchor),
            ("button", &self.button),
            ("lazy_image", &self.lazy_image),
            ("footer_toggle", &self.footer_toggle),
            ("footer_links", &self.footer_links),
            ("filter_control", &self.filter_control),
            ("year", &self.year),
        ];
        for (field, selector) in selectors {
            if selector.trim().is_empty() {
                return Err(LandingError::Config(format!("{field} selector is empty")));
            }
        }

        if let Some(index) = self
            .fade_selectors
            .iter()
            .position(|selector| selector.trim().is_empty())
        {
            return Err(LandingError::Config(format!(
                "fade_selectors[{index}] is empty"
            )));
        }

        if self.deadline_attribute.trim().is_empty()
            || self.deferred_source_attribute.trim().is_empty()
        {
            return Err(LandingError::Config(
                "attribute names must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Transition delay pre-assigned to the card at `index`, as a CSS value.
    pub fn card_transition_delay(&self, index: usize) -> String {
        let secs = index as f64 * self.card_transition_stagger_secs;
        // Round away float noise such as 0.30000000000000004.
        let secs = (secs * 1000.0).round() / 1000.0;
        format!("{secs}s")
    }
}
