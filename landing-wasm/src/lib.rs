//! Framework-neutral WASM <-> JavaScript bridge.

use chrono::{DateTime, FixedOffset, Utc};
use landing_core::{Countdown, Deadline, FilterKey, LandingConfig, LandingError};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Partial configuration accepted from JavaScript; unset fields keep their
/// defaults.
#[derive(Debug, Default, Deserialize)]
pub struct JsLandingConfig {
    #[serde(default)]
    pub nav_trigger: Option<String>,
    #[serde(default)]
    pub nav_drawer: Option<String>,
    #[serde(default)]
    pub nav_links: Option<String>,
    #[serde(default)]
    pub fade_selectors: Option<Vec<String>>,
    #[serde(default)]
    pub card: Option<String>,
    #[serde(default)]
    pub timer: Option<String>,
    #[serde(default)]
    pub deadline_attribute: Option<String>,
    #[serde(default)]
    pub anchor: Option<String>,
    #[serde(default)]
    pub button: Option<String>,
    #[serde(default)]
    pub lazy_image: Option<String>,
    #[serde(default)]
    pub deferred_source_attribute: Option<String>,
    #[serde(default)]
    pub footer_toggle: Option<String>,
    #[serde(default)]
    pub footer_links: Option<String>,
    #[serde(default)]
    pub filter_control: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub header_offset: Option<f64>,
    #[serde(default)]
    pub fade_threshold: Option<f64>,
    #[serde(default)]
    pub fade_root_margin: Option<String>,
    #[serde(default)]
    pub fade_stagger_ms: Option<u32>,
    #[serde(default)]
    pub card_transition_stagger_secs: Option<f64>,
    #[serde(default)]
    pub countdown_tick_ms: Option<u32>,
}

impl From<JsLandingConfig> for LandingConfig {
    fn from(cfg: JsLandingConfig) -> Self {
        let mut base = LandingConfig::default();
        let strings = [
            (cfg.nav_trigger, &mut base.nav_trigger),
            (cfg.nav_drawer, &mut base.nav_drawer),
            (cfg.nav_links, &mut base.nav_links),
            (cfg.card, &mut base.card),
            (cfg.timer, &mut base.timer),
            (cfg.deadline_attribute, &mut base.deadline_attribute),
            (cfg.anchor, &mut base.anchor),
            (cfg.button, &mut base.button),
            (cfg.lazy_image, &mut base.lazy_image),
            (cfg.deferred_source_attribute, &mut base.deferred_source_attribute),
            (cfg.footer_toggle, &mut base.footer_toggle),
            (cfg.footer_links, &mut base.footer_links),
            (cfg.filter_control, &mut base.filter_control),
            (cfg.year, &mut base.year),
            (cfg.fade_root_margin, &mut base.fade_root_margin),
        ];
        for (value, slot) in strings {
            if let Some(value) = value {
                *slot = value;
            }
        }

        let numbers = [
            (cfg.header_offset, &mut base.header_offset),
            (cfg.fade_threshold, &mut base.fade_threshold),
            (
                cfg.card_transition_stagger_secs,
                &mut base.card_transition_stagger_secs,
            ),
        ];
        for (value, slot) in numbers {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(fade_selectors) = cfg.fade_selectors {
            base.fade_selectors = fade_selectors;
        }
        if let Some(stagger) = cfg.fade_stagger_ms {
            base.fade_stagger_ms = stagger;
        }
        if let Some(tick) = cfg.countdown_tick_ms {
            base.countdown_tick_ms = tick;
        }
        base
    }
}

/// Read an optional JS config object and validate the merged result.
pub fn config_from_js(config: Option<JsValue>) -> Result<LandingConfig, JsValue> {
    let cfg = match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsLandingConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            LandingConfig::from(cfg)
        }
        _ => LandingConfig::default(),
    };
    cfg.validate()
        .map_err(|err| JsValue::from_str(&format_landing_error(err)))?;
    Ok(cfg)
}

/// Convert `Date.prototype.getTimezoneOffset()` (minutes behind UTC) into an
/// offset. Out-of-range values fall back to UTC.
pub fn local_offset_from_js(timezone_offset_minutes: i32) -> FixedOffset {
    FixedOffset::west_opt(timezone_offset_minutes.saturating_mul(60))
        .unwrap_or_else(landing_core::dom::utc_offset)
}

/// Convert `Date.now()` into an instant.
pub fn instant_from_js(now_ms: f64) -> Result<DateTime<Utc>, LandingError> {
    if !now_ms.is_finite() {
        return Err(LandingError::Host(format!("invalid clock value {now_ms}")));
    }
    DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| LandingError::Host(format!("clock value {now_ms} out of range")))
}

/// Countdown text for `end_time` at `now`.
pub fn render_countdown(
    end_time: &str,
    now: DateTime<Utc>,
    local_offset: FixedOffset,
) -> Result<String, LandingError> {
    let deadline = Deadline::parse(end_time, local_offset)?;
    Ok(Countdown::between(&deadline, now).to_string())
}

#[wasm_bindgen]
pub fn resolve_config(config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cfg = config_from_js(config)?;
    to_value(&cfg).map_err(|err| JsValue::from_str(&format!("Could not serialize config: {err}")))
}

#[wasm_bindgen]
pub fn format_countdown(
    end_time: &str,
    now_ms: f64,
    timezone_offset_minutes: i32,
) -> Result<String, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let now = instant_from_js(now_ms).map_err(|err| JsValue::from_str(&format_landing_error(err)))?;
    render_countdown(end_time, now, local_offset_from_js(timezone_offset_minutes))
        .map_err(|err| JsValue::from_str(&format_landing_error(err)))
}

#[wasm_bindgen]
pub fn filter_key(label: &str) -> String {
    FilterKey::from_label(label).to_string()
}

/// Render an error the way every export reports it to JavaScript.
pub fn format_landing_error(err: LandingError) -> String {
    format!("Landing error: {err}")
}
