use chrono::{FixedOffset, TimeZone, Utc};
use landing_core::{LandingConfig, LandingError};
use landing_wasm::{
    filter_key, instant_from_js, local_offset_from_js, render_countdown, JsLandingConfig,
};

#[test]
fn js_config_overrides_only_given_fields() {
    let js: JsLandingConfig = serde_json::from_str(
        r##"{ "header_offset": 96, "filter_control": ".tab", "fade_selectors": [".hero"],
             "button": ".cta", "year": "#copyright", "fade_threshold": 0.5,
             "lazy_image": "img.lazy" }"##,
    )
    .expect("Config JSON is invalid");
    let config = LandingConfig::from(js);

    assert_eq!(config.button, ".cta");
    assert_eq!(config.year, "#copyright");
    assert_eq!(config.fade_threshold, 0.5);
    assert_eq!(config.lazy_image, "img.lazy");
    assert_eq!(config.anchor, "a[href^=\"#\"]");

    assert_eq!(config.header_offset, 96.0);
    assert_eq!(config.filter_control, ".tab");
    assert_eq!(config.fade_selectors, vec![".hero".to_string()]);
    assert_eq!(config.card, ".nft-card");
    assert_eq!(config.countdown_tick_ms, 1000);
}

#[test]
fn every_config_field_can_be_overridden_from_js() {
    let raw = r##"{
        "nav_trigger": ".menu-toggle",
        "nav_drawer": ".drawer",
        "nav_links": ".drawer a",
        "fade_selectors": [".hero", ".gallery"],
        "card": ".art-card",
        "timer": ".clock",
        "deadline_attribute": "data-deadline",
        "anchor": "a.jump",
        "button": ".cta",
        "lazy_image": "img.lazy",
        "deferred_source_attribute": "data-lazy-src",
        "footer_toggle": "#links",
        "footer_links": ".footer-links a",
        "filter_control": ".tab",
        "year": "#copyright",
        "header_offset": 64,
        "fade_threshold": 0.5,
        "fade_root_margin": "0px",
        "fade_stagger_ms": 50,
        "card_transition_stagger_secs": 0.25,
        "countdown_tick_ms": 500
    }"##;
    let js: JsLandingConfig = serde_json::from_str(raw).expect("Config JSON is invalid");
    let config = LandingConfig::from(js);

    let expected = LandingConfig {
        nav_trigger: ".menu-toggle".to_string(),
        nav_drawer: ".drawer".to_string(),
        nav_links: ".drawer a".to_string(),
        fade_selectors: vec![".hero".to_string(), ".gallery".to_string()],
        card: ".art-card".to_string(),
        timer: ".clock".to_string(),
        deadline_attribute: "data-deadline".to_string(),
        anchor: "a.jump".to_string(),
        button: ".cta".to_string(),
        lazy_image: "img.lazy".to_string(),
        deferred_source_attribute: "data-lazy-src".to_string(),
        footer_toggle: "#links".to_string(),
        footer_links: ".footer-links a".to_string(),
        filter_control: ".tab".to_string(),
        year: "#copyright".to_string(),
        header_offset: 64.0,
        fade_threshold: 0.5,
        fade_root_margin: "0px".to_string(),
        fade_stagger_ms: 50,
        card_transition_stagger_secs: 0.25,
        countdown_tick_ms: 500,
    };
    assert_eq!(config, expected);

    let direct: LandingConfig = serde_json::from_str(raw).expect("Config JSON is invalid");
    assert_eq!(config, direct);
}

#[test]
fn empty_js_config_is_the_default() {
    let js: JsLandingConfig = serde_json::from_str("{}").expect("Config JSON is invalid");
    assert_eq!(LandingConfig::from(js), LandingConfig::default());
}

#[test]
fn browser_timezone_offsets_are_minutes_west() {
    assert_eq!(
        local_offset_from_js(-420),
        FixedOffset::east_opt(7 * 3600).expect("offset")
    );
    assert_eq!(
        local_offset_from_js(300),
        FixedOffset::west_opt(5 * 3600).expect("offset")
    );
    assert_eq!(local_offset_from_js(i32::MAX).local_minus_utc(), 0);
}

#[test]
fn clock_values_must_be_finite() {
    let instant = instant_from_js(1_748_779_200_000.0).expect("valid clock");
    assert_eq!(
        instant,
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("valid instant")
    );
    assert!(matches!(instant_from_js(f64::NAN), Err(LandingError::Host(_))));
}

#[test]
fn countdown_and_filter_exports() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("valid instant");
    let utc = FixedOffset::east_opt(0).expect("offset");

    assert_eq!(
        render_countdown("2025-06-01T13:01:01Z", now, utc).as_deref(),
        Ok("01 : 01 : 01")
    );
    assert_eq!(
        render_countdown("2025-06-01T11:59:59Z", now, utc).as_deref(),
        Ok("00 : 00 : 00")
    );
    assert!(render_countdown("whenever", now, utc).is_err());
    assert_eq!(filter_key("  Pixel  Art "), "pixel-art");
}
