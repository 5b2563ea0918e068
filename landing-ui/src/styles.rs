#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use web_sys::Document;

const STYLE_TAG_SELECTOR: &str = "style[data-landing-ui]";

/// Baseline rules for the state classes the behaviors toggle. Pages can
/// override any of them; the tag is only injected when missing.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --landing-fade-distance: 30px;
  --landing-fade-duration: 0.6s;
  --landing-card-lift-duration: 0.3s;
}

.fade-in {
  opacity: 0;
  transform: translateY(var(--landing-fade-distance));
  transition: opacity var(--landing-fade-duration) ease-out,
    transform var(--landing-fade-duration) ease-out;
}

.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}

.nft-card {
  transition: transform var(--landing-card-lift-duration) ease;
}

.nft-card.hidden {
  display: none;
}

body.menu-open {
  overflow: hidden;
}

@media (prefers-reduced-motion: reduce) {
  .fade-in,
  .nft-card {
    transition: none;
  }

  .fade-in {
    opacity: 1;
    transform: none;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head>"))?;

    let style = document.create_element("style")?;
    style.set_attribute("data-landing-ui", "v1")?;
    style.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style)?;
    log::debug!("Injected default landing styles");

    Ok(())
}
