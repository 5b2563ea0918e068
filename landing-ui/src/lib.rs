//! Attaches the landing page behaviors to the live document (WebAssembly only).

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Once;

    use landing_behaviors::LandingPage;
    use landing_core::LandingError;
    use landing_wasm::{config_from_js, format_landing_error};
    use wasm_bindgen::prelude::*;

    use crate::bindings::PageBindings;
    use crate::host::BrowserHost;
    use crate::styles;

    thread_local! {
        static PAGE: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
    }

    static LOGGER: Once = Once::new();

    fn to_js(err: LandingError) -> JsValue {
        JsValue::from_str(&format_landing_error(err))
    }

    /// Wire every behavior to the current document. Calling it again replaces
    /// the previous bindings.
    #[wasm_bindgen]
    pub fn init_landing_page(config: Option<JsValue>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::default()));

        let config = config_from_js(config)?;
        let host = BrowserHost::new().map_err(to_js)?;
        if let Err(err) = styles::ensure_styles(host.document()) {
            log::error!("Could not inject default styles: {err:?}");
        }

        let env = host.environment().map_err(to_js)?;
        let page = LandingPage::resolve(&host, &config, &env).map_err(to_js)?;
        let summary = page.summary().clone();
        let bindings = PageBindings::attach(Rc::new(host), page, config.countdown_tick_ms)?;
        PAGE.with(|slot| *slot.borrow_mut() = Some(bindings));

        log::info!("NFT landing page interactions loaded");
        log::info!(
            "Reduced motion: {}",
            if summary.reduced_motion {
                "Enabled"
            } else {
                "Disabled"
            }
        );
        log::info!("Countdown timers initialized: {}", summary.countdown_timers);
        log::info!("Scroll animation elements: {}", summary.fade_elements);
        Ok(())
    }

    /// Detach every listener and observer and stop the countdowns.
    #[wasm_bindgen]
    pub fn teardown_landing_page() {
        if PAGE.with(|slot| slot.borrow_mut().take()).is_some() {
            log::info!("NFT landing page interactions detached");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::{init_landing_page, teardown_landing_page};

#[cfg(not(target_arch = "wasm32"))]
pub fn init_landing_page(_: Option<wasm_bindgen::JsValue>) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "landing-ui only supports the wasm32 target",
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn teardown_landing_page() {}
