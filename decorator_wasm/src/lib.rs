//! This file provides the entry point and setup for compiling the decorator to WASM.

#[cfg(target_arch = "wasm32")]
use config::Config;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// The entry point of the WASM module.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::missing_errors_doc)]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    decorator::web::register(Config::default())
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Decorates the bars of the current page again, optionally using the given TOML configuration.
///
/// Failures, including an invalid configuration, are logged and never thrown.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::needless_pass_by_value)]
#[wasm_bindgen]
pub fn decorate(config: Option<String>) {
    let config = match config.as_deref().map(Config::from_toml).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(error) => {
            decorator::log_failure(&error.into());
            return;
        }
    };

    decorator::web::decorate_page(&config.bars);
}
