mod app;
mod components;
mod config;
mod logging;
mod models;
mod pages;
mod state;
mod store;

use crate::app::App;
use crate::config::EnvConfig;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    let config = EnvConfig::new();
    logging::init_logging(config.level_filter());
    log::info!(
        "notes board starting (log_level={}, list_order={:?})",
        config.log_level,
        config.list_order
    );

    mount_to_body(move || view! { <App config=config /> });
}
