#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod choreography;
pub mod contact;
pub mod content;
pub mod motion;
#[cfg(feature = "ssr")]
pub mod server;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logging unavailable: {e}");
    }

    leptos::mount::hydrate_body(App);
}
