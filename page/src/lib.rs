//! Behavior layer for the landing page, compiled to WebAssembly.
//!
//! Under the `hydrate` feature this crate boots in the browser, reads the
//! page config, and attaches each behavior module: carousels, scroll reveal,
//! ripple, smooth scrolling, lazy images, accessibility, and parallax.
//! Without `hydrate` only the pure helpers compile, which is what the test
//! suite exercises.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | `app` | Start-up sequence (hydrate only) |
//! | [`components`] | One module per page behavior |
//! | [`config`] | Page-level switches from the JSON config block |
//! | [`error`] | `PageError` |
//! | [`util`] | DOM glue, live-region announcer, reduced-motion preference |


#[cfg(feature = "hydrate")]
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod util;

/// Whether `document.readyState` means the DOM is still being parsed.
#[must_use]
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }

    match util::dom::document() {
        Ok(document) if still_loading(&document.ready_state()) => {
            let ready = util::dom::Listener::new(document.as_ref(), "DOMContentLoaded", |_| boot());
            match ready {
                Ok(listener) => listener.forget(),
                Err(err) => log::error!("cannot wait for DOMContentLoaded: {err}"),
            }
        }
        Ok(_) => boot(),
        Err(err) => log::error!("page init failed: {err}"),
    }
}

#[cfg(feature = "hydrate")]
fn boot() {
    match app::init() {
        // Mounted modules stay attached until the page unloads.
        Ok(app) => std::mem::forget(app),
        Err(err) => log::error!("page init failed: {err}"),
    }
}
