//! # site
//!
//! Leptos front end for the Keystone landing page.
//!
//! The page is server-rendered and hydrated on the client. Decorative
//! behaviors (particle background, scroll reveals, stat counters, card tilt,
//! navbar state) live in the `effects` crate as plain state machines; this
//! crate renders the markup and wires those machines to real DOM events,
//! timers, and observers once hydrated.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client runtime to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
