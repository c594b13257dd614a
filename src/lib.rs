//! Save Forge marketing site
//!
//! The single-page site advertising the Save Forge desktop application,
//! built with Leptos and WebAssembly. Static content is server-rendered;
//! hydration only activates the scroll-reveal engine and the outbound-link
//! buttons.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
