//! Pagecraft - landing pages with embedded third-party widgets
//!
//! A studio, a personal brand, a musician, an AI product and a coaching funnel served
//! from one Leptos app. Vendor widgets (scheduling, newsletter, social embeds) load
//! asynchronously and are attached through a bounded polling state machine in
//! [`core::attacher`].

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
