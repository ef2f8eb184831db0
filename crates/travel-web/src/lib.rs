//! Ahadu Travel Web Frontend
//!
//! Leptos-based WASM frontend: home, services, blog and appointment pages.

mod api;
mod app;
mod components;
mod pages;
mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("Ahadu Travel front end starting");
    leptos::mount::mount_to_body(App);
}
