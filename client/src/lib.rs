//! # place-client
//!
//! Leptos + WASM frontend for the shared pixel canvas. Renders the color
//! picker, the three drawing tools and the canvas grid, and talks to the
//! remote process through the `canvas` crate's accessor.
//!
//! Browser-only pieces (HTTP, timers, the wallet bridge, mounting) sit behind
//! the `csr` feature so the state and formatting modules stay testable on the
//! host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
