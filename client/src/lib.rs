//! # greet-client
//!
//! Leptos + WASM frontend for the greet service.
//!
//! The page is gated on Google Identity sign-in: signed-out visitors can ask
//! for a greeting, signed-in users additionally see and change the server's
//! greeting. Page orchestration lives in `pages::lifecycle` behind the
//! `SessionProvider`, `Transport` and `PageView` seams so it runs natively
//! under test; the `csr` feature supplies the browser implementations.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod test_helpers;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::mount();
}
