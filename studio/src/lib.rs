//! # studio
//!
//! Leptos + WASM frontend for Ima Studio, a chat assistant for creative
//! production work.
//!
//! The crate holds the page components, the plain-Rust state they share
//! through context, and small browser utilities (scroll pinning, timers,
//! `localStorage` settings). Planning payload types live in the `plans`
//! crate. Under `ssr` the host renders [`app::shell`]; under `hydrate` the
//! WASM bundle attaches to that markup through [`hydrate`].

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
