//! # trace-console
//!
//! Browser control surface for the tracing server: lists the session runs the
//! server currently knows about, triggers trace captures, toggles global
//! tracing, and can shut the server down, while a periodic reconciliation
//! poll keeps the view aligned with server-side truth.
//!
//! The control loop (state model, poller, action controllers) and the
//! embedded-plot helpers (tooltip clamping, range broadcast) are plain Rust
//! behind small capability traits, so they are tested natively. Everything
//! that needs a browser (gloo-net requests, DOM access, `window.confirm`,
//! timers) lives behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod plot;
pub mod state;
pub mod util;

/// WASM entry point: mount the dashboard into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::DashboardApp);
}
