//! # folio-ui
//!
//! Interaction layer for the portfolio site, compiled to WebAssembly and
//! started automatically when the module loads.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure controller state machines (theme, nav, scroll, counter, accordion, form) |
//! | [`util`] | Preference storage, one-shot subscriptions, frame gating, browser glue |
//! | `controllers` | One installer per page feature (`hydrate` only) |
//! | [`boot`] | Startup sequence and install report |
//! | [`config`] | Site configuration with defaults |
//! | [`error`] | Crate error type |
//!
//! Browser code sits behind the `hydrate` feature; everything else builds and
//! tests natively.

pub mod boot;
pub mod config;
#[cfg(feature = "hydrate")]
pub mod controllers;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    boot::run();
}
