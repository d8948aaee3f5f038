//! Utility helpers shared across controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (`dom`, `observer`) only exists in `hydrate` builds. The
//! remaining modules are plain Rust so controller behavior can be tested
//! without a browser.

#[cfg(feature = "hydrate")]
pub mod dom;
pub mod frame_gate;
#[cfg(feature = "hydrate")]
pub mod observer;
pub mod one_shot;
pub mod preference;
