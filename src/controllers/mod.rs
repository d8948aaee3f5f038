//! Page controllers.
//!
//! ARCHITECTURE
//! ============
//! Each controller finds its markup hooks, builds its state from `state`, and
//! attaches listeners once. Controllers never talk to each other. A missing
//! hook returns `UiError::MissingHook` and leaves the rest of the page working.

pub mod contact_form;
pub mod counter;
pub mod faq;
pub mod nav;
pub mod preloader;
pub mod reveal;
pub mod scroll;
pub mod theme;
