//! Controller state machines.
//!
//! DESIGN
//! ======
//! Every controller keeps its state in one of these plain structs and renders
//! it to CSS classes and text after each transition. Nothing here touches the
//! browser, so the whole module is tested natively.

pub mod accordion;
pub mod counter;
pub mod form;
pub mod nav;
pub mod scroll;
pub mod theme;
