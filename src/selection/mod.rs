//! Cascading criteria selection.
//!
//! The four selection fields form a strict chain: domain → main → sub → detail.
//! Changing any field clears every field below it, and the option lists for
//! the dependent levels are re-derived from the catalog before control returns
//! to the caller. A selection path therefore never references options that
//! are inconsistent with its ancestors.

mod controller;
mod state;

pub use controller::*;
pub use state::*;
