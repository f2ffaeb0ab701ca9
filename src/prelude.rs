//! Prelude module for persian_calendar crate.
//!
//! Re-exports the derive macros used by the value types.

pub use derive_more::Display;
