//! Prelude module for stay_window crate.
//!
//! Re-exports the derive_more macros the crate's types use.

pub use derive_more::Display;
