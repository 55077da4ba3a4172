//! Browser and environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` glue from pages and state logic. Every
//! browser-only path has a native counterpart so the rest of the crate stays
//! testable without a DOM.

#[cfg(feature = "csr")]
pub mod camera;
pub mod storage;
pub mod time;
pub mod welcome;
