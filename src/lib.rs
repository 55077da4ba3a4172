//! # fresh-pantry
//!
//! Leptos + WASM frontend for the Fresh Pantry kitchen assistant demo.
//!
//! The crate contains the application state machine, the mock detection and
//! assistant services it drives, and the screens that render it. Browser glue
//! (timers, `localStorage`, camera access, console logging) is gated behind the
//! `csr` feature so the state logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod pages;
pub mod runtime;
pub mod services;
pub mod state;
pub mod util;
