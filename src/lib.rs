//! citycast - city weather lookup TUI
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod conditions;
pub mod effect;
pub mod lookup;
pub mod reducer;
pub mod state;
