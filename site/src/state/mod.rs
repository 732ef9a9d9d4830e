//! Shared reactive page state.

pub mod ui;
