//! Reactive page state.

pub mod panel;
