//! Shared Dioxus components and browser bridge for the Aqua Sentinel dashboard.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `persist`: theme and alert persistence over the local key-value store
//! - `js_bridge`: theme attribute, connectivity events, file reading, worker registration
//! - `components`: the panels and widgets of the dashboard

pub mod components;
pub mod js_bridge;
pub mod persist;
pub mod state;
