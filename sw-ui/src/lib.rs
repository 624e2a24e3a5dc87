//! Shared Dioxus components and JS bridge for the sonic weather story.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the MapLibre and D3.js scripts via `js_sys::eval()`,
//!   plus the browser reads the page needs (fetch, element geometry, animation frames)
//! - `state`: the page controller's reactive `AppState`
//! - `components`: the three views and the small RSX building blocks around them

pub mod components;
pub mod js_bridge;
pub mod state;
