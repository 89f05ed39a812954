//! Shared Dioxus components and Plotly bridge for the CGW map app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around the pre-rendered Plotly map div and
//!   the popup chart regions, via `js_sys::eval()`
//! - `state`: the reactive `MapSession` bundling controllers and signals
//! - `components`: RSX components (map controls, layer panel, scale bar,
//!   marker popup, info modal)

pub mod components;
pub mod js_bridge;
pub mod state;
