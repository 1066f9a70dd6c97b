//! Dioxus front end for the disasters timeline.
//!
//! This crate provides:
//! - `fetch`: the runtime fetch of the dataset file
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: RSX components for the timeline SVG, legend, tooltip and status boxes

pub mod components;
pub mod fetch;
pub mod state;
