//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use disaster_data::controller::TimelineController;
use dioxus::prelude::*;

/// What the hover tooltip shows and where.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipInfo {
    pub name: String,
    pub cost: f64,
    /// Page coordinates of the tooltip's top-left corner
    pub left: f64,
    pub top: f64,
}

#[derive(Clone, Copy)]
pub struct AppState {
    /// Timeline state (None until the dataset is loaded)
    pub controller: Signal<Option<TimelineController>>,
    /// Whether the dataset is still being fetched
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Hovered disaster, if any
    pub tooltip: Signal<Option<TooltipInfo>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            tooltip: Signal::new(None),
        }
    }
}
