//! RSX components for the disasters timeline.

mod chart_header;
mod error_display;
mod legend;
mod loading_spinner;
mod timeline_chart;
mod tooltip;

pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use legend::Legend;
pub use loading_spinner::LoadingSpinner;
pub use timeline_chart::TimelineChart;
pub use tooltip::Tooltip;
