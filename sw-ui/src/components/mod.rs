//! Reusable Dioxus RSX components for the sonic weather story.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod station_map;
mod story_panel;
mod sunshine_gauge;
mod timeline_chart;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use station_map::{StationMap, MAP_CONTAINER_ID};
pub use story_panel::StoryPanel;
pub use sunshine_gauge::SunshineGauge;
pub use timeline_chart::{TimelineChart, TIMELINE_CONTAINER_ID};
