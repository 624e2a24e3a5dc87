//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the map and chart
//! scripts as JSON from the Dioxus WASM frontend.

use serde::Serialize;
use sw_core::day_key::DayKey;

/// One station drawn on the map for the selected day.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StationGlyph {
    pub id: String,
    pub title: String,
    pub lon: f64,
    pub lat: f64,
    /// Raw daily precipitation (mm), shown in the tooltip
    pub precipitation: Option<f64>,
    /// 7-day mean precipitation (mm) that sizes the glyph
    pub precipitation_7d: Option<f64>,
    /// Rain relative to the wettest station-week of the dataset, in [0, 1]
    pub intensity: f64,
    /// Base radius in pixels before the pulse is applied
    pub radius: f64,
}

/// One day on the audio-feature timeline.
///
/// `date` is epoch milliseconds at UTC midnight so the chart script can use a
/// numeric time scale without parsing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelinePoint {
    pub date: i64,
    pub energy: Option<f64>,
    pub acousticness: Option<f64>,
    pub danceability: Option<f64>,
}

/// Position and label of the selected-date marker on the timeline.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TimelineMarker {
    pub date: i64,
    pub label: String,
}

impl From<DayKey> for TimelineMarker {
    fn from(day: DayKey) -> Self {
        TimelineMarker {
            date: day.epoch_millis(),
            label: format!("Selected {}", day.month_label()),
        }
    }
}
