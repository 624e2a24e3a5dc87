use crate::day_key::DayKey;
use serde::{Deserialize, Serialize};

/// A single chart placement: one track on one day in the Swiss Spotify chart,
/// enriched with the track's audio features.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ChartEntry {
    pub track_id: String,
    pub title: String,
    pub streams: u64,
    pub date: DayKey,
    pub acousticness: Option<f64>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub speechiness: Option<f64>,
}

/// Audio features of the chart aggregated over one calendar day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MusicDaily {
    pub date: DayKey,
    /// Sum of streams over all chart entries of the day
    pub total_streams: u64,
    /// Number of chart entries that went into the means
    pub count: u32,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub acousticness: Option<f64>,
    pub speechiness: Option<f64>,
}

/// The audio features plotted on the timeline, in drawing order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFeature {
    Energy,
    Acousticness,
    Danceability,
}

impl AudioFeature {
    pub const PLOTTED: [AudioFeature; 3] = [
        AudioFeature::Energy,
        AudioFeature::Acousticness,
        AudioFeature::Danceability,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AudioFeature::Energy => "energy",
            AudioFeature::Acousticness => "acousticness",
            AudioFeature::Danceability => "danceability",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            AudioFeature::Energy => "#8884d8",
            AudioFeature::Acousticness => "#82ca9d",
            AudioFeature::Danceability => "#ffc658",
        }
    }
}
