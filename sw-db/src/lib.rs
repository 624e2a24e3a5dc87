//! Immutable in-memory dataset behind the sonic weather story.
//!
//! The page loads three parquet files once (weather, stations, chart entries),
//! decodes them into typed records and never mutates them again. This crate
//! owns that snapshot and exposes the per-day lookups the views need.
//!
//! # Architecture
//!
//! - `Rc<Tables>` wrapper so the dataset is cheap to clone into Dioxus
//!   signals and props in single-threaded WASM
//! - Parquet decoding via the `parquet` crate's row API ([`loader`])
//! - Typed query methods returning serializable structs for JSON export to the
//!   JS chart scripts ([`queries`], [`models`])
//!
//! # Usage
//!
//! ```rust
//! use sw_core::{DayKey, Station};
//! use sw_core::weather::WeatherRecord;
//! use sw_db::Dataset;
//!
//! let day = DayKey::parse("2020-01-02").unwrap();
//! let weather = vec![WeatherRecord {
//!     station_abbr: "BER".to_string(),
//!     date: day,
//!     temperature_7d: Some(1.5),
//!     precipitation_7d: Some(2.0),
//!     sunshine_7d: Some(120.0),
//!     precipitation: Some(0.4),
//! }];
//! let stations = vec![Station {
//!     id: "ber".to_string(),
//!     lon: 7.46,
//!     lat: 46.99,
//!     title: "Bern / Zollikofen".to_string(),
//! }];
//!
//! let dataset = Dataset::from_records(weather, stations, Vec::new());
//! assert_eq!(dataset.available_dates(), &[day]);
//! assert_eq!(dataset.station_glyphs(day).len(), 1);
//! ```

pub mod error;
mod loader;
pub mod models;
mod queries;
pub mod sources;

pub use error::{LoadError, Result};
pub use loader::{decode_chart_entries, decode_stations, decode_weather, read_rows};
pub use sources::{DataFile, DataSources};

use std::collections::HashMap;
use std::ops::Range;
use std::rc::Rc;
use sw_core::day_key::DayKey;
use sw_core::music::{ChartEntry, MusicDaily};
use sw_core::station::{Station, StationKey};
use sw_core::weather::WeatherRecord;
use sw_data::gauge::{self, Bounds};

struct Tables {
    /// Weather rows sorted by (date, station)
    weather: Vec<WeatherRecord>,
    /// Distinct days of the weather rows, ascending
    dates: Vec<DayKey>,
    /// `weather[day_ranges[i]]` are the rows of `dates[i]`
    day_ranges: Vec<Range<usize>>,
    stations: HashMap<StationKey, Station>,
    music: Vec<MusicDaily>,
    sunshine_bounds: Option<Bounds>,
    precipitation_max: f64,
}

/// Snapshot of all loaded data, shared read-only between the page and its views.
///
/// Cloning only bumps a reference count; two clones compare equal when they
/// share the same snapshot.
#[derive(Clone)]
pub struct Dataset {
    tables: Rc<Tables>,
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tables, &other.tables)
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("weather", &self.tables.weather.len())
            .field("dates", &self.tables.dates.len())
            .field("stations", &self.tables.stations.len())
            .field("music", &self.tables.music.len())
            .finish()
    }
}

impl Dataset {
    /// Build the snapshot from decoded records.
    ///
    /// Weather rows are indexed by day, stations by normalized id, chart entries
    /// are collapsed into daily audio-feature summaries and the gauge and glyph
    /// scales are computed over the whole dataset.
    pub fn from_records(
        mut weather: Vec<WeatherRecord>,
        stations: Vec<Station>,
        chart_entries: Vec<ChartEntry>,
    ) -> Self {
        weather.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.station_key().cmp(&b.station_key()))
        });

        let mut dates: Vec<DayKey> = Vec::new();
        let mut day_ranges: Vec<Range<usize>> = Vec::new();
        for (i, record) in weather.iter().enumerate() {
            if dates.last() == Some(&record.date) {
                if let Some(range) = day_ranges.last_mut() {
                    range.end = i + 1;
                }
            } else {
                dates.push(record.date);
                day_ranges.push(i..i + 1);
            }
        }

        // Gauge bounds are taken over daily means so the needle uses the full track
        let sunshine_bounds = Bounds::from_values(day_ranges.iter().filter_map(|range| {
            gauge::mean(weather[range.clone()].iter().filter_map(|r| r.sunshine_7d))
        }));

        let precipitation_max = weather
            .iter()
            .filter_map(|r| r.precipitation_7d)
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max);

        let stations: HashMap<StationKey, Station> = stations
            .into_iter()
            .filter(|s| !s.key().is_empty())
            .map(|s| (s.key(), s))
            .collect();

        let music = sw_data::music::aggregate_daily(&chart_entries);

        log::info!(
            "[SW] dataset: {} weather rows over {} days, {} stations, {} music days",
            weather.len(),
            dates.len(),
            stations.len(),
            music.len()
        );

        Self {
            tables: Rc::new(Tables {
                weather,
                dates,
                day_ranges,
                stations,
                music,
                sunshine_bounds,
                precipitation_max,
            }),
        }
    }
}
