//! Parquet decoding for the three data files.
//!
//! Each file is read with the `parquet` crate's row API. Rows are turned into
//! JSON objects (column name to value) and deserialized into loosely typed raw
//! row structs, which are then validated into the core record types.
//!
//! # File Schemas
//!
//! - **Weather**: `station_abbr, reference_timestamp, tre200d0_7d, rre150d0_7d, sre000d0_7d[, rre150d0, tre200d0, sre000d0]`
//! - **Stations**: `id, lon, lat, title`
//! - **Charts**: `track_id, title, streams, date, acousticness, danceability, energy[, speechiness]`
//!
//! Rows without a station id or a usable date are skipped and counted. A value
//! of the wrong type (text in a numeric column, ...) fails the whole file.

use crate::error::{LoadError, Result};
use crate::sources::DataFile;
use crate::Dataset;
use bytes::Bytes;
use parquet::file::reader::{FileReader, SerializedFileReader};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use sw_core::day_key::DayKey;
use sw_core::music::ChartEntry;
use sw_core::station::{Station, StationKey};
use sw_core::weather::{WeatherRecord, ROLLING_WINDOW_DAYS};
use sw_data::rolling::centered_mean;

impl Dataset {
    /// Decode the three parquet files into a dataset.
    ///
    /// Fails as a unit: the first file that cannot be decoded aborts the load.
    pub fn from_parquet(weather: Bytes, stations: Bytes, charts: Bytes) -> Result<Self> {
        let weather = decode_weather(read_rows(weather, DataFile::Weather)?)?;
        let stations = decode_stations(read_rows(stations, DataFile::Stations)?)?;
        let charts = decode_chart_entries(read_rows(charts, DataFile::Charts)?)?;
        Ok(Dataset::from_records(weather, stations, charts))
    }
}

/// Read every row of a parquet file as a JSON object keyed by column name.
pub fn read_rows(data: Bytes, file: DataFile) -> Result<Vec<Value>> {
    let to_load_error = |source| LoadError::Parquet { file, source };
    let reader = SerializedFileReader::new(data).map_err(to_load_error)?;
    let rows = reader
        .get_row_iter(None)
        .map_err(to_load_error)?
        .map(|row| row.map(|r| r.to_json_value()))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_load_error)?;
    log::info!("[SW] loader: Read {} rows of {}", rows.len(), file);
    Ok(rows)
}

fn deserialize_row<T: for<'de> Deserialize<'de>>(
    row: Value,
    index: usize,
    file: DataFile,
) -> Result<T> {
    if !row.is_object() {
        return Err(LoadError::NotARecord { file, index });
    }
    serde_json::from_value(row).map_err(|source| LoadError::Row { file, source })
}

/// Day of a date cell: text timestamps are truncated, numbers are epoch values.
fn day_of(value: &Value) -> Option<DayKey> {
    match value {
        Value::String(s) => DayKey::parse(s).ok(),
        Value::Number(n) => n.as_i64().and_then(day_of_epoch),
        _ => None,
    }
}

/// Epoch integers arrive in whatever unit the writer used; pick it by magnitude.
fn day_of_epoch(value: i64) -> Option<DayKey> {
    let magnitude = value.unsigned_abs();
    let millis = if magnitude >= 100_000_000_000_000_000 {
        value / 1_000_000
    } else if magnitude >= 100_000_000_000_000 {
        value / 1_000
    } else if magnitude >= 100_000_000_000 {
        value
    } else if magnitude >= 1_000_000 {
        value.saturating_mul(1_000)
    } else {
        // days since the epoch
        value.saturating_mul(86_400_000)
    };
    DayKey::from_epoch_millis(millis).ok()
}

fn text_of(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ───────────────────── Weather ─────────────────────

#[derive(Deserialize)]
struct RawWeatherRow {
    #[serde(default)]
    station_abbr: Option<Value>,
    #[serde(default, alias = "reference_timestamp")]
    date: Option<Value>,
    #[serde(default)]
    tre200d0_7d: Option<f64>,
    #[serde(default)]
    rre150d0_7d: Option<f64>,
    #[serde(default)]
    sre000d0_7d: Option<f64>,
    #[serde(default)]
    rre150d0: Option<f64>,
    #[serde(default)]
    tre200d0: Option<f64>,
    #[serde(default)]
    sre000d0: Option<f64>,
}

/// A weather record plus the raw daily values its rolling means can be rebuilt from.
struct PendingWeather {
    record: WeatherRecord,
    temperature: Option<f64>,
    sunshine: Option<f64>,
}

pub fn decode_weather(rows: Vec<Value>) -> Result<Vec<WeatherRecord>> {
    let total = rows.len();
    let mut pending = Vec::with_capacity(total);
    for (index, row) in rows.into_iter().enumerate() {
        let raw: RawWeatherRow = deserialize_row(row, index, DataFile::Weather)?;
        let station_abbr = match text_of(raw.station_abbr) {
            Some(s) => s.trim().to_string(),
            None => continue,
        };
        let Some(date) = raw.date.as_ref().and_then(day_of) else {
            continue;
        };
        pending.push(PendingWeather {
            record: WeatherRecord {
                station_abbr,
                date,
                temperature_7d: raw.tre200d0_7d,
                precipitation_7d: raw.rre150d0_7d,
                sunshine_7d: raw.sre000d0_7d,
                precipitation: raw.rre150d0,
            },
            temperature: raw.tre200d0,
            sunshine: raw.sre000d0,
        });
    }

    fill_missing_rolling_means(&mut pending);

    let records: Vec<WeatherRecord> = pending.into_iter().map(|p| p.record).collect();
    log::info!(
        "[SW] loader: Loaded {} weather records, skipped {} without station or date",
        records.len(),
        total - records.len()
    );
    Ok(records)
}

/// Derive absent 7-day means from the raw daily values, per station in date order.
fn fill_missing_rolling_means(pending: &mut [PendingWeather]) {
    let needs_fill = pending.iter().any(|p| {
        (p.record.temperature_7d.is_none() && p.temperature.is_some())
            || (p.record.precipitation_7d.is_none() && p.record.precipitation.is_some())
            || (p.record.sunshine_7d.is_none() && p.sunshine.is_some())
    });
    if !needs_fill {
        return;
    }

    let mut by_station: BTreeMap<StationKey, Vec<usize>> = BTreeMap::new();
    for (i, p) in pending.iter().enumerate() {
        by_station.entry(p.record.station_key()).or_default().push(i);
    }

    let mut filled = 0usize;
    for indices in by_station.values_mut() {
        indices.sort_by_key(|&i| pending[i].record.date);

        let temperature: Vec<Option<f64>> =
            indices.iter().map(|&i| pending[i].temperature).collect();
        let precipitation: Vec<Option<f64>> =
            indices.iter().map(|&i| pending[i].record.precipitation).collect();
        let sunshine: Vec<Option<f64>> = indices.iter().map(|&i| pending[i].sunshine).collect();

        let temperature = centered_mean(&temperature, ROLLING_WINDOW_DAYS);
        let precipitation = centered_mean(&precipitation, ROLLING_WINDOW_DAYS);
        let sunshine = centered_mean(&sunshine, ROLLING_WINDOW_DAYS);

        for (pos, &i) in indices.iter().enumerate() {
            let record = &mut pending[i].record;
            for (slot, derived) in [
                (&mut record.temperature_7d, temperature[pos]),
                (&mut record.precipitation_7d, precipitation[pos]),
                (&mut record.sunshine_7d, sunshine[pos]),
            ] {
                if slot.is_none() && derived.is_some() {
                    *slot = derived;
                    filled += 1;
                }
            }
        }
    }
    log::info!("[SW] loader: Derived {} missing 7-day means", filled);
}

// ───────────────────── Stations ─────────────────────

#[derive(Deserialize)]
struct RawStationRow {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    lon: Option<f64>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    title: Option<String>,
}

pub fn decode_stations(rows: Vec<Value>) -> Result<Vec<Station>> {
    let total = rows.len();
    let mut stations = Vec::with_capacity(total);
    for (index, row) in rows.into_iter().enumerate() {
        let raw: RawStationRow = deserialize_row(row, index, DataFile::Stations)?;
        let (Some(id), Some(lon), Some(lat)) = (text_of(raw.id), raw.lon, raw.lat) else {
            continue;
        };
        let id = id.trim().to_string();
        let title = raw.title.unwrap_or_else(|| id.to_uppercase());
        stations.push(Station { id, lon, lat, title });
    }
    log::info!(
        "[SW] loader: Loaded {} stations, skipped {} without id or coordinates",
        stations.len(),
        total - stations.len()
    );
    Ok(stations)
}

// ───────────────────── Charts ─────────────────────

#[derive(Deserialize)]
struct RawChartRow {
    #[serde(default)]
    track_id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    streams: Option<f64>,
    #[serde(default)]
    date: Option<Value>,
    #[serde(default)]
    acousticness: Option<f64>,
    #[serde(default)]
    danceability: Option<f64>,
    #[serde(default)]
    energy: Option<f64>,
    #[serde(default)]
    speechiness: Option<f64>,
}

pub fn decode_chart_entries(rows: Vec<Value>) -> Result<Vec<ChartEntry>> {
    let total = rows.len();
    let mut entries = Vec::with_capacity(total);
    for (index, row) in rows.into_iter().enumerate() {
        let raw: RawChartRow = deserialize_row(row, index, DataFile::Charts)?;
        let Some(date) = raw.date.as_ref().and_then(day_of) else {
            continue;
        };
        // chart rows without streams carry no weight
        let streams = match raw.streams {
            Some(s) if s.is_finite() && s >= 0.0 => s.round() as u64,
            _ => continue,
        };
        entries.push(ChartEntry {
            track_id: raw.track_id.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            streams,
            date,
            acousticness: raw.acousticness,
            danceability: raw.danceability,
            energy: raw.energy,
            speechiness: raw.speechiness,
        });
    }
    log::info!(
        "[SW] loader: Loaded {} chart entries, skipped {} without date or streams",
        entries.len(),
        total - entries.len()
    );
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn decode_weather_rows() {
        let rows = vec![
            json!({
                "station_abbr": "BER",
                "reference_timestamp": "2020-01-02 00:00:00 +00:00",
                "tre200d0_7d": 1.25,
                "rre150d0_7d": 3.1,
                "sre000d0_7d": 120.0,
                "rre150d0": 0.0
            }),
            json!({
                "station_abbr": "LUG",
                "reference_timestamp": "2020-01-02 00:00:00 +00:00",
                "tre200d0_7d": null,
                "rre150d0_7d": 0.5,
                "sre000d0_7d": 300.0
            }),
        ];
        let records = decode_weather(rows).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].station_abbr, "BER");
        assert_eq!(records[0].date, day("2020-01-02"));
        assert_eq!(records[0].precipitation, Some(0.0));
        assert_eq!(records[1].temperature_7d, None);
        assert_eq!(records[1].precipitation, None);
    }

    #[test]
    fn decode_weather_skips_rows_without_station_or_date() {
        let rows = vec![
            json!({ "station_abbr": "BER", "reference_timestamp": "2020-01-01" }),
            json!({ "station_abbr": "", "reference_timestamp": "2020-01-01" }),
            json!({ "station_abbr": "BER", "reference_timestamp": null }),
            json!({ "station_abbr": "BER", "reference_timestamp": "not a date" }),
            json!({ "reference_timestamp": "2020-01-01" }),
        ];
        let records = decode_weather(rows).unwrap();
        assert_eq!(records.len(), 1, "Should only keep the complete row");
    }

    #[test]
    fn decode_weather_accepts_epoch_timestamps() {
        let midnight = day("2020-03-16").epoch_millis();
        let rows = vec![
            json!({ "station_abbr": "BER", "date": midnight }),
            json!({ "station_abbr": "BER", "date": midnight * 1_000 }),
            json!({ "station_abbr": "BER", "date": midnight * 1_000_000 }),
        ];
        let records = decode_weather(rows).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.date == day("2020-03-16")));
    }

    #[test]
    fn decode_weather_rejects_wrong_types() {
        let rows = vec![json!({
            "station_abbr": "BER",
            "reference_timestamp": "2020-01-01",
            "sre000d0_7d": "sunny"
        })];
        let err = decode_weather(rows).unwrap_err();
        assert!(matches!(err, LoadError::Row { file: DataFile::Weather, .. }));
        assert!(err.to_string().contains("weather data"));

        let err = decode_weather(vec![json!([1, 2, 3])]).unwrap_err();
        assert!(matches!(err, LoadError::NotARecord { index: 0, .. }));
    }

    #[test]
    fn decode_weather_derives_missing_rolling_means() {
        let rows: Vec<Value> = (1..=3)
            .map(|d| {
                json!({
                    "station_abbr": "BER",
                    "reference_timestamp": format!("2020-01-0{d}"),
                    "rre150d0": d as f64,
                    "sre000d0": 60.0
                })
            })
            .collect();
        let records = decode_weather(rows).unwrap();
        assert!(records.iter().all(|r| r.precipitation_7d == Some(2.0)));
        assert!(records.iter().all(|r| r.sunshine_7d == Some(60.0)));
        assert!(records.iter().all(|r| r.temperature_7d.is_none()));
    }

    #[test]
    fn decode_weather_keeps_published_rolling_means() {
        let rows = vec![
            json!({
                "station_abbr": "BER",
                "reference_timestamp": "2020-01-01",
                "rre150d0_7d": 9.0,
                "rre150d0": 1.0
            }),
            json!({ "station_abbr": "BER", "reference_timestamp": "2020-01-02", "rre150d0": 3.0 }),
        ];
        let records = decode_weather(rows).unwrap();
        assert_eq!(records[0].precipitation_7d, Some(9.0));
        assert_eq!(records[1].precipitation_7d, Some(2.0));
    }

    #[test]
    fn decode_stations_rows() {
        let rows = vec![
            json!({ "id": "ber", "lon": 7.464, "lat": 46.991, "title": "Bern / Zollikofen" }),
            json!({ "id": "lug", "lon": 8.96, "lat": 46.004, "title": null }),
            json!({ "id": "xxx", "lon": null, "lat": 46.0, "title": "No coordinates" }),
        ];
        let stations = decode_stations(rows).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].title, "Bern / Zollikofen");
        assert_eq!(stations[1].title, "LUG");
    }

    #[test]
    fn decode_chart_rows() {
        let rows = vec![
            json!({
                "track_id": "6habFhsOp2NvshLv26DqMb",
                "title": "Despacito",
                "streams": 27521,
                "date": "2017-05-01",
                "acousticness": 0.209,
                "danceability": 0.655,
                "energy": 0.797
            }),
            json!({ "track_id": "x", "title": "No streams", "streams": null, "date": "2017-05-01" }),
            json!({ "track_id": "y", "title": "No date", "streams": 10, "date": null }),
        ];
        let entries = decode_chart_entries(rows).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].streams, 27521);
        assert_eq!(entries[0].speechiness, None);
        assert_eq!(entries[0].date, day("2017-05-01"));
    }

    #[test]
    fn read_rows_rejects_non_parquet_bytes() {
        let csv = Bytes::from_static(b"ID,DAM\nSHA,Shasta\n");
        let err = read_rows(csv, DataFile::Stations).unwrap_err();
        assert!(matches!(err, LoadError::Parquet { file: DataFile::Stations, .. }));
        assert!(err.to_string().starts_with("Failed to read station data"));
    }

    #[test]
    fn from_parquet_fails_as_a_unit() {
        let result = Dataset::from_parquet(
            Bytes::from_static(b"PAR1"),
            Bytes::from_static(b"PAR1"),
            Bytes::from_static(b"PAR1"),
        );
        assert!(result.is_err());
    }
}
