//! Typed lookups over the loaded dataset.
//!
//! Every per-day query takes a [`DayKey`], so filtering always happens at day
//! granularity, and every station lookup goes through [`StationKey`], so the
//! join between weather rows and the station catalogue is case-insensitive.

use crate::models::{StationGlyph, TimelinePoint};
use crate::Dataset;
use sw_core::day_key::DayKey;
use sw_core::music::MusicDaily;
use sw_core::station::{Station, StationKey};
use sw_core::weather::WeatherRecord;
use sw_data::downsample::{downsample, MAX_POINTS};
use sw_data::gauge::{self, Bounds, GaugeLevel};
use sw_data::precipitation;

impl Dataset {
    // ───────────────────── Dates ─────────────────────

    /// Sorted distinct days present in the weather data; the axis the scroll position indexes into.
    pub fn available_dates(&self) -> &[DayKey] {
        &self.tables.dates
    }

    pub fn date_at(&self, index: usize) -> Option<DayKey> {
        self.tables.dates.get(index).copied()
    }

    pub fn first_date(&self) -> Option<DayKey> {
        self.tables.dates.first().copied()
    }

    // ───────────────────── Weather ─────────────────────

    /// All weather rows of one day, ordered by station.
    pub fn weather_on(&self, day: DayKey) -> &[WeatherRecord] {
        match self.tables.dates.binary_search(&day) {
            Ok(i) => &self.tables.weather[self.tables.day_ranges[i].clone()],
            Err(_) => &[],
        }
    }

    pub fn station(&self, key: &StationKey) -> Option<&Station> {
        self.tables.stations.get(key)
    }

    /// Largest 7-day mean precipitation of the dataset; 0 when there is none.
    pub fn precipitation_max(&self) -> f64 {
        self.tables.precipitation_max
    }

    /// Map glyphs for one day: the day's weather rows joined to station coordinates.
    ///
    /// Rows whose station is missing from the catalogue are dropped.
    pub fn station_glyphs(&self, day: DayKey) -> Vec<StationGlyph> {
        let rows = self.weather_on(day);
        let max = self.precipitation_max();
        let glyphs: Vec<StationGlyph> = rows
            .iter()
            .filter_map(|record| {
                let station = self.station(&record.station_key())?;
                let intensity = precipitation::intensity(record.precipitation_7d, max);
                Some(StationGlyph {
                    id: station.id.clone(),
                    title: station.title.clone(),
                    lon: station.lon,
                    lat: station.lat,
                    precipitation: record.precipitation,
                    precipitation_7d: record.precipitation_7d,
                    intensity,
                    radius: precipitation::radius(intensity),
                })
            })
            .collect();
        if glyphs.len() < rows.len() {
            log::debug!(
                "[SW] query: {} of {} weather rows on {} have no station",
                rows.len() - glyphs.len(),
                rows.len(),
                day
            );
        }
        glyphs
    }

    // ───────────────────── Sunshine ─────────────────────

    /// Mean 7-day sunshine over the stations reporting on `day`.
    pub fn daily_sunshine(&self, day: DayKey) -> Option<f64> {
        gauge::mean(self.weather_on(day).iter().filter_map(|r| r.sunshine_7d))
    }

    /// Lowest and highest daily mean sunshine of the dataset.
    pub fn sunshine_bounds(&self) -> Option<Bounds> {
        self.tables.sunshine_bounds
    }

    /// Gauge reading for `day`, normalized against [`Dataset::sunshine_bounds`].
    pub fn sunshine_level(&self, day: DayKey) -> GaugeLevel {
        gauge::level(
            self.weather_on(day).iter().filter_map(|r| r.sunshine_7d),
            self.sunshine_bounds(),
        )
    }

    // ───────────────────── Music ─────────────────────

    /// Daily audio-feature summaries in date order.
    pub fn music_daily(&self) -> &[MusicDaily] {
        &self.tables.music
    }

    /// Timeline series, thinned to at most [`MAX_POINTS`] days.
    pub fn timeline_points(&self) -> Vec<TimelinePoint> {
        let points: Vec<TimelinePoint> = self
            .music_daily()
            .iter()
            .map(|m| TimelinePoint {
                date: m.date.epoch_millis(),
                energy: m.energy,
                acousticness: m.acousticness,
                danceability: m.danceability,
            })
            .collect();
        let points = downsample(&points, MAX_POINTS);
        log::info!(
            "[SW] query: timeline_points returned {} records",
            points.len()
        );
        points
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{record, station};
    use crate::Dataset;
    use sw_core::day_key::DayKey;
    use sw_core::music::ChartEntry;
    use sw_core::station::StationKey;
    use sw_data::precipitation::{MIN_RADIUS, RADIUS_SPAN};

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    fn chart(date: &str, energy: f64) -> ChartEntry {
        ChartEntry {
            track_id: format!("t-{date}"),
            title: "Song".to_string(),
            streams: 1000,
            date: day(date),
            acousticness: Some(0.1),
            danceability: Some(0.7),
            energy: Some(energy),
            speechiness: None,
        }
    }

    #[test]
    fn join_is_case_insensitive() {
        let dataset = Dataset::from_records(
            vec![record("ABC", "2020-01-01", None, Some(2.0))],
            vec![station("abc")],
            Vec::new(),
        );
        let glyphs = dataset.station_glyphs(day("2020-01-01"));
        assert_eq!(glyphs.len(), 1);
        assert_eq!(glyphs[0].id, "abc");
        assert!(dataset.station(&StationKey::new("ABC")).is_some());
    }

    #[test]
    fn unmatched_weather_rows_are_dropped() {
        let dataset = Dataset::from_records(
            vec![
                record("BER", "2020-01-01", None, Some(1.0)),
                record("XXX", "2020-01-01", None, Some(4.0)),
            ],
            vec![station("ber")],
            Vec::new(),
        );
        let glyphs = dataset.station_glyphs(day("2020-01-01"));
        assert_eq!(glyphs.len(), 1);
        // the unmatched station still counts towards the dataset maximum
        assert_eq!(dataset.precipitation_max(), 4.0);
        assert_eq!(glyphs[0].intensity, 0.25);
        assert_eq!(glyphs[0].radius, MIN_RADIUS + 0.25 * RADIUS_SPAN);
    }

    #[test]
    fn weather_is_filtered_to_the_day() {
        let dataset = Dataset::from_records(
            vec![
                record("BER", "2020-01-01", Some(100.0), None),
                record("BER", "2020-01-02", Some(300.0), None),
                record("LUG", "2020-01-02", Some(500.0), None),
            ],
            vec![station("ber"), station("lug")],
            Vec::new(),
        );
        assert_eq!(dataset.weather_on(day("2020-01-02")).len(), 2);
        assert!(dataset.weather_on(day("2019-12-31")).is_empty());
        assert!(dataset.station_glyphs(day("2019-12-31")).is_empty());
        assert_eq!(dataset.daily_sunshine(day("2020-01-02")), Some(400.0));
    }

    #[test]
    fn selected_index_maps_to_day() {
        let dataset = Dataset::from_records(
            vec![
                record("BER", "2020-01-01", None, None),
                record("BER", "2020-01-02", None, None),
                record("BER", "2020-01-03", None, None),
            ],
            Vec::new(),
            Vec::new(),
        );
        let num_dates = dataset.available_dates().len();
        let index = sw_data::scroll::date_index_for(0.5, num_dates).unwrap();
        assert_eq!(index, 1);
        assert_eq!(dataset.date_at(index), Some(day("2020-01-02")));
        assert_eq!(dataset.date_at(3), None);
        assert_eq!(dataset.first_date(), Some(day("2020-01-01")));
    }

    #[test]
    fn sunshine_level_against_dataset_bounds() {
        let dataset = Dataset::from_records(
            vec![
                record("BER", "2020-01-01", Some(100.0), None),
                record("BER", "2020-01-02", Some(300.0), None),
                record("BER", "2020-01-03", Some(200.0), None),
                record("BER", "2020-01-04", None, None),
            ],
            Vec::new(),
            Vec::new(),
        );
        let level = dataset.sunshine_level(day("2020-01-03"));
        assert_eq!(level.mean, 200.0);
        assert_eq!(level.pct, 0.5);

        // a day without sunshine values reads zero instead of NaN
        let empty = dataset.sunshine_level(day("2020-01-04"));
        assert_eq!(empty.mean, 0.0);
        assert_eq!(empty.pct, 0.0);
    }

    #[test]
    fn single_sunshine_day_has_equal_bounds() {
        let dataset = Dataset::from_records(
            vec![record("BER", "2020-01-01", Some(240.0), None)],
            Vec::new(),
            Vec::new(),
        );
        let level = dataset.sunshine_level(day("2020-01-01"));
        assert!((0.0..=1.0).contains(&level.pct));
    }

    #[test]
    fn no_chart_entries_give_an_empty_timeline() {
        let dataset = Dataset::from_records(
            vec![record("BER", "2020-01-01", Some(1.0), None)],
            Vec::new(),
            Vec::new(),
        );
        assert!(dataset.timeline_points().is_empty());
        assert_eq!(serde_json::to_string(&dataset.timeline_points()).unwrap(), "[]");
    }

    #[test]
    fn music_series_in_date_order() {
        let dataset = Dataset::from_records(
            Vec::new(),
            Vec::new(),
            vec![chart("2020-03-16", 0.5), chart("2020-03-15", 0.9)],
        );
        let points = dataset.timeline_points();
        assert_eq!(points.len(), 2);
        assert!(points[0].date < points[1].date);
        assert_eq!(points[0].energy, Some(0.9));
        assert_eq!(dataset.music_daily()[1].date, day("2020-03-16"));
        assert_eq!(dataset.music_daily()[1].count, 1);
    }
}
