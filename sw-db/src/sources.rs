//! Locations of the three data files served next to the page.

use std::fmt;

/// Daily weather per station, 2017 to 2021, with 7-day rolling means.
pub const WEATHER_PATH: &str = "/data/meteo_swiss_filtered.parquet";

/// Station catalogue with coordinates and display names.
pub const STATIONS_PATH: &str = "/data/stations.parquet";

/// Swiss Spotify chart entries enriched with audio features.
pub const CHARTS_PATH: &str = "/data/swiss_charts_enriched.parquet";

/// Which of the three files a record (or an error) comes from.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DataFile {
    Weather,
    Stations,
    Charts,
}

impl DataFile {
    pub fn label(&self) -> &'static str {
        match self {
            DataFile::Weather => "weather data",
            DataFile::Stations => "station data",
            DataFile::Charts => "chart data",
        }
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// URLs the page fetches its data from.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSources {
    pub weather: String,
    pub stations: String,
    pub charts: String,
}

impl DataSources {
    pub fn path(&self, file: DataFile) -> &str {
        match file {
            DataFile::Weather => &self.weather,
            DataFile::Stations => &self.stations,
            DataFile::Charts => &self.charts,
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            weather: WEATHER_PATH.to_string(),
            stations: STATIONS_PATH.to_string(),
            charts: CHARTS_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sources_are_the_served_files() {
        let sources = DataSources::default();
        assert_eq!(sources.path(DataFile::Weather), WEATHER_PATH);
        assert_eq!(sources.path(DataFile::Stations), STATIONS_PATH);
        assert_eq!(sources.path(DataFile::Charts), CHARTS_PATH);
    }
}
