use crate::day_key::DayKey;
use crate::station::StationKey;
use serde::{Deserialize, Serialize};

/// Window length of the rolling means carried by every weather record.
pub const ROLLING_WINDOW_DAYS: usize = 7;

/// One day of weather at one station.
///
/// The `_7d` values are centered 7-day rolling means of the MeteoSwiss daily
/// parameters; any of them may be missing for a given day.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Station abbreviation as exported (e.g. "BER"); join through [`WeatherRecord::station_key`]
    pub station_abbr: String,
    pub date: DayKey,
    /// Air temperature 2 m above ground, daily mean (°C), 7-day mean
    pub temperature_7d: Option<f64>,
    /// Precipitation, daily total (mm), 7-day mean
    pub precipitation_7d: Option<f64>,
    /// Sunshine duration, daily total (minutes), 7-day mean
    pub sunshine_7d: Option<f64>,
    /// Precipitation, daily total (mm)
    pub precipitation: Option<f64>,
}

impl WeatherRecord {
    pub fn station_key(&self) -> StationKey {
        StationKey::new(&self.station_abbr)
    }
}
