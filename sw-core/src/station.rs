use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-normalized station identifier used to join weather rows to stations.
///
/// Weather exports use upper-case abbreviations ("BER") while the station
/// catalogue uses lower-case item ids ("ber"); both sides go through this
/// type before any lookup.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    pub fn new(id: &str) -> Self {
        StationKey(id.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationKey {
    fn from(value: &str) -> Self {
        StationKey::new(value)
    }
}

/// A MeteoSwiss surface weather station.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier as published in the station catalogue (e.g. "ber")
    pub id: String,
    /// Longitude in decimal degrees (WGS84)
    pub lon: f64,
    /// Latitude in decimal degrees (WGS84)
    pub lat: f64,
    /// Display name (e.g. "Bern / Zollikofen")
    pub title: String,
}

impl Station {
    pub fn key(&self) -> StationKey {
        StationKey::new(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(StationKey::new("ABC"), StationKey::new("abc"));
        assert_eq!(StationKey::new(" Lug "), StationKey::from("lug"));
    }

    #[test]
    fn station_key_comes_from_id() {
        let station = Station {
            id: "SMA".to_string(),
            lon: 8.565,
            lat: 47.378,
            title: "Zürich / Fluntern".to_string(),
        };
        assert_eq!(station.key().as_str(), "sma");
    }
}
