use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Date format used for day keys and for everything handed to the JS charts: "YYYY-MM-DD"
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Compact date format: "YYYYMMDD"
pub const COMPACT_DAY_FORMAT: &str = "%Y%m%d";

/// Month and year, e.g. "March 2020"; the timeline axis uses the same pattern
pub const MONTH_LABEL_FORMAT: &str = "%B %Y";

/// MeteoSwiss export date format: "DD.MM.YYYY" (time of day follows after a space)
pub const METEO_DAY_FORMAT: &str = "%d.%m.%Y";

/// Errors raised while turning a timestamp into a day key.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum DayKeyError {
    #[error("empty date value")]
    Empty,
    #[error("unrecognized date value: {0}")]
    Unrecognized(String),
    #[error("epoch value out of range: {0}")]
    EpochOutOfRange(i64),
}

/// A calendar day with the time of day stripped.
///
/// Every date that is compared for equality (weather filtering, chart lookups,
/// the selected date) goes through this type so comparisons happen at day
/// granularity.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        DayKey(date)
    }

    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DayKey)
    }

    /// Parse any of the timestamp shapes found in the data files and keep only the day.
    ///
    /// Accepted: `2020-01-02`, `2020-01-02 00:00:00 +00:00`, `2020-01-02T00:00:00Z`,
    /// `20200102` and `02.01.2020 00:00`.
    pub fn parse(value: &str) -> Result<Self, DayKeyError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DayKeyError::Empty);
        }
        let bytes = value.as_bytes();
        let parsed = if bytes.get(4) == Some(&b'-') {
            value
                .get(..10)
                .and_then(|day| NaiveDate::parse_from_str(day, DAY_FORMAT).ok())
        } else if bytes.len() == 8 && bytes.iter().all(u8::is_ascii_digit) {
            NaiveDate::parse_from_str(value, COMPACT_DAY_FORMAT).ok()
        } else if bytes.get(2) == Some(&b'.') {
            value
                .split_whitespace()
                .next()
                .and_then(|day| NaiveDate::parse_from_str(day, METEO_DAY_FORMAT).ok())
        } else {
            None
        };
        parsed
            .map(DayKey)
            .ok_or_else(|| DayKeyError::Unrecognized(value.to_string()))
    }

    /// Day of a UTC epoch timestamp in milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, DayKeyError> {
        DateTime::from_timestamp_millis(millis)
            .map(|dt| DayKey(dt.date_naive()))
            .ok_or(DayKeyError::EpochOutOfRange(millis))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Milliseconds since the epoch at UTC midnight, the x value used by the timeline chart.
    pub fn epoch_millis(&self) -> i64 {
        self.0
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default()
    }

    /// Human label used next to the timeline marker, e.g. "March 2020".
    pub fn month_label(&self) -> String {
        self.0.format(MONTH_LABEL_FORMAT).to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayKey::parse(s)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(value: NaiveDate) -> Self {
        DayKey(value)
    }
}

impl From<DayKey> for NaiveDate {
    fn from(value: DayKey) -> Self {
        value.0
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DayKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}
