//! Aggregation of chart entries into one audio-feature summary per day.

use std::collections::BTreeMap;
use sw_core::day_key::DayKey;
use sw_core::music::{ChartEntry, MusicDaily};

#[derive(Default)]
struct FeatureMean {
    sum: f64,
    count: u32,
}

impl FeatureMean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value.filter(|v| v.is_finite()) {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Default)]
struct DayAccumulator {
    total_streams: u64,
    count: u32,
    energy: FeatureMean,
    danceability: FeatureMean,
    acousticness: FeatureMean,
    speechiness: FeatureMean,
}

/// Collapse chart entries into chronologically ordered daily summaries.
///
/// Each feature is averaged over the entries that carry it, so a day where no
/// entry has speechiness keeps `speechiness: None` while its other features
/// are still reported.
pub fn aggregate_daily(entries: &[ChartEntry]) -> Vec<MusicDaily> {
    let mut days: BTreeMap<DayKey, DayAccumulator> = BTreeMap::new();
    for entry in entries {
        let day = days.entry(entry.date).or_default();
        day.total_streams += entry.streams;
        day.count += 1;
        day.energy.push(entry.energy);
        day.danceability.push(entry.danceability);
        day.acousticness.push(entry.acousticness);
        day.speechiness.push(entry.speechiness);
    }
    log::debug!(
        "[SW] music: aggregated {} chart entries into {} days",
        entries.len(),
        days.len()
    );
    days.into_iter()
        .map(|(date, acc)| MusicDaily {
            date,
            total_streams: acc.total_streams,
            count: acc.count,
            energy: acc.energy.mean(),
            danceability: acc.danceability.mean(),
            acousticness: acc.acousticness.mean(),
            speechiness: acc.speechiness.mean(),
        })
        .collect()
}
