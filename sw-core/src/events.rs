//! Fixed calendar events annotated on the audio-feature timeline.

use crate::day_key::DayKey;
use serde::Serialize;

/// Years whose Christmas day gets a marker on the timeline.
pub const CHRISTMAS_YEARS: [i32; 5] = [2018, 2019, 2020, 2021, 2022];

/// How an event is drawn.
#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventShape {
    /// Shaded area between two days
    Period { start: DayKey, end: DayKey },
    /// Vertical line on one day
    Line { date: DayKey, dash: &'static str },
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TimelineEvent {
    pub label: String,
    pub color: &'static str,
    #[serde(flatten)]
    pub shape: EventShape,
}

fn day(year: i32, month: u32, d: u32) -> Option<DayKey> {
    DayKey::from_ymd_opt(year, month, d)
}

/// COVID-19 pandemic period, the two Swiss lockdowns and the Christmas days.
pub fn timeline_events() -> Vec<TimelineEvent> {
    let mut events = Vec::new();

    if let (Some(start), Some(end)) = (day(2020, 2, 25), day(2021, 12, 31)) {
        events.push(TimelineEvent {
            label: "COVID-19 Pandemic".to_string(),
            color: "#b97bf7",
            shape: EventShape::Period { start, end },
        });
    }

    for (label, date) in [("Lockdown 1", day(2020, 3, 16)), ("Lockdown 2", day(2020, 12, 22))] {
        if let Some(date) = date {
            events.push(TimelineEvent {
                label: label.to_string(),
                color: "#e63946",
                shape: EventShape::Line { date, dash: "4 4" },
            });
        }
    }

    events.extend(CHRISTMAS_YEARS.iter().filter_map(|&year| {
        day(year, 12, 25).map(|date| TimelineEvent {
            label: "🎄".to_string(),
            color: "#f1faee",
            shape: EventShape::Line { date, dash: "2 2" },
        })
    }));

    events
}
