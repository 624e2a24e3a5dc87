//! Audio-feature timeline with event annotations and a selected-date marker.

use crate::components::{ChartContainer, ChartHeader};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use serde::Serialize;
use sw_core::day_key::MONTH_LABEL_FORMAT;
use sw_core::events::{timeline_events, TimelineEvent};
use sw_core::music::AudioFeature;
use sw_db::models::TimelineMarker;

/// DOM id for the D3 chart container div.
pub const TIMELINE_CONTAINER_ID: &str = "timeline-chart";

const TIMELINE_HEIGHT: u32 = 380;

/// Minimum horizontal distance between axis ticks, in pixels.
const MIN_TICK_GAP: u32 = 90;

#[derive(Debug, Clone, Serialize, PartialEq)]
struct SeriesConfig {
    key: &'static str,
    label: &'static str,
    color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct TimelineConfig {
    height: u32,
    tick_format: &'static str,
    min_tick_gap: u32,
    series: Vec<SeriesConfig>,
    events: Vec<TimelineEvent>,
}

fn timeline_config() -> TimelineConfig {
    TimelineConfig {
        height: TIMELINE_HEIGHT,
        tick_format: MONTH_LABEL_FORMAT,
        min_tick_gap: MIN_TICK_GAP,
        series: AudioFeature::PLOTTED
            .iter()
            .map(|f| SeriesConfig {
                key: f.key(),
                label: f.key(),
                color: f.color(),
            })
            .collect(),
        events: timeline_events(),
    }
}

#[component]
pub fn TimelineChart() -> Element {
    let state = use_context::<AppState>();

    // ─── Draw the series once the dataset is ready ───
    use_effect(move || {
        let points = match state.load.read().dataset() {
            Some(dataset) => dataset.timeline_points(),
            None => return,
        };
        let data_json = match serde_json::to_string(&points) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[SW] timeline: could not serialize points: {}", e);
                return;
            }
        };
        match serde_json::to_string(&timeline_config()) {
            Ok(config_json) => {
                js_bridge::render_timeline_chart(TIMELINE_CONTAINER_ID, &data_json, &config_json)
            }
            Err(e) => log::error!("[SW] timeline: could not serialize config: {}", e),
        }
    });

    // ─── Move the marker with the selected day ───
    use_effect(move || {
        let Some(day) = (state.selected_date)() else {
            return;
        };
        match serde_json::to_string(&TimelineMarker::from(day)) {
            Ok(json) => js_bridge::set_timeline_marker(TIMELINE_CONTAINER_ID, &json),
            Err(e) => log::error!("[SW] timeline: could not serialize marker: {}", e),
        }
    });

    use_drop(|| js_bridge::destroy_chart(TIMELINE_CONTAINER_ID));

    rsx! {
        div {
            ChartHeader {
                title: "What Switzerland streamed".to_string(),
                caption: "Daily mean audio features of the Swiss Spotify chart".to_string(),
            }
            ChartContainer {
                id: TIMELINE_CONTAINER_ID.to_string(),
                height: TIMELINE_HEIGHT,
            }
        }
    }
}
