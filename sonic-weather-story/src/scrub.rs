//! Scroll adapter: measures the page and writes progress and the selected day.

use dioxus::prelude::*;
use sw_core::day_key::DayKey;
use sw_data::scroll::{map_scroll, ScrubGeometry};
use sw_db::Dataset;
use sw_ui::js_bridge;
use sw_ui::state::AppState;

/// DOM id of the tall region whose travel drives progress.
pub const SCRUB_ID: &str = "scrub-region";

/// DOM id of the sticky visualization panel.
pub const STICKY_ID: &str = "sticky-panel";

/// Signal writes a scroll position calls for.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollUpdate {
    pub progress: Option<f64>,
    pub selected_date: Option<DayKey>,
}

impl ScrollUpdate {
    pub fn is_empty(&self) -> bool {
        self.progress.is_none() && self.selected_date.is_none()
    }
}

/// Compare a mapped scroll position with the current state.
///
/// Only values that differ are returned, so an unchanged position causes no
/// re-render.
pub fn pending_update(
    geometry: &ScrubGeometry,
    dataset: &Dataset,
    progress: f64,
    selected_date: Option<DayKey>,
) -> ScrollUpdate {
    let Some(mapping) = map_scroll(geometry, dataset.available_dates().len()) else {
        return ScrollUpdate::default();
    };
    let date = dataset.date_at(mapping.date_index);
    ScrollUpdate {
        progress: (mapping.progress != progress).then_some(mapping.progress),
        selected_date: date.filter(|d| Some(*d) != selected_date),
    }
}

/// Measure the page and apply the resulting update. No-op until the data is ready.
pub fn sync_scroll(mut state: AppState) {
    let Some(dataset) = state.load.peek().dataset().cloned() else {
        return;
    };
    let Some(geometry) = js_bridge::read_scrub_geometry(SCRUB_ID, STICKY_ID) else {
        return;
    };
    let update = pending_update(
        &geometry,
        &dataset,
        *state.progress.peek(),
        *state.selected_date.peek(),
    );
    if update.is_empty() {
        return;
    }
    if let Some(progress) = update.progress {
        state.progress.set(progress);
    }
    if let Some(day) = update.selected_date {
        log::debug!("[SW] scroll: selected {}", day);
        state.selected_date.set(Some(day));
    }
}
