//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page controller's signals. Only the page writes
//! them; views receive plain values as props.

use dioxus::prelude::*;
use sw_core::day_key::DayKey;
use sw_db::Dataset;

/// Progress before the first scroll measurement: the intro is showing.
pub const INITIAL_PROGRESS: f64 = -1.0;

/// Outcome of the one-time data load.
///
/// Starts as `Loading` and ends in exactly one of the two other states.
#[derive(Clone, PartialEq, Debug)]
pub enum LoadState {
    Loading,
    Ready(Dataset),
    Failed(String),
}

impl LoadState {
    pub fn dataset(&self) -> Option<&Dataset> {
        match self {
            LoadState::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }
}

/// Shared state of the story page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Data load status, holding the dataset once ready
    pub load: Signal<LoadState>,
    /// Day picked by the scroll position (None until data is ready)
    pub selected_date: Signal<Option<DayKey>>,
    /// Unclamped scroll progress driving the narrative panels
    pub progress: Signal<f64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            load: Signal::new(LoadState::Loading),
            selected_date: Signal::new(None),
            progress: Signal::new(INITIAL_PROGRESS),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_state_exposes_dataset_only_when_ready() {
        let dataset = Dataset::from_records(Vec::new(), Vec::new(), Vec::new());
        assert!(LoadState::Loading.dataset().is_none());
        assert!(LoadState::Failed("boom".to_string()).dataset().is_none());
        assert_eq!(LoadState::Ready(dataset.clone()).dataset(), Some(&dataset));
    }
}
