//! Sonic Weather: a scroll-driven story of Swiss weather and Swiss music charts.
//!
//! Data flow:
//! 1. On mount: fetch the three parquet files concurrently, decode them into
//!    an immutable `Dataset` and select the first available day.
//! 2. On scroll or resize: measure the scrub region, map the position to
//!    progress and a day, and write the signals that changed.
//! 3. The map, timeline and gauge re-render from the selected day; the
//!    narrative panels fade with the unclamped progress.

mod scrub;

use anyhow::Context;
use dioxus::prelude::*;
use futures::future::try_join3;
use sw_core::day_key::DayKey;
use sw_data::gauge::GaugeLevel;
use sw_data::narrative::{Phase, BEATS};
use sw_db::{DataFile, DataSources, Dataset};
use sw_ui::components::{
    ErrorDisplay, LoadingSpinner, StationMap, StoryPanel, SunshineGauge, TimelineChart,
};
use sw_ui::js_bridge;
use sw_ui::state::{AppState, LoadState};

/// Height of the scrub region in viewport heights; more means slower travel through the days.
const SCRUB_VIEWPORTS: u32 = 6;

fn main() {
    // A second init (hot reload) keeps the first logger
    let _ = dioxus_logger::init(dioxus_logger::tracing::Level::INFO);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sonic-weather-root"))
        .launch(App);
}

/// Fetch all three files at once and build the dataset. Any failure fails the whole load.
async fn load_dataset(sources: &DataSources) -> anyhow::Result<Dataset> {
    let (weather, stations, charts) = try_join3(
        js_bridge::fetch_bytes(sources.path(DataFile::Weather)),
        js_bridge::fetch_bytes(sources.path(DataFile::Stations)),
        js_bridge::fetch_bytes(sources.path(DataFile::Charts)),
    )
    .await?;
    let dataset = Dataset::from_parquet(weather, stations, charts)
        .context("Failed to decode the story data")?;
    Ok(dataset)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load data once on mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            match load_dataset(&DataSources::default()).await {
                Ok(dataset) => {
                    let first = dataset.first_date();
                    log::info!(
                        "[SW] load: ready with {} days, first {:?}",
                        dataset.available_dates().len(),
                        first.map(|d| d.to_string())
                    );
                    state.selected_date.set(first);
                    state.load.set(LoadState::Ready(dataset));
                }
                Err(e) => {
                    log::error!("[SW] load: {:#}", e);
                    state.load.set(LoadState::Failed(format!("{:#}", e)));
                }
            }
        });
    });

    // ─── Effect 2: Initial scroll mapping once the data is ready ───
    use_effect(move || {
        if state.load.read().dataset().is_some() {
            scrub::sync_scroll(state);
        }
    });

    let progress = (state.progress)();
    let phase = Phase::from_progress(progress);
    let scrub_height = format!("height: {}vh;", SCRUB_VIEWPORTS * 100);

    rsx! {
        div {
            style: "position: fixed; inset: 0; overflow-y: auto; color: #eee;",
            "data-phase": "{phase:?}",
            onscroll: move |_| scrub::sync_scroll(state),
            onresize: move |_| scrub::sync_scroll(state),

            // Intro: reader scrolls through this before progress starts
            div { style: "height: 100vh;" }

            section {
                style: "position: relative;",
                div {
                    id: scrub::STICKY_ID,
                    style: "position: sticky; top: 0; height: 100vh; box-sizing: border-box; padding: 16px 24px; overflow: hidden;",
                    StoryViews {}
                }
                div {
                    id: scrub::SCRUB_ID,
                    style: "{scrub_height}",
                }
            }

            // Outro
            div { style: "height: 100vh;" }

            for beat in BEATS {
                StoryPanel { key: "{beat.title}", beat, progress }
            }
        }
    }
}

/// Gauge reading and heading of the sticky panel for the selected day.
#[derive(Debug, Clone, PartialEq, Default)]
struct Readout {
    level: GaugeLevel,
    heading: String,
}

fn readout(dataset: &Dataset, selected: Option<DayKey>) -> Readout {
    match selected {
        Some(day) => Readout {
            level: dataset.sunshine_level(day),
            heading: day.month_label(),
        },
        None => Readout::default(),
    }
}

/// Contents of the sticky panel for the current load state.
#[component]
fn StoryViews() -> Element {
    let state = use_context::<AppState>();
    let load = state.load.read().clone();

    match load {
        LoadState::Loading => rsx! { LoadingSpinner {} },
        LoadState::Failed(message) => rsx! { ErrorDisplay { message } },
        LoadState::Ready(dataset) => {
            let Readout { level, heading } = readout(&dataset, (state.selected_date)());
            rsx! {
                div {
                    style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: 3fr 2fr; gap: 16px;",
                    div {
                        h1 { style: "margin: 0 0 12px 0; font-size: 22px;", "{heading}" }
                        StationMap {}
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px; padding-top: 40px;",
                        SunshineGauge { level }
                        TimelineChart {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_core::weather::WeatherRecord;

    fn sunny(date: &str, sunshine: f64) -> WeatherRecord {
        WeatherRecord {
            station_abbr: "BER".to_string(),
            date: DayKey::parse(date).unwrap(),
            temperature_7d: None,
            precipitation_7d: None,
            sunshine_7d: Some(sunshine),
            precipitation: None,
        }
    }

    #[test]
    fn readout_follows_the_selected_day() {
        let dataset = Dataset::from_records(
            vec![sunny("2020-03-01", 100.0), sunny("2020-03-16", 300.0)],
            Vec::new(),
            Vec::new(),
        );
        let readout = readout(&dataset, DayKey::parse("2020-03-16").ok());
        assert_eq!(readout.heading, "March 2020");
        assert_eq!(readout.level.mean, 300.0);
        assert_eq!(readout.level.pct, 1.0);
    }

    #[test]
    fn readout_is_empty_before_a_day_is_selected() {
        let dataset =
            Dataset::from_records(vec![sunny("2020-03-01", 100.0)], Vec::new(), Vec::new());
        assert_eq!(readout(&dataset, None), Readout::default());
    }

    #[test]
    fn load_state_clones_share_the_dataset() {
        let dataset =
            Dataset::from_records(vec![sunny("2020-03-01", 100.0)], Vec::new(), Vec::new());
        let load = LoadState::Ready(dataset.clone());
        assert_eq!(load.clone().dataset(), Some(&dataset));
    }
}
