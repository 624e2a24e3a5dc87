//! Station map: one pulsing circle per weather station for the selected day.
//!
//! The basemap is created once. Glyphs are pushed whenever the selected day
//! changes, and a frame loop owned by this component scales their radius.

use crate::components::{ChartContainer, ChartHeader};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use serde::Serialize;
use sw_data::precipitation::pulse_scale;

/// DOM id for the MapLibre container div.
pub const MAP_CONTAINER_ID: &str = "station-map";

const MAP_HEIGHT: u32 = 420;

/// Fallback basemap when no MapTiler key is baked in at build time.
const FALLBACK_STYLE_URL: &str = "https://demotiles.maplibre.org/style.json";

/// Fixed camera over Switzerland.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub style: String,
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
    pub glyph_color: &'static str,
}

impl Default for MapView {
    fn default() -> Self {
        let style = match option_env!("MAPTILER_KEY") {
            Some(key) => format!("https://api.maptiler.com/maps/dataviz/style.json?key={key}"),
            None => FALLBACK_STYLE_URL.to_string(),
        };
        Self {
            style,
            longitude: 8.2275,
            latitude: 46.8182,
            zoom: 6.9,
            pitch: 40.0,
            bearing: 0.0,
            glyph_color: "#4ea8de",
        }
    }
}

#[component]
pub fn StationMap() -> Element {
    let state = use_context::<AppState>();

    // ─── Create the map once ───
    use_effect(move || match serde_json::to_string(&MapView::default()) {
        Ok(config) => js_bridge::render_station_map(MAP_CONTAINER_ID, &config),
        Err(e) => log::error!("[SW] map: could not serialize view: {}", e),
    });

    // ─── Push glyphs for the selected day ───
    use_effect(move || {
        let Some(day) = (state.selected_date)() else {
            return;
        };
        let glyphs = match state.load.read().dataset() {
            Some(dataset) => dataset.station_glyphs(day),
            None => return,
        };
        match serde_json::to_string(&glyphs) {
            Ok(json) => js_bridge::update_station_glyphs(MAP_CONTAINER_ID, &json),
            Err(e) => log::error!("[SW] map: could not serialize glyphs: {}", e),
        }
    });

    // ─── Pulse loop, dropped with the component ───
    use_future(|| async {
        let mut started: Option<f64> = None;
        while let Some(now) = js_bridge::next_animation_frame().await {
            let start = *started.get_or_insert(now);
            js_bridge::set_station_pulse(MAP_CONTAINER_ID, pulse_scale(now - start));
        }
        log::warn!("[SW] map: animation frames unavailable, pulse stopped");
    });

    use_drop(|| js_bridge::destroy_chart(MAP_CONTAINER_ID));

    rsx! {
        div {
            ChartHeader {
                title: "Precipitation by station".to_string(),
                caption: "Circle size: 7-day mean precipitation".to_string(),
            }
            ChartContainer {
                id: MAP_CONTAINER_ID.to_string(),
                height: MAP_HEIGHT,
                placeholder: "Loading map...".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_view_serializes_for_the_script() {
        let json = serde_json::to_value(MapView::default()).unwrap();
        assert_eq!(json["longitude"], 8.2275);
        assert_eq!(json["latitude"], 46.8182);
        assert_eq!(json["zoom"], 6.9);
        assert_eq!(json["pitch"], 40.0);
        assert_eq!(json["bearing"], 0.0);
        assert!(json["glyphColor"].is_string());
        assert!(json["style"].as_str().unwrap().contains("style.json"));
    }
}
