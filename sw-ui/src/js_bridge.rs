//! Typed wrappers around JS interop.
//!
//! The map and timeline scripts live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules) once MapLibre and D3 are present on the page. This
//! module serializes data for them and calls their `window.*` entry points.
//! It also wraps the handful of browser reads the page needs: fetching the
//! data files, measuring elements and waiting for animation frames.

use anyhow::{anyhow, bail};
use bytes::Bytes;
use sw_data::scroll::ScrubGeometry;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Embed the chart JS files at compile time
static STATION_MAP_JS: &str = include_str!("../assets/js/station-map.js");
static TIMELINE_CHART_JS: &str = include_str!("../assets/js/timeline-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SW JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload so it can sit inside a single-quoted JS string literal.
fn escape_js(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Initialize chart scripts with a wait-for-libraries polling loop.
///
/// The scripts define `renderStationMap(...)`, `renderTimelineChart(...)` and
/// friends via `function` declarations. They are evaluated at global scope
/// through an indirect `eval()` once both MapLibre and D3 are loaded, and each
/// entry point is then promoted to `window.*`. Safe to call more than once.
pub fn init_charts() {
    let all_js = [STATION_MAP_JS, TIMELINE_CHART_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "if (!window.__swChartsReady && !window.__swChartScripts) {{ window.__swChartScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__swChartsReady || window.__swChartsPolling) return;
            window.__swChartsPolling = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof maplibregl !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__swChartScripts);
                    delete window.__swChartScripts;
                    if (typeof renderStationMap !== 'undefined') window.renderStationMap = renderStationMap;
                    if (typeof updateStationGlyphs !== 'undefined') window.updateStationGlyphs = updateStationGlyphs;
                    if (typeof setStationPulse !== 'undefined') window.setStationPulse = setStationPulse;
                    if (typeof renderTimelineChart !== 'undefined') window.renderTimelineChart = renderTimelineChart;
                    if (typeof setTimelineMarker !== 'undefined') window.setTimelineMarker = setTimelineMarker;
                    window.__swChartsReady = true;
                    console.log('SW charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>('<container_id>', '<arg>'...)` once the scripts are
/// initialized and the container exists.
fn call_when_ready(function: &str, container_id: &str, args: &[&str]) {
    let args: String = args
        .iter()
        .map(|a| format!(", '{}'", escape_js(a)))
        .collect();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__swChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}'{args});
                    }} catch(e) {{ console.error('[SW] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Create the station map (tiles, fixed camera, empty glyph layer).
pub fn render_station_map(container_id: &str, config_json: &str) {
    call_when_ready("renderStationMap", container_id, &[config_json]);
}

/// Replace the glyphs drawn on the station map.
pub fn update_station_glyphs(container_id: &str, glyphs_json: &str) {
    call_when_ready("updateStationGlyphs", container_id, &[glyphs_json]);
}

/// Scale every glyph radius on the map. Called every animation frame, so no polling.
pub fn set_station_pulse(container_id: &str, scale: f64) {
    call_js(&format!(
        "if (window.setStationPulse) window.setStationPulse('{}', {});",
        container_id, scale
    ));
}

/// Render the audio-feature timeline with its event annotations.
pub fn render_timeline_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_when_ready("renderTimelineChart", container_id, &[data_json, config_json]);
}

/// Move the selected-date marker on the timeline.
pub fn set_timeline_marker(container_id: &str, marker_json: &str) {
    call_when_ready("setTimelineMarker", container_id, &[marker_json]);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Fetch a file served next to the page and return its body.
///
/// A non-2xx status is an error carrying the URL and status code.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Bytes> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No browser window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("Failed to fetch {}: {}", url, js_error(e)))?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        bail!("Failed to fetch {}: HTTP {}", url, response.status());
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = js_sys::Uint8Array::new(&buffer).to_vec();
    log::info!("[SW] fetch: {} ({} bytes)", url, body.len());
    Ok(Bytes::from(body))
}

/// Height of an element, `None` when it is not in the DOM yet.
pub fn element_height(id: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().height())
}

/// Measure the scrub region and sticky panel against the viewport.
///
/// `None` when the window or the scrub element is not available yet.
pub fn read_scrub_geometry(scrub_id: &str, sticky_id: &str) -> Option<ScrubGeometry> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let rect = document.get_element_by_id(scrub_id)?.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    Some(ScrubGeometry {
        scrub_top: rect.top(),
        scrub_height: rect.height(),
        viewport_height,
        sticky_height: element_height(sticky_id),
    })
}

/// Resolve on the next `requestAnimationFrame` with its timestamp in milliseconds.
pub async fn next_animation_frame() -> Option<f64> {
    let window = web_sys::window()?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let _ = window.request_animation_frame(&resolve);
    });
    JsFuture::from(promise).await.ok()?.as_f64()
}
