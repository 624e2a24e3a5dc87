//! Precipitation glyph sizing and the time-driven pulse of the map.

use std::f64::consts::TAU;

/// Radius of a station glyph with no rain, in pixels.
pub const MIN_RADIUS: f64 = 3.0;

/// Extra radius of the wettest station of the dataset, in pixels.
pub const RADIUS_SPAN: f64 = 17.0;

/// Duration of one pulse cycle in milliseconds.
pub const PULSE_PERIOD_MS: f64 = 1600.0;

/// Relative radius swing of the pulse.
pub const PULSE_AMPLITUDE: f64 = 0.25;

/// Rain at a station relative to the wettest 7-day mean of the dataset, in [0, 1].
pub fn intensity(precipitation_7d: Option<f64>, dataset_max: f64) -> f64 {
    match precipitation_7d {
        Some(value) if value.is_finite() && dataset_max.is_finite() && dataset_max > 0.0 => {
            (value / dataset_max).clamp(0.0, 1.0)
        }
        _ => 0.0,
    }
}

pub fn radius(intensity: f64) -> f64 {
    MIN_RADIUS + intensity.clamp(0.0, 1.0) * RADIUS_SPAN
}

/// Radius multiplier at `elapsed_ms` since the animation started.
///
/// Depends on time only; the data decides the base radius.
pub fn pulse_scale(elapsed_ms: f64) -> f64 {
    if !elapsed_ms.is_finite() {
        return 1.0;
    }
    let phase = (elapsed_ms % PULSE_PERIOD_MS) / PULSE_PERIOD_MS;
    1.0 + PULSE_AMPLITUDE * (phase * TAU).sin()
}
