//! Sunshine gauge arithmetic.

/// Lowest and highest daily mean seen over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Bounds over finite values; `None` when there are none.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<Bounds>, v| match acc {
                None => Some(Bounds { min: v, max: v }),
                Some(b) => Some(Bounds {
                    min: b.min.min(v),
                    max: b.max.max(v),
                }),
            })
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// Mean of the finite values, `None` when there are none.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// What the gauge shows for one day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaugeLevel {
    /// Mean sunshine of the day; 0 when the day has no values
    pub mean: f64,
    /// Position on the track in [0, 1]
    pub pct: f64,
}

impl GaugeLevel {
    /// Rounded percentage used as CSS width, e.g. "42%".
    pub fn pct_label(&self) -> String {
        format!("{}%", (self.pct * 100.0).round() as i64)
    }
}

/// Normalize the day's values against the global bounds.
///
/// An empty day reads as 0/0. Equal bounds do not divide by zero.
pub fn level<I: IntoIterator<Item = f64>>(values: I, bounds: Option<Bounds>) -> GaugeLevel {
    let bounds = match bounds {
        Some(b) if b.is_finite() => b,
        _ => return GaugeLevel::default(),
    };
    let Some(m) = mean(values) else {
        return GaugeLevel::default();
    };
    let span = bounds.max - bounds.min;
    let span = if span == 0.0 { 1.0 } else { span };
    GaugeLevel {
        mean: m,
        pct: ((m - bounds.min) / span).clamp(0.0, 1.0),
    }
}
