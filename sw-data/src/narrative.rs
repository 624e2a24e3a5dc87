//! Visibility of the narrative panels as a function of unclamped progress.

/// Width (in progress units) over which a panel fades in or out.
pub const FADE_WIDTH: f64 = 0.05;

/// Where the reader is relative to the scrub region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Before,
    Within,
    After,
}

impl Phase {
    pub fn from_progress(progress: f64) -> Self {
        if progress < 0.0 {
            Phase::Before
        } else if progress > 1.0 {
            Phase::After
        } else {
            Phase::Within
        }
    }
}

/// A text panel shown while progress lies inside `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beat {
    pub start: f64,
    pub end: f64,
    pub title: &'static str,
    pub body: &'static str,
}

impl Beat {
    /// 1 inside the window, linear ramp over [`FADE_WIDTH`] on either side, 0 beyond.
    pub fn opacity(&self, progress: f64) -> f64 {
        if !progress.is_finite() {
            return 0.0;
        }
        let distance = if progress < self.start {
            self.start - progress
        } else if progress > self.end {
            progress - self.end
        } else {
            0.0
        };
        (1.0 - distance / FADE_WIDTH).clamp(0.0, 1.0)
    }

    pub fn is_visible(&self, progress: f64) -> bool {
        self.opacity(progress) > 0.0
    }
}

/// The story told alongside the scrub, in reading order.
pub const BEATS: [Beat; 6] = [
    Beat {
        start: f64::NEG_INFINITY,
        end: -0.02,
        title: "Does the weather change what we listen to?",
        body: "Five years of Swiss weather station data next to five years of the Swiss Spotify chart. Scroll to travel through time.",
    },
    Beat {
        start: 0.0,
        end: 0.18,
        title: "2017: a baseline year",
        body: "Each circle is a MeteoSwiss station. Its size follows the week's rain; the gauge shows how sunny the country was.",
    },
    Beat {
        start: 0.2,
        end: 0.55,
        title: "Summer highs, winter lows",
        body: "Energy and danceability drift with the seasons while acoustic tracks climb every December.",
    },
    Beat {
        start: 0.57,
        end: 0.8,
        title: "Spring 2020",
        body: "Lockdown begins on 16 March. The charts keep playing, but the country is indoors.",
    },
    Beat {
        start: 0.82,
        end: 1.0,
        title: "2021 and after",
        body: "The pandemic period stays shaded until the end of 2021.",
    },
    Beat {
        start: 1.02,
        end: f64::INFINITY,
        title: "Thanks for scrolling",
        body: "Weather: MeteoSwiss open data. Music: Spotify charts and track audio features.",
    },
];
