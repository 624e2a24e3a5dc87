//! Scroll position to narrative progress and date index.
//!
//! The page has a tall "scrub" region with a sticky visualization panel on top
//! of it. While the scrub region travels past the viewport, progress runs from
//! 0 to 1 and picks a day out of the sorted list of available dates.
//!
//! Nothing here touches the DOM; the caller measures the geometry and hands it in.

/// Measurements taken on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubGeometry {
    /// Top edge of the scrub region relative to the viewport top (negative once scrolled past)
    pub scrub_top: f64,
    /// Full height of the scrub region
    pub scrub_height: f64,
    /// Height of the browser viewport
    pub viewport_height: f64,
    /// Height of the sticky panel, `None` until it has been laid out
    pub sticky_height: Option<f64>,
}

impl ScrubGeometry {
    fn sticky(&self) -> f64 {
        self.sticky_height.filter(|h| h.is_finite()).unwrap_or(0.0)
    }

    /// Pixel travel between "progress begins" and "progress ends".
    ///
    /// Negative whenever the scrub region is taller than the viewport minus the
    /// sticky panel, which is the only case where a mapping exists.
    pub fn scroll_distance(&self) -> f64 {
        self.viewport_height - self.scrub_height - self.sticky()
    }

    /// Unclamped fraction of travel completed; `None` when there is no travel.
    pub fn raw_progress(&self) -> Option<f64> {
        if !(self.scrub_top.is_finite()
            && self.scrub_height.is_finite()
            && self.viewport_height.is_finite())
        {
            return None;
        }
        let distance = self.scroll_distance();
        if distance >= 0.0 {
            return None;
        }
        Some((self.scrub_top - self.sticky()) / distance)
    }
}

/// Result of mapping one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMapping {
    /// Unclamped progress, drives panel fades. Below 0 is before the scrub, above 1 after it.
    pub progress: f64,
    /// Progress clamped into [0, 1], used only to pick the date.
    pub clamped: f64,
    /// Index into the sorted available dates.
    pub date_index: usize,
}

/// Index into `num_dates` sorted dates for a clamped progress value.
pub fn date_index_for(clamped: f64, num_dates: usize) -> Option<usize> {
    if num_dates == 0 {
        return None;
    }
    let last = num_dates - 1;
    let index = (clamped.clamp(0.0, 1.0) * last as f64).floor() as usize;
    Some(index.min(last))
}

/// Map scroll geometry onto progress and a date index.
///
/// Returns `None` (leave state untouched) when there are no dates or when the
/// geometry has no travel distance yet.
pub fn map_scroll(geometry: &ScrubGeometry, num_dates: usize) -> Option<ScrollMapping> {
    if num_dates == 0 {
        return None;
    }
    let progress = geometry.raw_progress()?;
    let clamped = progress.clamp(0.0, 1.0);
    let date_index = date_index_for(clamped, num_dates)?;
    Some(ScrollMapping {
        progress,
        clamped,
        date_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(scrub_top: f64) -> ScrubGeometry {
        ScrubGeometry {
            scrub_top,
            scrub_height: 3000.0,
            viewport_height: 800.0,
            sticky_height: Some(100.0),
        }
    }

    #[test]
    fn raw_progress_example() {
        // viewport 450 - scrub 900 - sticky 50 = -500
        let g = ScrubGeometry {
            scrub_top: -100.0,
            scrub_height: 900.0,
            viewport_height: 450.0,
            sticky_height: Some(50.0),
        };
        assert_eq!(g.scroll_distance(), -500.0);
        let progress = g.raw_progress().unwrap();
        assert!((progress - 0.3).abs() < 1e-12);
    }

    #[test]
    fn half_way_through_three_dates_picks_the_middle_one() {
        assert_eq!(date_index_for(0.5, 3), Some(1));
        assert_eq!(date_index_for(0.0, 3), Some(0));
        assert_eq!(date_index_for(1.0, 3), Some(2));
    }

    #[test]
    fn no_dates_means_no_update() {
        assert_eq!(map_scroll(&geometry(0.0), 0), None);
        assert_eq!(date_index_for(0.5, 0), None);
    }

    #[test]
    fn non_negative_travel_is_a_no_op() {
        let g = ScrubGeometry {
            scrub_top: 0.0,
            scrub_height: 500.0,
            viewport_height: 800.0,
            sticky_height: None,
        };
        assert!(g.scroll_distance() >= 0.0);
        assert_eq!(map_scroll(&g, 10), None);

        // exactly zero travel is also skipped
        let g = ScrubGeometry {
            scrub_top: 0.0,
            scrub_height: 700.0,
            viewport_height: 800.0,
            sticky_height: Some(100.0),
        };
        assert_eq!(g.scroll_distance(), 0.0);
        assert_eq!(map_scroll(&g, 10), None);
    }

    #[test]
    fn unmeasured_sticky_panel_counts_as_zero() {
        let measured = ScrubGeometry {
            sticky_height: Some(0.0),
            ..geometry(-250.0)
        };
        let unmeasured = ScrubGeometry {
            sticky_height: None,
            ..geometry(-250.0)
        };
        assert_eq!(map_scroll(&measured, 5), map_scroll(&unmeasured, 5));
    }

    #[test]
    fn non_finite_geometry_is_skipped() {
        let g = ScrubGeometry {
            scrub_top: f64::NAN,
            ..geometry(0.0)
        };
        assert_eq!(map_scroll(&g, 5), None);
    }

    #[test]
    fn raw_progress_is_kept_outside_unit_range() {
        // well before the scrub region reaches the sticky panel
        let before = map_scroll(&geometry(2000.0), 10).unwrap();
        assert!(before.progress < 0.0);
        assert_eq!(before.clamped, 0.0);
        assert_eq!(before.date_index, 0);

        // far past the end
        let after = map_scroll(&geometry(-10_000.0), 10).unwrap();
        assert!(after.progress > 1.0);
        assert_eq!(after.clamped, 1.0);
        assert_eq!(after.date_index, 9);
    }

    #[test]
    fn progress_boundaries_are_exact() {
        // scrub top level with the sticky panel: progress is exactly 0
        let start = map_scroll(&geometry(100.0), 4).unwrap();
        assert_eq!(start.progress, 0.0);
        assert_eq!(start.date_index, 0);

        // travel fully consumed: progress is exactly 1 and the last day is selected
        let distance = geometry(0.0).scroll_distance();
        let end = map_scroll(&geometry(100.0 + distance), 4).unwrap();
        assert_eq!(end.progress, 1.0);
        assert_eq!(end.date_index, 3);
    }

    #[test]
    fn scrolling_down_never_moves_the_date_backwards() {
        let num_dates = 1826;
        let mut previous = 0usize;
        let mut top = 1500.0;
        while top > -5000.0 {
            let mapping = map_scroll(&geometry(top), num_dates).unwrap();
            assert!((0.0..=1.0).contains(&mapping.clamped));
            assert!(mapping.date_index < num_dates);
            assert!(mapping.date_index >= previous);
            previous = mapping.date_index;
            top -= 7.3;
        }
        assert_eq!(previous, num_dates - 1);
    }
}
