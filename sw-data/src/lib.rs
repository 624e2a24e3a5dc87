//! Data processing for the sonic weather story.
//!
//! Everything in here is plain arithmetic over already-loaded records and
//! stays free of any browser or UI dependency, so it can be unit tested natively.

pub mod gauge;
pub mod music;
pub mod narrative;
pub mod precipitation;
pub mod scroll;

/// Centered rolling means, as used to smooth the MeteoSwiss daily parameters.
pub mod rolling {
    /// Centered rolling mean with `min_periods = 1`, rounded to two decimals.
    ///
    /// Row `i` averages the present values in `[i - window/2, i + window/2]`
    /// (clipped to the series). A row whose whole window is empty stays `None`.
    pub fn centered_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
        if window == 0 {
            return vec![None; values.len()];
        }
        let before = window / 2;
        let after = window - before - 1;
        (0..values.len())
            .map(|i| {
                let lo = i.saturating_sub(before);
                let hi = (i + after).min(values.len() - 1);
                let (sum, count) = values[lo..=hi]
                    .iter()
                    .flatten()
                    .filter(|v| v.is_finite())
                    .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
                (count > 0).then(|| round2(sum / count as f64))
            })
            .collect()
    }

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_centered_mean_window_7() {
            let values: Vec<Option<f64>> = (1..=10).map(|v| Some(v as f64)).collect();
            let smoothed = centered_mean(&values, 7);
            assert_eq!(smoothed.len(), 10);
            // edges use the partial window: mean(1..=4)
            assert_eq!(smoothed[0], Some(2.5));
            // full window: mean(2..=8)
            assert_eq!(smoothed[4], Some(5.0));
            // mean(7..=10)
            assert_eq!(smoothed[9], Some(8.5));
        }

        #[test]
        fn test_centered_mean_skips_gaps() {
            let values = vec![Some(1.0), None, Some(2.0)];
            let smoothed = centered_mean(&values, 7);
            assert_eq!(smoothed, vec![Some(1.5), Some(1.5), Some(1.5)]);
        }

        #[test]
        fn test_centered_mean_rounds_to_two_decimals() {
            let values = vec![Some(1.0), Some(1.0), Some(2.0)];
            assert_eq!(centered_mean(&values, 7)[0], Some(1.33));
        }

        #[test]
        fn test_centered_mean_all_missing() {
            assert_eq!(centered_mean(&[None, None], 7), vec![None, None]);
            assert!(centered_mean(&[], 7).is_empty());
        }
    }
}

/// Thinning of long series before they are handed to the chart scripts.
pub mod downsample {
    /// Upper bound on points drawn per series.
    pub const MAX_POINTS: usize = 2000;

    /// Evenly pick at most `max_points` items, always keeping the last one.
    ///
    /// Long series yield exactly `max_points` items: `max_points - 1` evenly
    /// spaced ones starting at the first, then the last.
    pub fn downsample<T: Clone>(items: &[T], max_points: usize) -> Vec<T> {
        if items.len() <= max_points {
            return items.to_vec();
        }
        let Some(last) = items.last() else {
            return Vec::new();
        };
        let spaced = max_points.saturating_sub(1);
        let mut result: Vec<T> = (0..spaced)
            .map(|i| items[i * items.len() / spaced].clone())
            .collect();
        if max_points > 0 {
            result.push(last.clone());
        }
        result
    }

}
