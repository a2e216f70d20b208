//! Initial state estimation for Holt-Winters smoothing
//!
//! Contains the two estimators that seed the recursive update:
//! - Initial trend from the first two seasonal cycles
//! - Initial seasonal indices averaged across all complete cycles

use crate::{HoltWintersError, Result};
use tracing::warn;

/// Fail fast on a zero season length before any division by it
pub(crate) fn check_season_length(season_length: usize) -> Result<()> {
    if season_length == 0 {
        return Err(HoltWintersError::InvalidSeasonLength(0));
    }
    Ok(())
}

/// Estimate the initial trend from the first two seasonal cycles.
///
/// Averages the `season_length` cycle-over-cycle differences
/// `series[i + L] - series[i]`, each divided by `L`, so the result is the
/// average per-step change between the first and second cycle.
///
/// # Errors
///
/// Returns [`HoltWintersError::InvalidSeasonLength`] when `season_length` is zero
/// and [`HoltWintersError::InsufficientData`] when the series holds fewer than
/// two full cycles.
///
/// # Examples
///
/// ```
/// use holtwinters::initial_trend;
///
/// let trend = initial_trend(&[10.0, 10.0, 12.0, 12.0], 2).unwrap();
/// assert_eq!(trend, 1.0);
/// ```
pub fn initial_trend(series: &[f64], season_length: usize) -> Result<f64> {
    check_season_length(season_length)?;

    // An unrepresentable window can never be satisfied by a real slice
    let required = season_length.checked_mul(2).unwrap_or(usize::MAX);
    if series.len() < required {
        return Err(HoltWintersError::InsufficientData {
            required,
            actual: series.len(),
        });
    }

    let period = season_length as f64;
    let trend = series[..season_length]
        .iter()
        .zip(&series[season_length..required])
        .map(|(first, second)| (second - first) / period)
        .sum::<f64>();

    Ok(trend / period)
}

/// Estimate one seasonal index per position within a cycle.
///
/// The series is split into `len / season_length` complete cycles; each index is
/// the average deviation of that position from its own cycle's mean. A trailing
/// partial cycle does not contribute.
///
/// # Errors
///
/// Returns [`HoltWintersError::InvalidSeasonLength`] when `season_length` is zero
/// and [`HoltWintersError::InsufficientData`] when not even one complete cycle is
/// available.
pub fn initial_seasonality(series: &[f64], season_length: usize) -> Result<Vec<f64>> {
    check_season_length(season_length)?;

    let num_seasons = series.len() / season_length;
    if num_seasons == 0 {
        return Err(HoltWintersError::InsufficientData {
            required: season_length,
            actual: series.len(),
        });
    }

    let remainder = series.len() % season_length;
    if remainder > 0 {
        warn!(
            remainder,
            season_length, "dropping trailing partial cycle from seasonal estimate"
        );
    }

    let season_avgs: Vec<f64> = series
        .chunks_exact(season_length)
        .map(|cycle| cycle.iter().sum::<f64>() / season_length as f64)
        .collect();

    let mut initial_season = Vec::with_capacity(season_length);
    for position in 0..season_length {
        let deviation: f64 = season_avgs
            .iter()
            .enumerate()
            .map(|(cycle, avg)| series[season_length * cycle + position] - avg)
            .sum();
        initial_season.push(deviation / num_seasons as f64);
    }

    Ok(initial_season)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SERIES: [f64; 12] = [
        3.0, 10.0, 12.0, 13.0, 12.0, 10.0, 12.0, 14.0, 16.0, 15.0, 14.0, 16.0,
    ];

    #[test]
    fn test_initial_trend() {
        // Differences between cycles: 9, 0, 0, 1 -> (10 / 4) / 4
        let trend = initial_trend(&SERIES, 4).unwrap();
        assert_abs_diff_eq!(trend, 0.625, epsilon = 1e-12);
    }

    #[test]
    fn test_initial_trend_uses_first_two_cycles_only() {
        let mut series = SERIES.to_vec();
        series[10] = 1000.0;
        assert_eq!(
            initial_trend(&series, 4).unwrap(),
            initial_trend(&SERIES, 4).unwrap()
        );
    }

    #[test]
    fn test_initial_trend_flat_series() {
        assert_eq!(initial_trend(&[5.0; 6], 3).unwrap(), 0.0);
    }

    #[test]
    fn test_initial_trend_insufficient_data() {
        let err = initial_trend(&SERIES[..7], 4).unwrap_err();
        assert_eq!(
            err,
            HoltWintersError::InsufficientData {
                required: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn test_initial_trend_oversized_season_length() {
        let err = initial_trend(&SERIES, usize::MAX / 2 + 1).unwrap_err();
        assert_eq!(
            err,
            HoltWintersError::InsufficientData {
                required: usize::MAX,
                actual: 12
            }
        );
    }

    #[test]
    fn test_initial_trend_zero_season_length() {
        assert_eq!(
            initial_trend(&SERIES, 0).unwrap_err(),
            HoltWintersError::InvalidSeasonLength(0)
        );
    }

    #[test]
    fn test_initial_seasonality() {
        // Cycle means: 9.5, 12.0, 15.25
        let season = initial_seasonality(&SERIES, 4).unwrap();
        let expected = [-5.75 / 3.0, -1.75 / 3.0, 1.25 / 3.0, 6.25 / 3.0];

        assert_eq!(season.len(), 4);
        for (actual, expected) in season.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_initial_seasonality_is_centered() {
        let season = initial_seasonality(&SERIES, 4).unwrap();
        assert_abs_diff_eq!(season.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_initial_seasonality_drops_partial_cycle() {
        let mut series = SERIES.to_vec();
        series.extend_from_slice(&[100.0, -100.0]);
        assert_eq!(
            initial_seasonality(&series, 4).unwrap(),
            initial_seasonality(&SERIES, 4).unwrap()
        );
    }

    #[test]
    fn test_initial_seasonality_single_cycle() {
        let season = initial_seasonality(&[1.0, 3.0], 2).unwrap();
        assert_eq!(season, vec![-1.0, 1.0]);
    }

    #[test]
    fn test_initial_seasonality_errors() {
        assert_eq!(
            initial_seasonality(&[1.0, 2.0], 3).unwrap_err(),
            HoltWintersError::InsufficientData {
                required: 3,
                actual: 2
            }
        );
        assert_eq!(
            initial_seasonality(&SERIES, 0).unwrap_err(),
            HoltWintersError::InvalidSeasonLength(0)
        );
    }
}
