//! Holt-Winters triple exponential smoothing (additive seasonality)
//!
//! ```text
//! Level:    L_t = α (x_t - S_{t mod m}) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:   S_{t mod m} = γ (x_t - L_t) + (1 - γ) S_{t mod m}
//! Fitted:   L_t + T_t + S_{t mod m}
//! Forecast: L_n + h T_n + S_{(n + h - 1) mod m}
//! ```

use crate::forecast::Forecast;
use crate::initialization::{check_season_length, initial_seasonality, initial_trend};
use crate::{HoltWintersError, Result};
use tracing::debug;

/// Smooth a seasonal series and forecast `n_predictions` points past its end.
///
/// The returned vector holds `series.len() + n_predictions` values: a fitted value
/// for every observation followed by the forecasts. Coefficients are not range
/// checked; values outside `[0, 1]` are accepted and only change how the
/// estimates converge.
///
/// # Errors
///
/// Inputs are validated before any computation, in this order:
/// - [`HoltWintersError::InvalidSeasonLength`] if `season_length` is zero
/// - [`HoltWintersError::EmptySeries`] if `series` is empty
/// - [`HoltWintersError::InvalidHorizon`] if the output length overflows `usize`
/// - [`HoltWintersError::InsufficientData`] if `series` holds fewer than two cycles
pub fn triple_exponential_smoothing(
    series: &[f64],
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
    n_predictions: usize,
) -> Result<Vec<f64>> {
    check_season_length(season_length)?;
    if series.is_empty() {
        return Err(HoltWintersError::EmptySeries);
    }
    let series_length = series.len();
    let output_length = series_length.checked_add(n_predictions).ok_or_else(|| {
        HoltWintersError::InvalidHorizon(i64::try_from(n_predictions).unwrap_or(i64::MAX))
    })?;

    let mut trend = initial_trend(series, season_length)?;
    let mut season = initial_seasonality(series, season_length)?;
    let mut level = series[0];
    debug!(level, trend, ?season, "initial Holt-Winters state");

    let mut output = Vec::with_capacity(output_length);

    for (i, &value) in series.iter().enumerate() {
        let slot = i % season_length;
        let new_level = alpha * (value - season[slot]) + (1.0 - alpha) * (level + trend);
        trend = beta * (new_level - level) + (1.0 - beta) * trend;
        level = new_level;
        season[slot] = gamma * (value - level) + (1.0 - gamma) * season[slot];
        output.push(level + trend + season[slot]);
    }

    debug!(level, trend, n_predictions, "fitting complete, extrapolating");

    for m in 1..=n_predictions {
        let slot = (series_length + m - 1) % season_length;
        output.push(level + m as f64 * trend + season[slot]);
    }

    Ok(output)
}

/// Holt-Winters model with fixed smoothing coefficients and seasonal period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    season_length: usize,
}

impl HoltWinters {
    /// Create a new model.
    ///
    /// Only the season length is validated; it must be greater than zero.
    pub fn new(alpha: f64, beta: f64, gamma: f64, season_length: usize) -> Result<Self> {
        check_season_length(season_length)?;

        Ok(Self {
            alpha,
            beta,
            gamma,
            season_length,
        })
    }

    /// Level smoothing coefficient
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Trend smoothing coefficient
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Seasonal smoothing coefficient
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of observations per seasonal cycle
    pub fn season_length(&self) -> usize {
        self.season_length
    }

    /// Fit the model to `series` and forecast `horizon` points past its end
    pub fn forecast(&self, series: &[f64], horizon: usize) -> Result<Forecast> {
        let values = triple_exponential_smoothing(
            series,
            self.alpha,
            self.beta,
            self.gamma,
            self.season_length,
            horizon,
        )?;

        Ok(Forecast::new(values, series.len()))
    }
}
