//! Output of a Holt-Winters run split into its fitted and forecast parts

use crate::metrics::{evaluate, ErrorMetrics};
use crate::Result;
use serde::Serialize;

/// Fitted values for the historical series followed by the forecasts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    values: Vec<f64>,
    series_length: usize,
}

impl Forecast {
    pub(crate) fn new(values: Vec<f64>, series_length: usize) -> Self {
        debug_assert!(series_length <= values.len());
        Self {
            values,
            series_length,
        }
    }

    /// All values: fitted first, then forecasts
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// In-sample fitted values, one per historical observation
    pub fn fitted(&self) -> &[f64] {
        &self.values[..self.series_length]
    }

    /// Out-of-sample forecasts
    pub fn predictions(&self) -> &[f64] {
        &self.values[self.series_length..]
    }

    /// Number of forecast points
    pub fn horizon(&self) -> usize {
        self.values.len() - self.series_length
    }

    /// Total number of values, fitted plus forecast
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the forecast, returning all values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Score the fitted values against the observations they were fitted to
    pub fn fit_metrics(&self, actual: &[f64]) -> Result<ErrorMetrics> {
        evaluate(actual, self.fitted())
    }
}
