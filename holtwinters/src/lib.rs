//! # Holt-Winters
//!
//! Additive Holt-Winters (triple exponential smoothing) for seasonal time series.
//! Given a historical series and its seasonal period, the crate produces smoothed
//! in-sample estimates for every observation followed by an out-of-sample forecast.
//!
//! ## Usage Example
//!
//! ```
//! use holtwinters::triple_exponential_smoothing;
//!
//! let series = [3.0, 10.0, 12.0, 13.0, 12.0, 10.0, 12.0, 14.0, 16.0, 15.0, 14.0, 16.0];
//! let output = triple_exponential_smoothing(&series, 0.5, 0.4, 0.3, 4, 4).unwrap();
//!
//! // Fitted values for the 12 observations, then 4 forecasts
//! assert_eq!(output.len(), 16);
//! ```

use thiserror::Error;

pub mod config;
pub mod forecast;
pub mod initialization;
pub mod metrics;
pub mod smoothing;

pub use config::HoltWintersConfig;
pub use forecast::Forecast;
pub use initialization::{initial_seasonality, initial_trend};
pub use smoothing::{triple_exponential_smoothing, HoltWinters};

/// Errors that can occur while smoothing or forecasting a series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HoltWintersError {
    #[error("Insufficient data for calculation: need at least {required} values, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid season length: {0} (must be greater than zero)")]
    InvalidSeasonLength(i64),

    #[error("Empty time series")]
    EmptySeries,

    #[error("Invalid forecast horizon: {0} (must not be negative or overflow the output length)")]
    InvalidHorizon(i64),

    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type for Holt-Winters operations
pub type Result<T> = std::result::Result<T, HoltWintersError>;
