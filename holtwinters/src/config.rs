//! Serializable model configuration
//!
//! Season length and horizon are kept as signed integers so that values read
//! from JSON, TOML or a host application's settings can be rejected with a typed
//! error instead of failing inside the deserializer.

use crate::smoothing::HoltWinters;
use crate::{HoltWintersError, Result};
use serde::{Deserialize, Serialize};

/// Holt-Winters settings as loaded from a host application's configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoltWintersConfig {
    /// Level smoothing coefficient
    pub alpha: f64,
    /// Trend smoothing coefficient
    pub beta: f64,
    /// Seasonal smoothing coefficient
    pub gamma: f64,
    /// Observations per seasonal cycle
    pub season_length: i64,
    /// Number of points to forecast
    #[serde(default)]
    pub horizon: i64,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.4,
            gamma: 0.3,
            season_length: 4,
            horizon: 0,
        }
    }
}

impl HoltWintersConfig {
    /// Build a model from the configuration, rejecting a non-positive season
    /// length or a negative horizon
    pub fn validate(&self) -> Result<HoltWinters> {
        let season_length = usize::try_from(self.season_length)
            .ok()
            .filter(|&length| length > 0)
            .ok_or(HoltWintersError::InvalidSeasonLength(self.season_length))?;
        self.horizon()?;

        HoltWinters::new(self.alpha, self.beta, self.gamma, season_length)
    }

    /// Forecast horizon as a point count
    pub fn horizon(&self) -> Result<usize> {
        usize::try_from(self.horizon).map_err(|_| HoltWintersError::InvalidHorizon(self.horizon))
    }
}
