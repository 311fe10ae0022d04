//! Interval forecaster trait definition.

use crate::error::Result;
use crate::model::{IntervalForecast, Observation};

/// Threshold-band forecaster.
///
/// Given the observation and a point forecast to center on, produces the
/// weak/strong threshold band and updates its dispersion estimate.
pub trait IntervalForecaster: Send + Sync {
    /// Produce the threshold band around `point_forecast` for this observation.
    fn forecast(
        &mut self,
        observation: &Observation,
        point_forecast: f64,
    ) -> Result<IntervalForecast>;
}
