//! Exponentially weighted moving average point forecaster.

use detect_api::EwmaConfig;
use detect_spi::{Observation, PointForecast, PointForecaster, Result};

/// Forecasts the next value as the current exponentially weighted mean.
///
/// The forecast returned for an observation is the mean accumulated over all
/// earlier observations; the observed value is folded in afterwards. There is
/// no warm-up period since the mean is defined from the first observation.
#[derive(Debug, Clone)]
pub struct EwmaPointForecaster {
    config: EwmaConfig,
    mean: f64,
}

impl EwmaPointForecaster {
    pub fn new(config: EwmaConfig) -> Result<Self> {
        config.validate()?;
        let mean = config.init_mean_estimate;
        Ok(Self { config, mean })
    }

    /// Current mean estimate.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    fn update_mean_estimate(&mut self, observed: f64) {
        self.mean += self.config.alpha * (observed - self.mean);
    }
}

impl PointForecaster for EwmaPointForecaster {
    fn forecast(&mut self, observation: &Observation) -> Result<Option<PointForecast>> {
        let forecast = PointForecast::new(self.mean, false);
        self.update_mean_estimate(observation.value);
        Ok(Some(forecast))
    }
}
