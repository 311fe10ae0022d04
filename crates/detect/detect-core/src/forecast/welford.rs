//! Exponentially weighted Welford interval forecaster.

use detect_api::WelfordConfig;
use detect_spi::{IntervalForecast, IntervalForecaster, Observation, Result};

/// Places sigma bands around a point forecast.
///
/// Maintains an exponentially weighted estimate of the residual variance
/// using a Welford-style incremental update, then widens the bands by the
/// configured weak and strong sigma multiples.
#[derive(Debug, Clone)]
pub struct ExponentialWelfordIntervalForecaster {
    config: WelfordConfig,
    variance: f64,
}

impl ExponentialWelfordIntervalForecaster {
    pub fn new(config: WelfordConfig) -> Result<Self> {
        config.validate()?;
        let variance = config.init_variance_estimate;
        Ok(Self { config, variance })
    }

    /// Current residual variance estimate.
    pub fn variance(&self) -> f64 {
        self.variance
    }
}

impl IntervalForecaster for ExponentialWelfordIntervalForecaster {
    fn forecast(&mut self, observation: &Observation, point_forecast: f64) -> Result<IntervalForecast> {
        let residual = observation.value - point_forecast;
        let incr = self.config.alpha * residual;
        self.variance = (1.0 - self.config.alpha) * (self.variance + residual * incr);

        let std_dev = self.variance.sqrt();
        let weak_width = self.config.weak_sigmas * std_dev;
        let strong_width = self.config.strong_sigmas * std_dev;

        Ok(IntervalForecast::new(
            point_forecast + strong_width,
            point_forecast + weak_width,
            point_forecast - weak_width,
            point_forecast - strong_width,
        ))
    }
}
