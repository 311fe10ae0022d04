//! Probabilistic EWMA point forecaster.
//!
//! Extends EWMA with a probability-weighted smoothing factor: the less likely
//! an observation is under the current mean and standard deviation estimates,
//! the less it shifts them. See Carter & Streilein, "Probabilistic reasoning
//! for streaming anomaly detection" (2012).

use std::f64::consts::PI;

use detect_api::PewmaConfig;
use detect_spi::{Observation, PointForecast, PointForecaster, Result};

/// Probability-weighted EWMA forecaster.
///
/// During the first `training_length` observations the smoothing weight
/// follows the standard EWMA schedule so the moment estimates settle before
/// probability weighting kicks in.
#[derive(Debug, Clone)]
pub struct PewmaPointForecaster {
    config: PewmaConfig,
    /// Adjusted smoothing weight applied after training, `1 - alpha`.
    adj_alpha: f64,
    training_count: usize,
    /// First moment accumulator.
    s1: f64,
    /// Second moment accumulator.
    s2: f64,
    mean: f64,
    std_dev: f64,
}

impl PewmaPointForecaster {
    pub fn new(config: PewmaConfig) -> Result<Self> {
        config.validate()?;
        let adj_alpha = 1.0 - config.alpha;
        let s1 = config.init_mean_estimate;
        let s2 = config.init_mean_estimate * config.init_mean_estimate;
        let mean = s1;
        let std_dev = (s2 - s1 * s1).sqrt();
        Ok(Self {
            config,
            adj_alpha,
            training_count: 1,
            s1,
            s2,
            mean,
            std_dev,
        })
    }

    /// Current mean estimate.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Current standard deviation estimate.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn update_estimates(&mut self, observed: f64) {
        let zt = if self.std_dev == 0.0 {
            0.0
        } else {
            (observed - self.mean) / self.std_dev
        };
        let prob_observed = (-0.5 * zt * zt).exp() / (2.0 * PI).sqrt();
        let alpha = self.calculate_alpha(prob_observed);

        self.s1 = alpha * self.s1 + (1.0 - alpha) * observed;
        self.s2 = alpha * self.s2 + (1.0 - alpha) * observed * observed;
        self.mean = self.s1;
        // The accumulators can cross by a rounding error on constant input,
        // so clamp before taking the root.
        self.std_dev = (self.s2 - self.s1 * self.s1).max(0.0).sqrt();
    }

    fn calculate_alpha(&mut self, prob_observed: f64) -> f64 {
        if self.training_count < self.config.training_length {
            self.training_count += 1;
            return 1.0 - 1.0 / self.training_count as f64;
        }
        (1.0 - self.config.beta * prob_observed) * self.adj_alpha
    }
}

impl PointForecaster for PewmaPointForecaster {
    fn forecast(&mut self, observation: &Observation) -> Result<Option<PointForecast>> {
        let is_warmup = self.training_count < self.config.training_length;
        self.update_estimates(observation.value);
        Ok(Some(PointForecast::new(self.mean, is_warmup)))
    }
}
