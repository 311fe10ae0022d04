//! Simple initial training for the Holt-Winters forecaster.
//!
//! Implements the "simple" initialization from the R forecast package: the
//! first two complete cycles seed the level, base and seasonal components,
//! then the stored observations are replayed through the online algorithm so
//! the smoothing weights apply retrospectively.

use detect_api::{HoltWintersConfig, TrainingMethod};
use detect_spi::{DetectError, Result};

use super::algorithm;
use super::components::HoltWintersOnlineComponents;

/// Collects the first two cycles of observations and trains the components
/// once both are complete.
#[derive(Debug, Clone)]
pub struct HoltWintersSimpleTrainingModel {
    n: usize,
    first_cycle: Vec<f64>,
    second_cycle: Vec<f64>,
}

impl HoltWintersSimpleTrainingModel {
    pub fn new(config: &HoltWintersConfig) -> Self {
        Self {
            n: 0,
            first_cycle: vec![0.0; config.frequency],
            second_cycle: vec![0.0; config.frequency],
        }
    }

    /// Record a training observation. On the final observation of the second
    /// cycle, seeds the components and replays both cycles through the online
    /// algorithm so the stored forecast is ready for the next observation.
    pub fn observe_and_train(
        &mut self,
        observed: f64,
        config: &HoltWintersConfig,
        components: &mut HoltWintersOnlineComponents,
    ) -> Result<()> {
        self.check_training_method(config)?;
        self.check_still_in_initial_training(config)?;
        let frequency = config.frequency;

        if self.n < frequency {
            self.first_cycle[self.n] = observed;
        } else {
            self.second_cycle[self.n - frequency] = observed;
        }

        if self.n == config.init_training_period() - 1 {
            self.set_level(components);
            self.set_seasonals(config, components);
            self.set_base(config, components);
            self.replay_through_online_algorithm(config, components);
        }
        self.n += 1;
        Ok(())
    }

    pub fn is_training_complete(&self, config: &HoltWintersConfig) -> bool {
        self.n >= config.init_training_period()
    }

    fn set_level(&self, components: &mut HoltWintersOnlineComponents) {
        components.set_level(mean(&self.first_cycle));
    }

    fn set_seasonals(&self, config: &HoltWintersConfig, components: &mut HoltWintersOnlineComponents) {
        for (seasonal_index, value) in self.first_cycle.iter().enumerate() {
            let seasonal = if config.is_multiplicative() {
                value / components.level()
            } else {
                value - components.level()
            };
            components.set_seasonal(seasonal_index, seasonal);
        }
    }

    fn set_base(&self, config: &HoltWintersConfig, components: &mut HoltWintersOnlineComponents) {
        let base = (mean(&self.second_cycle) - components.level()) / config.frequency as f64;
        components.set_base(base);
    }

    fn replay_through_online_algorithm(
        &self,
        config: &HoltWintersConfig,
        components: &mut HoltWintersOnlineComponents,
    ) {
        for observed in self.first_cycle.iter().chain(self.second_cycle.iter()) {
            algorithm::observe_value_and_update_forecast(*observed, config, components);
        }
    }

    fn check_training_method(&self, config: &HoltWintersConfig) -> Result<()> {
        if config.init_training_method != TrainingMethod::Simple {
            return Err(DetectError::DetectionError(format!(
                "Expected training method to be {:?} but was {:?}",
                TrainingMethod::Simple,
                config.init_training_method
            )));
        }
        Ok(())
    }

    fn check_still_in_initial_training(&self, config: &HoltWintersConfig) -> Result<()> {
        if self.is_training_complete(config) {
            return Err(DetectError::DetectionError(format!(
                "Training invoked {} times which is greater than the training window of frequency * 2 ({} * 2 = {}) observations",
                self.n + 1,
                config.frequency,
                config.init_training_period()
            )));
        }
        Ok(())
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
