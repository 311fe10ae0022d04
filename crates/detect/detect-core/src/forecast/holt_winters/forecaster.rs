//! Holt-Winters point forecaster.

use detect_api::{HoltWintersConfig, TrainingMethod};
use detect_spi::{Observation, PointForecast, PointForecaster, Result};

use super::algorithm;
use super::components::HoltWintersOnlineComponents;
use super::training::HoltWintersSimpleTrainingModel;

/// Triple exponential smoothing forecaster with level, trend and seasonal
/// components.
///
/// Each call returns the forecast computed from the previous observation,
/// then folds the current one into the components. With simple initial
/// training enabled, the first two cycles train the components instead and
/// the stored forecast stays at its initial value until training completes.
#[derive(Debug, Clone)]
pub struct HoltWintersPointForecaster {
    config: HoltWintersConfig,
    components: HoltWintersOnlineComponents,
    training_model: HoltWintersSimpleTrainingModel,
}

impl HoltWintersPointForecaster {
    pub fn new(config: HoltWintersConfig) -> Result<Self> {
        config.validate()?;
        let components = HoltWintersOnlineComponents::new(&config);
        let training_model = HoltWintersSimpleTrainingModel::new(&config);
        let mut forecaster = Self {
            config,
            components,
            training_model,
        };

        let init_forecast = algorithm::point_forecast(
            forecaster.config.seasonality_type,
            forecaster.components.level(),
            forecaster.components.base(),
            forecaster
                .components
                .seasonal(forecaster.components.current_seasonal_index()),
        );
        forecaster.components.set_forecast(init_forecast);
        Ok(forecaster)
    }

    /// Current model components.
    pub fn components(&self) -> &HoltWintersOnlineComponents {
        &self.components
    }

    pub fn is_initial_training_complete(&self) -> bool {
        match self.config.init_training_method {
            TrainingMethod::None => true,
            TrainingMethod::Simple => self.training_model.is_training_complete(&self.config),
        }
    }

    fn train_or_observe(&mut self, observed: f64) -> Result<()> {
        if !self.is_initial_training_complete() {
            self.training_model
                .observe_and_train(observed, &self.config, &mut self.components)
        } else {
            algorithm::observe_value_and_update_forecast(
                observed,
                &self.config,
                &mut self.components,
            );
            Ok(())
        }
    }

    fn still_warming_up(&self) -> bool {
        self.components.n() <= self.config.effective_warm_up_period()
    }
}

impl PointForecaster for HoltWintersPointForecaster {
    fn forecast(&mut self, observation: &Observation) -> Result<Option<PointForecast>> {
        let prev_forecast = self.components.forecast();
        self.train_or_observe(observation.value)?;
        Ok(Some(PointForecast::new(prev_forecast, self.still_warming_up())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use detect_api::SeasonalityType;

    fn observation(value: f64) -> Observation {
        Observation::new("visits.count", 1563428100, value)
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = HoltWintersConfig::default();
        assert!(HoltWintersPointForecaster::new(config).is_err());
    }

    #[test]
    fn test_first_forecast_uses_initial_components() {
        let config = HoltWintersConfig::new(4, 0.15, 0.15, 0.15)
            .with_init_level_estimate(10.0)
            .with_init_base_estimate(1.0)
            .with_init_seasonal_estimates(vec![1.2, 0.8, 1.1, 0.9]);
        let mut forecaster = HoltWintersPointForecaster::new(config).unwrap();

        let first = forecaster.forecast(&observation(13.0)).unwrap().unwrap();
        assert!((first.value - 13.2).abs() < 1e-12);
    }

    #[test]
    fn test_additive_forecast_sequence() {
        let config = HoltWintersConfig::new(4, 0.5, 0.5, 0.5)
            .with_seasonality_type(SeasonalityType::Additive)
            .with_init_level_estimate(10.0)
            .with_init_base_estimate(1.0)
            .with_init_seasonal_estimates(vec![1.0, -1.0, 2.0, -2.0]);
        let mut forecaster = HoltWintersPointForecaster::new(config).unwrap();

        let expectations = [(12.0, 12.0), (13.0, 14.0), (10.0, 15.5), (11.0, 11.375)];
        for (observed, expected_forecast) in expectations {
            let forecast = forecaster.forecast(&observation(observed)).unwrap().unwrap();
            assert!((forecast.value - expected_forecast).abs() < 1e-9);
            assert!(!forecast.is_warmup);
        }
    }

    #[test]
    fn test_multiplicative_forecast_sequence() {
        // Level grows by one per step while the seasonal factors stay fixed,
        // so every component lands on an exact binary fraction
        let config = HoltWintersConfig::new(4, 0.5, 0.5, 0.5)
            .with_init_level_estimate(10.0)
            .with_init_base_estimate(1.0)
            .with_init_seasonal_estimates(vec![2.0, 1.0, 0.5, 0.5]);
        let mut forecaster = HoltWintersPointForecaster::new(config).unwrap();

        let expectations = [(22.0, 22.0), (12.0, 24.0), (6.5, 13.0), (7.0, 7.0)];
        for (observed, expected_forecast) in expectations {
            let forecast = forecaster.forecast(&observation(observed)).unwrap().unwrap();
            assert!((forecast.value - expected_forecast).abs() < 1e-9);
        }
        assert!((forecaster.components().level() - 14.0).abs() < 1e-9);
        assert!((forecaster.components().base() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_warm_up_flag_clears_after_period() {
        let config = HoltWintersConfig::new(2, 0.15, 0.15, 0.15).with_warm_up_period(2);
        let mut forecaster = HoltWintersPointForecaster::new(config).unwrap();

        let flags: Vec<bool> = (0..4)
            .map(|_| {
                forecaster
                    .forecast(&observation(10.0))
                    .unwrap()
                    .unwrap()
                    .is_warmup
            })
            .collect();
        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn test_simple_training_holds_forecast_until_complete() {
        let config = HoltWintersConfig::new(2, 0.15, 0.15, 0.15)
            .with_init_training_method(TrainingMethod::Simple);
        let mut forecaster = HoltWintersPointForecaster::new(config).unwrap();
        assert!(!forecaster.is_initial_training_complete());

        // Default multiplicative components make the initial stored forecast
        // (1 + 1) * 1 = 2, returned unchanged through the training window
        let mut forecasts = Vec::new();
        for value in [10.0, 12.0, 14.0, 16.0] {
            let forecast = forecaster.forecast(&observation(value)).unwrap().unwrap();
            assert!(forecast.is_warmup);
            forecasts.push(forecast.value);
        }
        assert_eq!(forecasts, vec![2.0, 2.0, 2.0, 2.0]);
        assert!(forecaster.is_initial_training_complete());
        assert_eq!(forecaster.components().n(), 4);

        // The first post-training call returns the replayed forecast
        let trained = forecaster.forecast(&observation(18.0)).unwrap().unwrap();
        assert!(trained.value.is_finite());
        assert_ne!(trained.value, 2.0);
        assert!(!trained.is_warmup);
    }
}
