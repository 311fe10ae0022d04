//! Simple moving average point forecaster.

use detect_api::SmaConfig;
use detect_spi::{Observation, PointForecast, PointForecaster, Result};

use crate::buffer::EvictingBuffer;

/// Forecasts the mean of the most recent `look_back_period` observations.
///
/// The observed value is folded into the window before the forecast is
/// returned, so the forecast always reflects the current window. The window
/// may be pre-seeded with historical values at construction time.
#[derive(Debug, Clone)]
pub struct SmaPointForecaster {
    buffer: EvictingBuffer<f64>,
    mean: f64,
}

impl SmaPointForecaster {
    pub fn new(config: SmaConfig) -> Result<Self> {
        config.validate()?;
        let mut forecaster = Self {
            buffer: EvictingBuffer::new(config.look_back_period),
            mean: 0.0,
        };
        for value in &config.initial_values {
            forecaster.update_mean_estimate(*value);
        }
        Ok(forecaster)
    }

    /// Current mean over the retained window.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    fn update_mean_estimate(&mut self, observed: f64) {
        let mut mean_sum = self.mean * self.buffer.len() as f64 + observed;
        if let Some(evicted) = self.buffer.push(observed) {
            mean_sum -= evicted;
        }
        self.mean = mean_sum / self.buffer.len() as f64;
    }
}

impl PointForecaster for SmaPointForecaster {
    fn forecast(&mut self, observation: &Observation) -> Result<Option<PointForecast>> {
        self.update_mean_estimate(observation.value);
        Ok(Some(PointForecast::new(self.mean, false)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(value: f64) -> Observation {
        Observation::new("requests.rate", 1563428100, value)
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(SmaPointForecaster::new(SmaConfig::new(0)).is_err());
        let oversized = SmaConfig::new(2).with_initial_values(vec![1.0, 2.0, 3.0]);
        assert!(SmaPointForecaster::new(oversized).is_err());
    }

    #[test]
    fn test_mean_over_partial_window() {
        let mut forecaster = SmaPointForecaster::new(SmaConfig::new(3)).unwrap();

        let f1 = forecaster.forecast(&observation(1.0)).unwrap().unwrap();
        assert!((f1.value - 1.0).abs() < 1e-12);
        let f2 = forecaster.forecast(&observation(2.0)).unwrap().unwrap();
        assert!((f2.value - 1.5).abs() < 1e-12);
        let f3 = forecaster.forecast(&observation(3.0)).unwrap().unwrap();
        assert!((f3.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_window_slides() {
        let mut forecaster = SmaPointForecaster::new(SmaConfig::new(3)).unwrap();
        for value in [1.0, 2.0, 3.0] {
            forecaster.forecast(&observation(value)).unwrap();
        }

        // Window is now [2, 3, 4]
        let f4 = forecaster.forecast(&observation(4.0)).unwrap().unwrap();
        assert!((f4.value - 3.0).abs() < 1e-12);
        let f5 = forecaster.forecast(&observation(5.0)).unwrap().unwrap();
        assert!((f5.value - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_initial_values_seed_window() {
        let config = SmaConfig::new(3).with_initial_values(vec![1.0, 2.0]);
        let mut forecaster = SmaPointForecaster::new(config).unwrap();
        assert!((forecaster.mean() - 1.5).abs() < 1e-12);

        let forecast = forecaster.forecast(&observation(3.0)).unwrap().unwrap();
        assert!((forecast.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_never_reports_warmup() {
        let mut forecaster = SmaPointForecaster::new(SmaConfig::new(5)).unwrap();
        let forecast = forecaster.forecast(&observation(7.0)).unwrap().unwrap();
        assert!(!forecast.is_warmup);
    }
}
