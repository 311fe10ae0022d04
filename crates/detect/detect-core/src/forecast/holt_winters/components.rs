//! Online state for the Holt-Winters forecaster.

use detect_api::HoltWintersConfig;

/// Level, base and seasonal components updated as observations arrive.
///
/// This is the model's online data as opposed to `HoltWintersConfig`, which
/// holds the user's parameters. Components left unset in the config start at
/// the seasonality identity, 1 for multiplicative and 0 for additive.
#[derive(Debug, Clone)]
pub struct HoltWintersOnlineComponents {
    level: f64,
    base: f64,
    seasonal: Vec<f64>,
    n: usize,
    forecast: f64,
}

impl HoltWintersOnlineComponents {
    /// Build initial components from a validated config.
    pub fn new(config: &HoltWintersConfig) -> Self {
        let identity = config.seasonality_type.identity();
        let level = if config.init_level_estimate.is_nan() {
            identity
        } else {
            config.init_level_estimate
        };
        let base = if config.init_base_estimate.is_nan() {
            identity
        } else {
            config.init_base_estimate
        };
        let seasonal = if config.init_seasonal_estimates.is_empty() {
            vec![identity; config.frequency]
        } else {
            config.init_seasonal_estimates.clone()
        };
        Self {
            level,
            base,
            seasonal,
            n: 0,
            forecast: f64::NAN,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn set_base(&mut self, base: f64) {
        self.base = base;
    }

    pub fn seasonal(&self, seasonal_index: usize) -> f64 {
        self.seasonal[seasonal_index]
    }

    pub fn set_seasonal(&mut self, seasonal_index: usize, value: f64) {
        self.seasonal[seasonal_index] = value;
    }

    pub fn seasonal_estimates(&self) -> &[f64] {
        &self.seasonal
    }

    /// Forecast stored for comparison with the next observation.
    pub fn forecast(&self) -> f64 {
        self.forecast
    }

    pub fn set_forecast(&mut self, forecast: f64) {
        self.forecast = forecast;
    }

    /// Number of values observed so far.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Record that a value was observed.
    pub fn add_value(&mut self) {
        self.n += 1;
    }

    /// Index into the seasonal components for the current tick. Wraps back
    /// to 0 after `frequency` observations.
    pub fn current_seasonal_index(&self) -> usize {
        self.n % self.seasonal.len()
    }
}
