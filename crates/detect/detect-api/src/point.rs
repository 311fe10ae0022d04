//! Point forecaster configurations.

use serde::{Deserialize, Serialize};

use detect_spi::{DetectError, Result};

// ============================================================================
// EWMA
// ============================================================================

/// EWMA point forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EwmaConfig {
    /// Smoothing weight, in (0, 1). Larger values track the signal faster.
    pub alpha: f64,
    /// Initial mean estimate.
    pub init_mean_estimate: f64,
}

impl Default for EwmaConfig {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            init_mean_estimate: 0.0,
        }
    }
}

impl EwmaConfig {
    pub fn new(alpha: f64, init_mean_estimate: f64) -> Self {
        Self {
            alpha,
            init_mean_estimate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(DetectError::invalid_parameter(
                "alpha",
                "must be in the range (0, 1)",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// PEWMA
// ============================================================================

/// PEWMA point forecaster configuration.
///
/// `alpha` here is a decay rate; the effective smoothing weight converges to
/// `(1 - beta * p_t) * (1 - alpha)` once the training window has passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PewmaConfig {
    /// Decay rate, in [0, 1).
    pub alpha: f64,
    /// Outlier down-weighting factor, in [0, 1].
    pub beta: f64,
    /// Number of observations in the training window.
    pub training_length: usize,
    /// Initial mean estimate.
    pub init_mean_estimate: f64,
}

impl Default for PewmaConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            beta: 1.0,
            training_length: 30,
            init_mean_estimate: 0.0,
        }
    }
}

impl PewmaConfig {
    pub fn new(alpha: f64, beta: f64, training_length: usize, init_mean_estimate: f64) -> Self {
        Self {
            alpha,
            beta,
            training_length,
            init_mean_estimate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha >= 0.0 && self.alpha < 1.0) {
            return Err(DetectError::invalid_parameter(
                "alpha",
                "must be in the range [0, 1)",
            ));
        }
        if !(self.beta >= 0.0 && self.beta <= 1.0) {
            return Err(DetectError::invalid_parameter(
                "beta",
                "must be in the range [0, 1]",
            ));
        }
        if self.training_length < 1 {
            return Err(DetectError::invalid_parameter(
                "training_length",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Holt-Winters
// ============================================================================

/// Seasonality method for Holt-Winters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityType {
    Multiplicative,
    Additive,
}

impl SeasonalityType {
    /// The identity value for this seasonality: the seasonal component that
    /// leaves a forecast unchanged.
    pub fn identity(&self) -> f64 {
        match self {
            SeasonalityType::Multiplicative => 1.0,
            SeasonalityType::Additive => 0.0,
        }
    }
}

/// How Holt-Winters seeds its initial components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingMethod {
    /// Use the supplied (or identity) initial estimates directly.
    None,
    /// Learn initial components from the first two cycles of data.
    Simple,
}

/// Holt-Winters point forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoltWintersConfig {
    /// Periodicity of the data, e.g. 24 for hourly samples with daily
    /// seasons or 4 for quarterly samples with yearly seasons.
    pub frequency: usize,
    /// Level smoothing parameter, in [0, 1].
    pub alpha: f64,
    /// Base (trend) smoothing parameter, in [0, 1].
    pub beta: f64,
    /// Seasonal smoothing parameter, in [0, 1].
    pub gamma: f64,
    pub seasonality_type: SeasonalityType,
    pub init_training_method: TrainingMethod,
    /// Initial level estimate; NaN means unset.
    pub init_level_estimate: f64,
    /// Initial base estimate; NaN means unset.
    pub init_base_estimate: f64,
    /// Initial seasonal estimates; empty or exactly `frequency` values.
    pub init_seasonal_estimates: Vec<f64>,
    /// Observations to treat as warm-up. Simple training raises this to at
    /// least two full cycles.
    pub warm_up_period: usize,
}

impl Default for HoltWintersConfig {
    fn default() -> Self {
        Self {
            frequency: 0,
            alpha: 0.15,
            beta: 0.15,
            gamma: 0.15,
            seasonality_type: SeasonalityType::Multiplicative,
            init_training_method: TrainingMethod::None,
            init_level_estimate: f64::NAN,
            init_base_estimate: f64::NAN,
            init_seasonal_estimates: Vec::new(),
            warm_up_period: 0,
        }
    }
}

impl HoltWintersConfig {
    pub fn new(frequency: usize, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            frequency,
            alpha,
            beta,
            gamma,
            ..Default::default()
        }
    }

    pub fn with_seasonality_type(mut self, seasonality_type: SeasonalityType) -> Self {
        self.seasonality_type = seasonality_type;
        self
    }

    pub fn with_init_training_method(mut self, init_training_method: TrainingMethod) -> Self {
        self.init_training_method = init_training_method;
        self
    }

    pub fn with_init_level_estimate(mut self, init_level_estimate: f64) -> Self {
        self.init_level_estimate = init_level_estimate;
        self
    }

    pub fn with_init_base_estimate(mut self, init_base_estimate: f64) -> Self {
        self.init_base_estimate = init_base_estimate;
        self
    }

    pub fn with_init_seasonal_estimates(mut self, init_seasonal_estimates: Vec<f64>) -> Self {
        self.init_seasonal_estimates = init_seasonal_estimates;
        self
    }

    pub fn with_warm_up_period(mut self, warm_up_period: usize) -> Self {
        self.warm_up_period = warm_up_period;
        self
    }

    pub fn is_multiplicative(&self) -> bool {
        self.seasonality_type == SeasonalityType::Multiplicative
    }

    /// Length of the initial training window in observations.
    pub fn init_training_period(&self) -> usize {
        match self.init_training_method {
            TrainingMethod::Simple => 2 * self.frequency,
            TrainingMethod::None => 0,
        }
    }

    /// Warm-up period, raised to cover the training window when simple
    /// training is configured.
    pub fn effective_warm_up_period(&self) -> usize {
        self.warm_up_period.max(self.init_training_period())
    }

    pub fn validate(&self) -> Result<()> {
        if self.frequency == 0 {
            return Err(DetectError::invalid_parameter(
                "frequency",
                "must be greater than 0",
            ));
        }
        validate_smoothing_weight("alpha", self.alpha)?;
        validate_smoothing_weight("beta", self.beta)?;
        validate_smoothing_weight("gamma", self.gamma)?;
        self.validate_seasonal_estimates()
    }

    fn validate_seasonal_estimates(&self) -> Result<()> {
        let estimates = &self.init_seasonal_estimates;
        if estimates.is_empty() {
            return Ok(());
        }
        if estimates.len() != self.frequency {
            return Err(DetectError::invalid_parameter(
                "init_seasonal_estimates",
                format!(
                    "size ({}) must equal frequency ({})",
                    estimates.len(),
                    self.frequency
                ),
            ));
        }

        // The estimates must sum to the seasonal identity target (0 for
        // additive, frequency for multiplicative) within 1% of the largest
        // estimate's distance from the identity.
        let identity = self.seasonality_type.identity();
        let target = identity * self.frequency as f64;
        let sum: f64 = estimates.iter().sum();
        let max_distance = estimates
            .iter()
            .map(|e| (e - identity).abs())
            .fold(0.0, f64::max);
        let tolerance = max_distance / 100.0;
        if (sum - target).abs() > tolerance {
            return Err(DetectError::invalid_parameter(
                "init_seasonal_estimates",
                format!(
                    "sum ({}) must be within {} of {} for {:?} seasonality",
                    sum, tolerance, target, self.seasonality_type
                ),
            ));
        }
        Ok(())
    }
}

fn validate_smoothing_weight(name: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DetectError::invalid_parameter(
            name,
            "must be in the range [0, 1]",
        ));
    }
    Ok(())
}

// ============================================================================
// Seasonal-Naive
// ============================================================================

/// Seasonal-naive point forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalNaiveConfig {
    /// Number of slots per seasonal cycle.
    pub cycle_length: usize,
    /// Seconds between adjacent slots.
    pub interval_length: i64,
    /// Value marking a slot with no usable data.
    pub missing_value_placeholder: f64,
}

impl Default for SeasonalNaiveConfig {
    fn default() -> Self {
        Self {
            cycle_length: 0,
            interval_length: 0,
            missing_value_placeholder: f64::NAN,
        }
    }
}

impl SeasonalNaiveConfig {
    pub fn new(cycle_length: usize, interval_length: i64) -> Self {
        Self {
            cycle_length,
            interval_length,
            ..Default::default()
        }
    }

    pub fn with_missing_value_placeholder(mut self, placeholder: f64) -> Self {
        self.missing_value_placeholder = placeholder;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cycle_length == 0 {
            return Err(DetectError::invalid_parameter(
                "cycle_length",
                "must be greater than 0",
            ));
        }
        if self.interval_length <= 0 {
            return Err(DetectError::invalid_parameter(
                "interval_length",
                "must be greater than 0",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// SMA
// ============================================================================

/// Simple moving average point forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaConfig {
    /// Number of observations in the averaging window.
    pub look_back_period: usize,
    /// Optional values to pre-fill the window with, oldest first.
    pub initial_values: Vec<f64>,
}

impl Default for SmaConfig {
    fn default() -> Self {
        Self {
            look_back_period: 0,
            initial_values: Vec::new(),
        }
    }
}

impl SmaConfig {
    pub fn new(look_back_period: usize) -> Self {
        Self {
            look_back_period,
            ..Default::default()
        }
    }

    pub fn with_initial_values(mut self, initial_values: Vec<f64>) -> Self {
        self.initial_values = initial_values;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.look_back_period == 0 {
            return Err(DetectError::invalid_parameter(
                "look_back_period",
                "must be greater than 0",
            ));
        }
        if self.initial_values.len() > self.look_back_period {
            return Err(DetectError::invalid_parameter(
                "initial_values",
                format!(
                    "size ({}) must not exceed look_back_period ({})",
                    self.initial_values.len(),
                    self.look_back_period
                ),
            ));
        }
        Ok(())
    }
}
