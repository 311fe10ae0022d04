//! Self-contained outlier detector configurations.

use serde::{Deserialize, Serialize};

use detect_spi::{AnomalyThresholds, AnomalyType, DetectError, Result};

// ============================================================================
// CUSUM
// ============================================================================

/// CUSUM control-chart detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CusumConfig {
    /// Target value the cumulative sums are measured against.
    pub target_value: f64,
    /// Slack in standard deviations allowed before a shift accumulates.
    pub slack_param: f64,
    /// Seed for the previous-value register used by the moving range.
    pub init_mean_estimate: f64,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    /// Observations to absorb before classifying.
    pub warm_up_period: usize,
    pub anomaly_type: AnomalyType,
}

impl Default for CusumConfig {
    fn default() -> Self {
        Self {
            target_value: 0.0,
            slack_param: 0.5,
            init_mean_estimate: 0.0,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
            warm_up_period: 25,
            anomaly_type: AnomalyType::RightTailed,
        }
    }
}

impl CusumConfig {
    pub fn new(target_value: f64, anomaly_type: AnomalyType) -> Self {
        Self {
            target_value,
            anomaly_type,
            ..Default::default()
        }
    }

    pub fn with_slack_param(mut self, slack_param: f64) -> Self {
        self.slack_param = slack_param;
        self
    }

    pub fn with_init_mean_estimate(mut self, init_mean_estimate: f64) -> Self {
        self.init_mean_estimate = init_mean_estimate;
        self
    }

    pub fn with_sigmas(mut self, weak_sigmas: f64, strong_sigmas: f64) -> Self {
        self.weak_sigmas = weak_sigmas;
        self.strong_sigmas = strong_sigmas;
        self
    }

    pub fn with_warm_up_period(mut self, warm_up_period: usize) -> Self {
        self.warm_up_period = warm_up_period;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.slack_param < 0.0 {
            return Err(DetectError::invalid_parameter(
                "slack_param",
                "must not be negative",
            ));
        }
        if self.weak_sigmas <= 0.0 {
            return Err(DetectError::invalid_parameter(
                "weak_sigmas",
                "must be greater than 0",
            ));
        }
        if self.strong_sigmas <= self.weak_sigmas {
            return Err(DetectError::invalid_parameter(
                "strong_sigmas",
                "must be greater than weak_sigmas",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Constant threshold
// ============================================================================

/// Constant-threshold detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantThresholdConfig {
    pub anomaly_type: AnomalyType,
    pub thresholds: AnomalyThresholds,
}

impl ConstantThresholdConfig {
    pub fn new(anomaly_type: AnomalyType, thresholds: AnomalyThresholds) -> Self {
        Self {
            anomaly_type,
            thresholds,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()
    }
}
