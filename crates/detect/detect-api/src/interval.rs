//! Interval forecaster configurations.

use serde::{Deserialize, Serialize};

use detect_spi::{DetectError, Result};

/// Exponential-Welford interval forecaster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WelfordConfig {
    /// Smoothing weight for the variance estimate, in (0, 1).
    pub alpha: f64,
    /// Initial variance estimate. Zero makes the earliest bands collapse
    /// onto the point forecast until residuals accumulate.
    pub init_variance_estimate: f64,
    /// Width of the weak band in standard deviations.
    pub weak_sigmas: f64,
    /// Width of the strong band in standard deviations.
    pub strong_sigmas: f64,
}

impl Default for WelfordConfig {
    fn default() -> Self {
        Self {
            alpha: 0.15,
            init_variance_estimate: 0.0,
            weak_sigmas: 3.0,
            strong_sigmas: 4.0,
        }
    }
}

impl WelfordConfig {
    pub fn new(alpha: f64, init_variance_estimate: f64, weak_sigmas: f64, strong_sigmas: f64) -> Self {
        Self {
            alpha,
            init_variance_estimate,
            weak_sigmas,
            strong_sigmas,
        }
    }

    /// Default band widths with custom sigmas.
    pub fn with_sigmas(weak_sigmas: f64, strong_sigmas: f64) -> Self {
        Self {
            weak_sigmas,
            strong_sigmas,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(DetectError::invalid_parameter(
                "alpha",
                "must be in the range (0, 1)",
            ));
        }
        if self.init_variance_estimate < 0.0 {
            return Err(DetectError::invalid_parameter(
                "init_variance_estimate",
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
