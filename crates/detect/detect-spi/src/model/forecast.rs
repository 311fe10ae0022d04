//! Point and interval forecast types.

use serde::{Deserialize, Serialize};

/// One-step-ahead point forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointForecast {
    /// Predicted value for the current observation.
    pub value: f64,
    /// True while the forecaster's estimates are still converging. A warm-up
    /// forecast must not be used for classification.
    pub is_warmup: bool,
}

impl PointForecast {
    /// Create a new point forecast.
    pub fn new(value: f64, is_warmup: bool) -> Self {
        Self { value, is_warmup }
    }
}

/// Fully-populated threshold band produced by an interval forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalForecast {
    pub upper_strong: f64,
    pub upper_weak: f64,
    pub lower_weak: f64,
    pub lower_strong: f64,
}

impl IntervalForecast {
    /// Create a new interval forecast.
    pub fn new(upper_strong: f64, upper_weak: f64, lower_weak: f64, lower_strong: f64) -> Self {
        Self {
            upper_strong,
            upper_weak,
            lower_weak,
            lower_strong,
        }
    }
}
