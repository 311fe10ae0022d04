//! Metric observation type.

use serde::{Deserialize, Serialize};

/// A single metric observation.
///
/// One observation enters the engine per `detect()` call. Detectors consume
/// the value and timestamp but never retain the observation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Opaque identity of the metric stream this observation belongs to.
    pub metric_id: String,
    /// Observation time in epoch seconds.
    pub timestamp: i64,
    /// Observed value.
    pub value: f64,
}

impl Observation {
    /// Create a new observation.
    pub fn new(metric_id: impl Into<String>, timestamp: i64, value: f64) -> Self {
        Self {
            metric_id: metric_id.into(),
            timestamp,
            value,
        }
    }
}
