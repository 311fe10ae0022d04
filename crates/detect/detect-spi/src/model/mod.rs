//! Data models for the detection engine.
//!
//! This module contains the data structures exchanged across the detector boundary.

mod anomaly;
mod forecast;
mod observation;
mod result;
mod thresholds;

pub use anomaly::{AnomalyLevel, AnomalyType};
pub use forecast::{IntervalForecast, PointForecast};
pub use observation::Observation;
pub use result::{BreakoutResult, DetectorResult, OutlierResult};
pub use thresholds::AnomalyThresholds;
