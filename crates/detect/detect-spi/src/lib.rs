//! Streaming Anomaly Detection Service Provider Interface
//!
//! Defines the detector and forecaster contracts plus the shared data model.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Detector, IntervalForecaster, PointForecaster};
pub use error::{DetectError, Result};
pub use model::{
    AnomalyLevel, AnomalyThresholds, AnomalyType, BreakoutResult, DetectorResult, IntervalForecast,
    Observation, OutlierResult, PointForecast,
};
