//! Streaming Anomaly Detection API
//!
//! Configuration types for every detection algorithm, plus the detector
//! document consumed by the builder. All configs are serde-friendly and
//! validate eagerly via `validate()`.

mod breakout;
mod document;
mod interval;
mod outlier;
mod point;

pub use breakout::EdmxConfig;
pub use document::{
    DetectorDocument, EwmaDetectorConfig, HoltWintersDetectorConfig, PewmaDetectorConfig,
    SeasonalNaiveDetectorConfig, SmaDetectorConfig,
};
pub use interval::WelfordConfig;
pub use outlier::{ConstantThresholdConfig, CusumConfig};
pub use point::{
    EwmaConfig, HoltWintersConfig, PewmaConfig, SeasonalNaiveConfig, SeasonalityType, SmaConfig,
    TrainingMethod,
};

// Re-export SPI types alongside the configs that reference them
pub use detect_spi::{AnomalyThresholds, AnomalyType, DetectError, Result};
