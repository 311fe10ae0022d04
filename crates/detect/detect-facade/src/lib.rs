//! Streaming Anomaly Detection Facade
//!
//! Unified re-exports for the detection engine.
//!
//! This facade provides a single entry point to the full detection stack:
//! - `Detector` contracts, observation and result types from SPI
//! - Configuration types and detector documents from API
//! - Forecasters, outlier and breakout detectors, and the builder from Core

// Re-export everything from SPI
pub use detect_spi::*;

// Re-export everything from API
pub use detect_api::*;

// Re-export everything from Core
pub use detect_core::*;
