//! Contract definitions for the detection engine.
//!
//! This module contains the trait definitions that algorithm providers implement.

mod detector;
mod interval_forecaster;
mod point_forecaster;

pub use detector::Detector;
pub use interval_forecaster::IntervalForecaster;
pub use point_forecaster::PointForecaster;
