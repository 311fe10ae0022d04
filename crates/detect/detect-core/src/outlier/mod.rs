//! Outlier detectors: point-in-time classification of single observations.

mod constant;
mod cusum;
mod forecasting;

pub use constant::ConstantThresholdDetector;
pub use cusum::CusumDetector;
pub use forecasting::ForecastingDetector;
