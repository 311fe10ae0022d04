//! Breakout detectors: change-point detection over a window of observations.

mod edmx;
mod estimator;
mod running_median;

pub use edmx::EdmxDetector;
pub use estimator::{estimate, EdmxEstimate};
pub use running_median::RunningMedian;
