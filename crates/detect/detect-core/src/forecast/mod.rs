//! Point and interval forecasters.
//!
//! Point forecasters predict the next value of a series; the exponential
//! Welford interval forecaster wraps a point forecast in weak and strong
//! sigma bands.

mod ewma;
mod holt_winters;
mod pewma;
mod seasonal_naive;
mod sma;
mod welford;

pub use ewma::EwmaPointForecaster;
pub use holt_winters::{
    HoltWintersOnlineComponents, HoltWintersPointForecaster, HoltWintersSimpleTrainingModel,
};
pub use pewma::PewmaPointForecaster;
pub use seasonal_naive::{SeasonalBuffer, SeasonalNaivePointForecaster};
pub use sma::SmaPointForecaster;
pub use welford::ExponentialWelfordIntervalForecaster;
