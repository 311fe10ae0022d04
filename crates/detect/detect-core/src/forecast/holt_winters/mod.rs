//! Holt-Winters triple exponential smoothing.

mod algorithm;
mod components;
mod forecaster;
mod training;

pub use components::HoltWintersOnlineComponents;
pub use forecaster::HoltWintersPointForecaster;
pub use training::HoltWintersSimpleTrainingModel;
