//! Point forecaster trait definition.

use crate::error::Result;
use crate::model::{Observation, PointForecast};

/// One-step-ahead point forecaster.
///
/// Implementations update their internal estimates from each observation.
/// `None` means the forecaster has no usable forecast yet (e.g. a seasonal
/// buffer slot that has never been filled).
pub trait PointForecaster: Send + Sync {
    /// Produce the forecast for this observation, then absorb it.
    fn forecast(&mut self, observation: &Observation) -> Result<Option<PointForecast>>;
}
