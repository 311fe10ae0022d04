//! Detector trait definition.

use crate::error::Result;
use crate::model::{DetectorResult, Observation};

/// The capability every detector variant implements.
///
/// A detector consumes one observation per call and yields one verdict,
/// mutating only its own private state. Instances are not safe for
/// concurrent `detect` calls; callers serialize calls per metric stream.
pub trait Detector: Send + Sync {
    /// Short algorithm name, used for routing and diagnostics.
    fn name(&self) -> &str;

    /// Classify one observation.
    fn detect(&mut self, observation: &Observation) -> Result<DetectorResult>;
}
