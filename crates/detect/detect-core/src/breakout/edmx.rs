//! EDM-X breakout detector.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use detect_api::EdmxConfig;
use detect_spi::{BreakoutResult, DetectError, Detector, DetectorResult, Observation, Result};

use crate::breakout::estimator;
use crate::buffer::EvictingBuffer;

/// EDM-X breakout detector over a sliding window of observations.
///
/// Observations accumulate in a FIFO buffer. While the buffer fills, every
/// result is a warm-up. Once full, each new observation slides the window
/// forward and triggers a fresh estimation over the whole window.
pub struct EdmxDetector<R: Rng = StdRng> {
    config: EdmxConfig,
    buffer: EvictingBuffer<(i64, f64)>,
    rng: R,
    trusted: bool,
}

impl EdmxDetector<StdRng> {
    /// Build a detector whose permutation RNG comes from the config seed,
    /// or from entropy when no seed is set.
    pub fn new(config: EdmxConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> EdmxDetector<R> {
    /// Build a detector around a caller-supplied RNG.
    pub fn with_rng(config: EdmxConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let buffer = EvictingBuffer::new(config.buffer_size);
        Ok(Self {
            config,
            buffer,
            rng,
            trusted: true,
        })
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    pub fn config(&self) -> &EdmxConfig {
        &self.config
    }
}

impl<R: Rng + Send + Sync> Detector for EdmxDetector<R> {
    fn name(&self) -> &str {
        "edmx"
    }

    fn detect(&mut self, observation: &Observation) -> Result<DetectorResult> {
        self.buffer.push((observation.timestamp, observation.value));

        if !self.buffer.is_full() {
            return Ok(DetectorResult::Breakout(
                BreakoutResult::new(true).with_trusted(self.trusted),
            ));
        }

        let values: Vec<f64> = self.buffer.iter().map(|&(_, value)| value).collect();
        let estimate = estimator::estimate(
            &values,
            self.config.delta,
            self.config.num_perms,
            &mut self.rng,
        )?;

        let result = if let Some(location) = estimate.location {
            let timestamp = match self.buffer.get(location) {
                Some(&(timestamp, _)) => timestamp,
                None => {
                    return Err(DetectError::DetectionError(format!(
                        "breakout location {} outside the window",
                        location
                    )))
                }
            };
            BreakoutResult::new(false)
                .with_timestamp(timestamp)
                .with_significant(estimate.p_value <= self.config.alpha)
                .with_energy_distance(estimate.energy_distance)
                .with_p_value(estimate.p_value)
                .with_medians(estimate.pre_median, estimate.post_median)
        } else {
            BreakoutResult::new(false)
        };

        Ok(DetectorResult::Breakout(result.with_trusted(self.trusted)))
    }
}
