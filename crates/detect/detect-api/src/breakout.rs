//! Breakout detector configurations.

use serde::{Deserialize, Serialize};

use detect_spi::{DetectError, Result};

/// EDM-X breakout detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EdmxConfig {
    /// Capacity of the FIFO sample buffer.
    pub buffer_size: usize,
    /// Minimum segment size on either side of a candidate breakout.
    pub delta: usize,
    /// Number of random permutations for the significance test.
    pub num_perms: usize,
    /// Significance level the p-value is compared against.
    pub alpha: f64,
    /// Optional RNG seed. Fixing it makes the permutation test reproducible.
    pub seed: Option<u64>,
}

impl Default for EdmxConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            delta: 6,
            num_perms: 199,
            alpha: 0.05,
            seed: None,
        }
    }
}

impl EdmxConfig {
    pub fn new(buffer_size: usize, delta: usize) -> Self {
        Self {
            buffer_size,
            delta,
            ..Default::default()
        }
    }

    pub fn with_num_perms(mut self, num_perms: usize) -> Self {
        self.num_perms = num_perms;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(DetectError::invalid_parameter(
                "buffer_size",
                "must be greater than 0",
            ));
        }
        if self.delta == 0 {
            return Err(DetectError::invalid_parameter(
                "delta",
                "must be greater than 0",
            ));
        }
        if self.buffer_size < 2 * self.delta {
            return Err(DetectError::invalid_parameter(
                "buffer_size",
                format!("must be at least 2 * delta ({})", 2 * self.delta),
            ));
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(DetectError::invalid_parameter(
                "alpha",
                "must be in the range (0, 1)",
            ));
        }
        Ok(())
    }
}
