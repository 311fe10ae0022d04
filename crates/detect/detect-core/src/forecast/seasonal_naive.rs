//! Seasonal naive point forecaster.
//!
//! Forecasts each value as the value observed one full cycle earlier, per
//! the seasonal naive method in https://otexts.com/fpp2/simple-methods.html.

use detect_api::SeasonalNaiveConfig;
use detect_spi::{DetectError, Observation, PointForecast, PointForecaster, Result};

const NOT_YET_INITIALIZED: i64 = -1;

/// Ring buffer holding one cycle of historical values.
///
/// Slots are addressed by time: consecutive observations must be spaced by
/// the configured interval, and skipped intervals are padded with the missing
/// value placeholder so the cycle stays aligned.
#[derive(Debug, Clone)]
pub struct SeasonalBuffer {
    cycle_length: usize,
    interval_length: i64,
    missing_value_placeholder: f64,
    buffer: Vec<f64>,
    curr_index: usize,
    first_timestamp: i64,
    last_timestamp: i64,
}

impl SeasonalBuffer {
    pub fn new(cycle_length: usize, interval_length: i64, missing_value_placeholder: f64) -> Self {
        Self {
            cycle_length,
            interval_length,
            missing_value_placeholder,
            buffer: vec![missing_value_placeholder; cycle_length],
            curr_index: 0,
            first_timestamp: NOT_YET_INITIALIZED,
            last_timestamp: NOT_YET_INITIALIZED,
        }
    }

    /// Advance the buffer to the observation's slot and swap in its value,
    /// returning whatever the slot held from the previous cycle.
    pub fn update_while_padding(&mut self, observation: &Observation) -> Result<f64> {
        self.check_valid_timestamp(observation.timestamp)?;
        self.pad_missing_data_points(observation.timestamp);
        let old_value = self.buffer[self.curr_index];
        self.buffer[self.curr_index] = observation.value;
        self.advance();
        self.last_timestamp = observation.timestamp;
        Ok(old_value)
    }

    /// True once at least one full cycle has elapsed since the first
    /// observation.
    pub fn is_ready(&self) -> bool {
        self.last_timestamp - (self.first_timestamp + self.cycle_length as i64 * self.interval_length)
            >= 0
    }

    pub fn is_missing(&self, value: f64) -> bool {
        if self.missing_value_placeholder.is_nan() {
            value.is_nan()
        } else {
            value == self.missing_value_placeholder
        }
    }

    fn check_valid_timestamp(&self, timestamp: i64) -> Result<()> {
        if timestamp < self.last_timestamp {
            return Err(DetectError::OutOfOrderObservation {
                timestamp,
                last_timestamp: self.last_timestamp,
            });
        }
        if timestamp == self.last_timestamp {
            return Err(DetectError::DuplicateObservation { timestamp });
        }
        Ok(())
    }

    fn pad_missing_data_points(&mut self, timestamp: i64) {
        if self.last_timestamp == NOT_YET_INITIALIZED {
            // First datapoint starts the cycle, nothing to pad
            self.first_timestamp = timestamp;
            return;
        }
        let skipped = (timestamp - self.last_timestamp) / self.interval_length - 1;
        for _ in 0..skipped {
            self.buffer[self.curr_index] = self.missing_value_placeholder;
            self.advance();
        }
    }

    fn advance(&mut self) {
        self.curr_index = (self.curr_index + 1) % self.buffer.len();
    }
}

/// Forecasts each observation as the value seen one cycle earlier.
///
/// Returns no forecast while the corresponding slot from the previous cycle
/// is empty or was padded as missing.
#[derive(Debug, Clone)]
pub struct SeasonalNaivePointForecaster {
    buffer: SeasonalBuffer,
}

impl SeasonalNaivePointForecaster {
    pub fn new(config: SeasonalNaiveConfig) -> Result<Self> {
        config.validate()?;
        let buffer = SeasonalBuffer::new(
            config.cycle_length,
            config.interval_length,
            config.missing_value_placeholder,
        );
        Ok(Self { buffer })
    }

    pub fn is_ready(&self) -> bool {
        self.buffer.is_ready()
    }
}

impl PointForecaster for SeasonalNaivePointForecaster {
    fn forecast(&mut self, observation: &Observation) -> Result<Option<PointForecast>> {
        let stored = self.buffer.update_while_padding(observation)?;
        if self.buffer.is_missing(stored) {
            Ok(None)
        } else {
            Ok(Some(PointForecast::new(stored, false)))
        }
    }
}
