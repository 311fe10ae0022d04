//! CUSUM control-chart outlier detector.

use detect_api::CusumConfig;
use detect_spi::{
    AnomalyLevel, AnomalyType, Detector, DetectorResult, Observation, OutlierResult, Result,
};

/// Moving-range to standard-deviation conversion factor (d2 for subgroups
/// of size 2).
const STD_DEV_DIVISOR: f64 = 1.128;

/// CUSUM detector accumulating deviations from a target value.
///
/// Two one-sided cumulative sums track sustained upward and downward shifts.
/// The standard deviation used for the slack and decision intervals is
/// estimated online from the average moving range between successive
/// observations.
pub struct CusumDetector {
    config: CusumConfig,
    /// Observations seen so far.
    num_observations: usize,
    /// Running sum of absolute differences between successive observations.
    moving_range: f64,
    /// Previously observed value.
    prev_value: f64,
    /// Cumulative sum of deviations above target plus slack. Never negative.
    sum_high: f64,
    /// Cumulative sum of deviations below target minus slack. Never positive.
    sum_low: f64,
    trusted: bool,
}

impl CusumDetector {
    pub fn new(config: CusumConfig) -> Result<Self> {
        config.validate()?;
        let prev_value = config.init_mean_estimate;
        Ok(Self {
            config,
            num_observations: 0,
            moving_range: 0.0,
            prev_value,
            sum_high: 0.0,
            sum_low: 0.0,
            trusted: true,
        })
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    fn avg_moving_range(&self) -> f64 {
        if self.num_observations > 0 {
            self.moving_range / self.num_observations as f64
        } else {
            self.moving_range
        }
    }

    fn reset_sums(&mut self) {
        self.sum_high = 0.0;
        self.sum_low = 0.0;
    }

    fn classify_sums(&mut self, weak_delta: f64, strong_delta: f64) -> AnomalyLevel {
        // Strict comparisons: with zero estimated deviation the deltas and
        // the sums are all zero, and a constant-valued series stays Normal.
        let high_strong = self.sum_high > strong_delta;
        let high_weak = self.sum_high > weak_delta;
        let low_strong = self.sum_low < -strong_delta;
        let low_weak = self.sum_low < -weak_delta;

        let (strong, weak) = match self.config.anomaly_type {
            AnomalyType::LeftTailed => (low_strong, low_weak),
            AnomalyType::RightTailed => (high_strong, high_weak),
            AnomalyType::TwoTailed => (high_strong || low_strong, high_weak || low_weak),
        };

        if strong {
            self.reset_sums();
            AnomalyLevel::Strong
        } else if weak {
            AnomalyLevel::Weak
        } else {
            AnomalyLevel::Normal
        }
    }
}

impl Detector for CusumDetector {
    fn name(&self) -> &str {
        "cusum"
    }

    fn detect(&mut self, observation: &Observation) -> Result<DetectorResult> {
        let observed = observation.value;
        self.moving_range += (self.prev_value - observed).abs();

        let std_dev = self.avg_moving_range() / STD_DEV_DIVISOR;
        let slack = self.config.slack_param * std_dev;
        let weak_delta = self.config.weak_sigmas * std_dev;
        let strong_delta = self.config.strong_sigmas * std_dev;
        let target = self.config.target_value;

        self.sum_high = (self.sum_high + observed - (target + slack)).max(0.0);
        self.sum_low = (self.sum_low + observed - (target - slack)).min(0.0);
        self.prev_value = observed;
        self.num_observations += 1;

        let level = if self.num_observations <= self.config.warm_up_period {
            AnomalyLevel::ModelWarmup
        } else {
            self.classify_sums(weak_delta, strong_delta)
        };

        Ok(DetectorResult::Outlier(
            OutlierResult::new(level).with_trusted(self.trusted),
        ))
    }
}
