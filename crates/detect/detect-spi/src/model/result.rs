//! Detector result types.

use serde::{Deserialize, Serialize};

use crate::model::{AnomalyLevel, AnomalyThresholds};

/// Result of one `detect()` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectorResult {
    /// Outlier classification of a single observation.
    Outlier(OutlierResult),
    /// Breakout (change-point) verdict over the detector's recent window.
    Breakout(BreakoutResult),
}

impl DetectorResult {
    /// The outlier payload, if this is an outlier result.
    pub fn as_outlier(&self) -> Option<&OutlierResult> {
        match self {
            DetectorResult::Outlier(result) => Some(result),
            DetectorResult::Breakout(_) => None,
        }
    }

    /// The breakout payload, if this is a breakout result.
    pub fn as_breakout(&self) -> Option<&BreakoutResult> {
        match self {
            DetectorResult::Breakout(result) => Some(result),
            DetectorResult::Outlier(_) => None,
        }
    }
}

/// Outlier detector verdict for one observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierResult {
    /// Severity of the observation.
    pub level: AnomalyLevel,
    /// The point forecast the observation was compared against, when one
    /// was available.
    pub predicted: Option<f64>,
    /// The thresholds used for classification, when they were computed.
    pub thresholds: Option<AnomalyThresholds>,
    /// Whether the producing detector is vetted for production alerting.
    pub trusted: bool,
}

impl OutlierResult {
    /// Create a result carrying only a level.
    pub fn new(level: AnomalyLevel) -> Self {
        Self {
            level,
            predicted: None,
            thresholds: None,
            trusted: true,
        }
    }

    pub fn with_predicted(mut self, predicted: f64) -> Self {
        self.predicted = Some(predicted);
        self
    }

    pub fn with_thresholds(mut self, thresholds: AnomalyThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }
}

/// Breakout detector verdict.
///
/// During warm-up only `warmup` is set. Once the detector's buffer is full,
/// a found breakout populates the remaining fields; "no breakout" leaves
/// them absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakoutResult {
    /// True while the detector's buffer is still filling.
    pub warmup: bool,
    /// Timestamp of the buffer entry at the breakout location.
    pub timestamp: Option<i64>,
    /// Whether the breakout is statistically significant at the configured
    /// level.
    pub significant: Option<bool>,
    /// Energy-distance statistic at the breakout location.
    pub energy_distance: Option<f64>,
    /// Permutation-test p-value for the statistic.
    pub p_value: Option<f64>,
    /// Median of the pre-breakout segment.
    pub pre_median: Option<f64>,
    /// Median of the post-breakout segment.
    pub post_median: Option<f64>,
    /// Whether the producing detector is vetted for production alerting.
    pub trusted: bool,
}

impl BreakoutResult {
    /// Create a result with only the warm-up flag set.
    pub fn new(warmup: bool) -> Self {
        Self {
            warmup,
            timestamp: None,
            significant: None,
            energy_distance: None,
            p_value: None,
            pre_median: None,
            post_median: None,
            trusted: true,
        }
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn with_significant(mut self, significant: bool) -> Self {
        self.significant = Some(significant);
        self
    }

    pub fn with_energy_distance(mut self, energy_distance: f64) -> Self {
        self.energy_distance = Some(energy_distance);
        self
    }

    pub fn with_p_value(mut self, p_value: f64) -> Self {
        self.p_value = Some(p_value);
        self
    }

    pub fn with_medians(mut self, pre_median: f64, post_median: f64) -> Self {
        self.pre_median = Some(pre_median);
        self.post_median = Some(post_median);
        self
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }
}
