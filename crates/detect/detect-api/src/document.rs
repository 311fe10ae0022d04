//! Detector documents.
//!
//! A `DetectorDocument` is the construction-time payload handed to the
//! builder by the upstream detector source: a detector-type string, a
//! trusted flag, and an untyped JSON config the builder deserializes into
//! the matching typed configuration.
//!
//! Forecasting detectors use bundled configs that flatten the point
//! forecaster's fields together with the interval band widths and the tail
//! selection, so a document stays a single flat JSON object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use detect_spi::AnomalyType;

use crate::interval::WelfordConfig;
use crate::point::{
    EwmaConfig, HoltWintersConfig, PewmaConfig, SeasonalNaiveConfig, SeasonalityType, SmaConfig,
    TrainingMethod,
};

/// Construction-time description of one detector instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorDocument {
    /// Registry key selecting the algorithm, e.g. `"ewma-detector"`.
    pub detector_type: String,
    /// Whether the detector is vetted for production alerting.
    #[serde(default = "default_trusted")]
    pub trusted: bool,
    /// Algorithm-specific configuration, deserialized by the builder.
    #[serde(default)]
    pub config: Value,
}

fn default_trusted() -> bool {
    true
}

impl DetectorDocument {
    /// Create a trusted document for the given detector type.
    pub fn new(detector_type: impl Into<String>, config: Value) -> Self {
        Self {
            detector_type: detector_type.into(),
            trusted: true,
            config,
        }
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }
}

// ============================================================================
// Bundled forecasting-detector configs
// ============================================================================

/// Document config for an EWMA forecasting detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EwmaDetectorConfig {
    pub alpha: f64,
    pub init_mean_estimate: f64,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub anomaly_type: AnomalyType,
}

impl Default for EwmaDetectorConfig {
    fn default() -> Self {
        let point = EwmaConfig::default();
        let interval = WelfordConfig::default();
        Self {
            alpha: point.alpha,
            init_mean_estimate: point.init_mean_estimate,
            weak_sigmas: interval.weak_sigmas,
            strong_sigmas: interval.strong_sigmas,
            anomaly_type: AnomalyType::TwoTailed,
        }
    }
}

impl EwmaDetectorConfig {
    pub fn to_point_config(&self) -> EwmaConfig {
        EwmaConfig::new(self.alpha, self.init_mean_estimate)
    }

    pub fn to_interval_config(&self) -> WelfordConfig {
        WelfordConfig::with_sigmas(self.weak_sigmas, self.strong_sigmas)
    }
}

/// Document config for a PEWMA forecasting detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PewmaDetectorConfig {
    pub alpha: f64,
    pub beta: f64,
    pub training_length: usize,
    pub init_mean_estimate: f64,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub anomaly_type: AnomalyType,
}

impl Default for PewmaDetectorConfig {
    fn default() -> Self {
        let point = PewmaConfig::default();
        let interval = WelfordConfig::default();
        Self {
            alpha: point.alpha,
            beta: point.beta,
            training_length: point.training_length,
            init_mean_estimate: point.init_mean_estimate,
            weak_sigmas: interval.weak_sigmas,
            strong_sigmas: interval.strong_sigmas,
            anomaly_type: AnomalyType::TwoTailed,
        }
    }
}

impl PewmaDetectorConfig {
    pub fn to_point_config(&self) -> PewmaConfig {
        PewmaConfig::new(
            self.alpha,
            self.beta,
            self.training_length,
            self.init_mean_estimate,
        )
    }

    pub fn to_interval_config(&self) -> WelfordConfig {
        WelfordConfig::with_sigmas(self.weak_sigmas, self.strong_sigmas)
    }
}

/// Document config for a Holt-Winters forecasting detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HoltWintersDetectorConfig {
    pub frequency: usize,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub seasonality_type: SeasonalityType,
    pub init_training_method: TrainingMethod,
    pub init_level_estimate: f64,
    pub init_base_estimate: f64,
    pub init_seasonal_estimates: Vec<f64>,
    pub warm_up_period: usize,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub anomaly_type: AnomalyType,
}

impl Default for HoltWintersDetectorConfig {
    fn default() -> Self {
        let point = HoltWintersConfig::default();
        let interval = WelfordConfig::default();
        Self {
            frequency: point.frequency,
            alpha: point.alpha,
            beta: point.beta,
            gamma: point.gamma,
            seasonality_type: point.seasonality_type,
            init_training_method: point.init_training_method,
            init_level_estimate: point.init_level_estimate,
            init_base_estimate: point.init_base_estimate,
            init_seasonal_estimates: point.init_seasonal_estimates,
            warm_up_period: point.warm_up_period,
            weak_sigmas: interval.weak_sigmas,
            strong_sigmas: interval.strong_sigmas,
            anomaly_type: AnomalyType::TwoTailed,
        }
    }
}

impl HoltWintersDetectorConfig {
    pub fn to_point_config(&self) -> HoltWintersConfig {
        HoltWintersConfig {
            frequency: self.frequency,
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            seasonality_type: self.seasonality_type,
            init_training_method: self.init_training_method,
            init_level_estimate: self.init_level_estimate,
            init_base_estimate: self.init_base_estimate,
            init_seasonal_estimates: self.init_seasonal_estimates.clone(),
            warm_up_period: self.warm_up_period,
        }
    }

    pub fn to_interval_config(&self) -> WelfordConfig {
        WelfordConfig::with_sigmas(self.weak_sigmas, self.strong_sigmas)
    }
}

/// Document config for a seasonal-naive forecasting detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalNaiveDetectorConfig {
    pub cycle_length: usize,
    pub interval_length: i64,
    pub missing_value_placeholder: f64,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub anomaly_type: AnomalyType,
}

impl Default for SeasonalNaiveDetectorConfig {
    fn default() -> Self {
        let point = SeasonalNaiveConfig::default();
        let interval = WelfordConfig::default();
        Self {
            cycle_length: point.cycle_length,
            interval_length: point.interval_length,
            missing_value_placeholder: point.missing_value_placeholder,
            weak_sigmas: interval.weak_sigmas,
            strong_sigmas: interval.strong_sigmas,
            anomaly_type: AnomalyType::TwoTailed,
        }
    }
}

impl SeasonalNaiveDetectorConfig {
    pub fn to_point_config(&self) -> SeasonalNaiveConfig {
        SeasonalNaiveConfig::new(self.cycle_length, self.interval_length)
            .with_missing_value_placeholder(self.missing_value_placeholder)
    }

    pub fn to_interval_config(&self) -> WelfordConfig {
        WelfordConfig::with_sigmas(self.weak_sigmas, self.strong_sigmas)
    }
}

/// Document config for a simple-moving-average forecasting detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmaDetectorConfig {
    pub look_back_period: usize,
    pub initial_values: Vec<f64>,
    pub weak_sigmas: f64,
    pub strong_sigmas: f64,
    pub anomaly_type: AnomalyType,
}

impl Default for SmaDetectorConfig {
    fn default() -> Self {
        let point = SmaConfig::default();
        let interval = WelfordConfig::default();
        Self {
            look_back_period: point.look_back_period,
            initial_values: point.initial_values,
            weak_sigmas: interval.weak_sigmas,
            strong_sigmas: interval.strong_sigmas,
            anomaly_type: AnomalyType::TwoTailed,
        }
    }
}

impl SmaDetectorConfig {
    pub fn to_point_config(&self) -> SmaConfig {
        SmaConfig::new(self.look_back_period).with_initial_values(self.initial_values.clone())
    }

    pub fn to_interval_config(&self) -> WelfordConfig {
        WelfordConfig::with_sigmas(self.weak_sigmas, self.strong_sigmas)
    }
}
