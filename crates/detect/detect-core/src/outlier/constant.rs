//! Constant-threshold outlier detector.

use detect_api::ConstantThresholdConfig;
use detect_spi::{Detector, DetectorResult, Observation, OutlierResult, Result};

use crate::classify::classify;

/// Classifies each observation against fixed, externally supplied thresholds.
///
/// The detector keeps no model state. Every observation is compared against
/// the same thresholds it was configured with, which makes it the right tool
/// for metrics with hard operating limits.
pub struct ConstantThresholdDetector {
    config: ConstantThresholdConfig,
    trusted: bool,
}

impl ConstantThresholdDetector {
    pub fn new(config: ConstantThresholdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trusted: true,
        })
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    pub fn config(&self) -> &ConstantThresholdConfig {
        &self.config
    }
}

impl Detector for ConstantThresholdDetector {
    fn name(&self) -> &str {
        "constant-threshold"
    }

    fn detect(&mut self, observation: &Observation) -> Result<DetectorResult> {
        let level = classify(
            &self.config.thresholds,
            self.config.anomaly_type,
            observation.value,
        );
        let result = OutlierResult::new(level)
            .with_thresholds(self.config.thresholds.clone())
            .with_trusted(self.trusted);
        Ok(DetectorResult::Outlier(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use detect_spi::{AnomalyLevel, AnomalyThresholds, AnomalyType};

    fn new_detector(
        anomaly_type: AnomalyType,
        thresholds: AnomalyThresholds,
    ) -> ConstantThresholdDetector {
        ConstantThresholdDetector::new(ConstantThresholdConfig::new(anomaly_type, thresholds))
            .unwrap()
    }

    fn outlier(result: DetectorResult) -> OutlierResult {
        match result {
            DetectorResult::Outlier(outlier) => outlier,
            DetectorResult::Breakout(_) => panic!("expected an outlier result"),
        }
    }

    fn level_of(detector: &mut ConstantThresholdDetector, value: f64) -> AnomalyLevel {
        let observation = Observation::new("latency", 1563428100, value);
        outlier(detector.detect(&observation).unwrap()).level
    }

    #[test]
    fn test_right_tailed_levels() {
        let thresholds = AnomalyThresholds::new(Some(100.0), Some(90.0), None, None).unwrap();
        let mut detector = new_detector(AnomalyType::RightTailed, thresholds);

        assert_eq!(level_of(&mut detector, 110.0), AnomalyLevel::Strong);
        assert_eq!(level_of(&mut detector, 100.0), AnomalyLevel::Strong);
        assert_eq!(level_of(&mut detector, 95.0), AnomalyLevel::Weak);
        assert_eq!(level_of(&mut detector, 90.0), AnomalyLevel::Weak);
        assert_eq!(level_of(&mut detector, 85.0), AnomalyLevel::Normal);
    }

    #[test]
    fn test_left_tailed_levels() {
        let thresholds = AnomalyThresholds::new(None, None, Some(30.0), Some(10.0)).unwrap();
        let mut detector = new_detector(AnomalyType::LeftTailed, thresholds);

        assert_eq!(level_of(&mut detector, 5.0), AnomalyLevel::Strong);
        assert_eq!(level_of(&mut detector, 10.0), AnomalyLevel::Strong);
        assert_eq!(level_of(&mut detector, 20.0), AnomalyLevel::Weak);
        assert_eq!(level_of(&mut detector, 30.0), AnomalyLevel::Weak);
        assert_eq!(level_of(&mut detector, 50.0), AnomalyLevel::Normal);
    }

    #[test]
    fn test_two_tailed_levels() {
        let thresholds =
            AnomalyThresholds::new(Some(100.0), Some(90.0), Some(30.0), Some(10.0)).unwrap();
        let mut detector = new_detector(AnomalyType::TwoTailed, thresholds);

        assert_eq!(level_of(&mut detector, 150.0), AnomalyLevel::Strong);
        assert_eq!(level_of(&mut detector, 95.0), AnomalyLevel::Weak);
        assert_eq!(level_of(&mut detector, 60.0), AnomalyLevel::Normal);
        assert_eq!(level_of(&mut detector, 25.0), AnomalyLevel::Weak);
        assert_eq!(level_of(&mut detector, 5.0), AnomalyLevel::Strong);
    }

    #[test]
    fn test_result_echoes_thresholds_without_prediction() {
        let thresholds = AnomalyThresholds::new(Some(100.0), Some(90.0), None, None).unwrap();
        let mut detector = new_detector(AnomalyType::RightTailed, thresholds.clone());

        let observation = Observation::new("latency", 1563428100, 95.0);
        let result = outlier(detector.detect(&observation).unwrap());
        assert_eq!(result.level, AnomalyLevel::Weak);
        assert_eq!(result.thresholds, Some(thresholds));
        assert_eq!(result.predicted, None);
        assert!(result.trusted);
    }

    #[test]
    fn test_untrusted_detector_marks_results() {
        let thresholds = AnomalyThresholds::new(Some(100.0), Some(90.0), None, None).unwrap();
        let config = ConstantThresholdConfig::new(AnomalyType::RightTailed, thresholds);
        let mut detector = ConstantThresholdDetector::new(config)
            .unwrap()
            .with_trusted(false);

        let observation = Observation::new("latency", 1563428100, 50.0);
        assert!(!outlier(detector.detect(&observation).unwrap()).trusted);
    }

    #[test]
    fn test_rejects_misordered_thresholds() {
        // Deserialized configs bypass the AnomalyThresholds constructor, so
        // the detector constructor has to re-validate.
        let json = r#"{
            "anomaly_type": "right_tailed",
            "thresholds": {"upper_strong": 90.0, "upper_weak": 100.0}
        }"#;
        let config: ConstantThresholdConfig = serde_json::from_str(json).unwrap();
        assert!(ConstantThresholdDetector::new(config).is_err());
    }

    #[test]
    fn test_name() {
        let thresholds = AnomalyThresholds::new(Some(100.0), None, None, None).unwrap();
        let detector = new_detector(AnomalyType::RightTailed, thresholds);
        assert_eq!(detector.name(), "constant-threshold");
    }
}
