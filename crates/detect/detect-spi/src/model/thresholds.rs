//! Anomaly threshold pairs.

use serde::{Deserialize, Serialize};

use crate::error::{DetectError, Result};
use crate::model::IntervalForecast;

/// Weak and strong thresholds supporting one- and two-tailed tests.
///
/// Any side may be absent, which disables that side's test. Present bounds
/// must be ordered `upper_strong >= upper_weak >= lower_weak >= lower_strong`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnomalyThresholds {
    pub upper_strong: Option<f64>,
    pub upper_weak: Option<f64>,
    pub lower_weak: Option<f64>,
    pub lower_strong: Option<f64>,
}

impl AnomalyThresholds {
    /// Create validated thresholds.
    pub fn new(
        upper_strong: Option<f64>,
        upper_weak: Option<f64>,
        lower_weak: Option<f64>,
        lower_strong: Option<f64>,
    ) -> Result<Self> {
        let thresholds = Self {
            upper_strong,
            upper_weak,
            lower_weak,
            lower_strong,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check the at-least-one and pairwise-ordering constraints.
    ///
    /// Deserialized thresholds bypass `new`, so configs re-validate through
    /// this method before use.
    pub fn validate(&self) -> Result<()> {
        if self.upper_strong.is_none()
            && self.upper_weak.is_none()
            && self.lower_weak.is_none()
            && self.lower_strong.is_none()
        {
            return Err(DetectError::invalid_parameter(
                "thresholds",
                "at least one threshold must be set",
            ));
        }
        check_order("upper_strong", self.upper_strong, "upper_weak", self.upper_weak)?;
        check_order("upper_strong", self.upper_strong, "lower_weak", self.lower_weak)?;
        check_order("upper_strong", self.upper_strong, "lower_strong", self.lower_strong)?;
        check_order("upper_weak", self.upper_weak, "lower_weak", self.lower_weak)?;
        check_order("upper_weak", self.upper_weak, "lower_strong", self.lower_strong)?;
        check_order("lower_weak", self.lower_weak, "lower_strong", self.lower_strong)?;
        Ok(())
    }
}

impl From<IntervalForecast> for AnomalyThresholds {
    fn from(interval: IntervalForecast) -> Self {
        Self {
            upper_strong: Some(interval.upper_strong),
            upper_weak: Some(interval.upper_weak),
            lower_weak: Some(interval.lower_weak),
            lower_strong: Some(interval.lower_strong),
        }
    }
}

fn check_order(
    high_name: &str,
    high: Option<f64>,
    low_name: &str,
    low: Option<f64>,
) -> Result<()> {
    if let (Some(high), Some(low)) = (high, low) {
        if high < low {
            return Err(DetectError::invalid_parameter(
                high_name,
                format!("must be >= {} ({} < {})", low_name, high, low),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_two_tailed() {
        let thresholds =
            AnomalyThresholds::new(Some(100.0), Some(90.0), Some(20.0), Some(10.0)).unwrap();
        assert_eq!(thresholds.upper_strong, Some(100.0));
        assert_eq!(thresholds.lower_strong, Some(10.0));
    }

    #[test]
    fn test_new_upper_only() {
        let thresholds = AnomalyThresholds::new(Some(100.0), Some(90.0), None, None).unwrap();
        assert_eq!(thresholds.lower_weak, None);
        assert_eq!(thresholds.lower_strong, None);
    }

    #[test]
    fn test_new_single_bound() {
        assert!(AnomalyThresholds::new(Some(1.0), None, None, None).is_ok());
        assert!(AnomalyThresholds::new(None, None, None, Some(1.0)).is_ok());
    }

    #[test]
    fn test_new_rejects_all_absent() {
        let result = AnomalyThresholds::new(None, None, None, None);
        assert!(matches!(
            result,
            Err(DetectError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_new_rejects_upper_strong_below_upper_weak() {
        let result = AnomalyThresholds::new(Some(90.0), Some(100.0), None, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_upper_weak_below_lower_weak() {
        let result = AnomalyThresholds::new(None, Some(10.0), Some(20.0), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_lower_weak_below_lower_strong() {
        let result = AnomalyThresholds::new(None, None, Some(5.0), Some(10.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_crossing_sides() {
        // upper_strong below lower_strong with no weak bounds in between
        let result = AnomalyThresholds::new(Some(5.0), None, None, Some(10.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        assert!(AnomalyThresholds::new(Some(10.0), Some(10.0), Some(10.0), Some(10.0)).is_ok());
    }

    #[test]
    fn test_from_interval_forecast() {
        let interval = IntervalForecast::new(108.0, 106.0, 94.0, 92.0);
        let thresholds = AnomalyThresholds::from(interval);
        assert_eq!(thresholds.upper_strong, Some(108.0));
        assert_eq!(thresholds.upper_weak, Some(106.0));
        assert_eq!(thresholds.lower_weak, Some(94.0));
        assert_eq!(thresholds.lower_strong, Some(92.0));
    }

    #[test]
    fn test_validate_after_deserialize() {
        let json = r#"{"upper_strong": 1.0, "upper_weak": 2.0}"#;
        let thresholds: AnomalyThresholds = serde_json::from_str(json).unwrap();
        assert!(thresholds.validate().is_err());
    }
}
