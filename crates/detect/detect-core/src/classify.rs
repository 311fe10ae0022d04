//! Threshold classification.

use detect_spi::{AnomalyLevel, AnomalyThresholds, AnomalyType};

/// Classify an observed value against a threshold band.
///
/// Strong thresholds are checked before weak ones on both tails, so a value
/// beyond a strong threshold never downgrades to `Weak`. Tails the anomaly
/// type does not cover are ignored, as are unset thresholds.
pub fn classify(
    thresholds: &AnomalyThresholds,
    anomaly_type: AnomalyType,
    observed: f64,
) -> AnomalyLevel {
    let check_upper = anomaly_type.checks_upper();
    let check_lower = anomaly_type.checks_lower();

    if check_upper {
        if let Some(upper_strong) = thresholds.upper_strong {
            if observed >= upper_strong {
                return AnomalyLevel::Strong;
            }
        }
    }
    if check_lower {
        if let Some(lower_strong) = thresholds.lower_strong {
            if observed <= lower_strong {
                return AnomalyLevel::Strong;
            }
        }
    }
    if check_upper {
        if let Some(upper_weak) = thresholds.upper_weak {
            if observed >= upper_weak {
                return AnomalyLevel::Weak;
            }
        }
    }
    if check_lower {
        if let Some(lower_weak) = thresholds.lower_weak {
            if observed <= lower_weak {
                return AnomalyLevel::Weak;
            }
        }
    }

    AnomalyLevel::Normal
}
