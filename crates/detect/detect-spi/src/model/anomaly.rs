//! Anomaly level and tail-selection enums.

use serde::{Deserialize, Serialize};

/// Severity of a classified observation.
///
/// `Normal < Weak < Strong` is a meaningful ordering for downstream
/// aggregation; `ModelWarmup` and `Unknown` are orthogonal "no verdict yet"
/// states and carry no rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyLevel {
    /// Within expected bounds.
    Normal,
    /// Beyond the weak threshold but not the strong one.
    Weak,
    /// Beyond the strong threshold.
    Strong,
    /// The model has not observed enough data to classify.
    ModelWarmup,
    /// No usable forecast was available for this observation.
    Unknown,
}

impl AnomalyLevel {
    /// Numeric severity rank for Normal/Weak/Strong; `None` for the
    /// no-verdict states.
    pub fn severity_rank(&self) -> Option<u8> {
        match self {
            AnomalyLevel::Normal => Some(0),
            AnomalyLevel::Weak => Some(1),
            AnomalyLevel::Strong => Some(2),
            AnomalyLevel::ModelWarmup | AnomalyLevel::Unknown => None,
        }
    }
}

/// Which side(s) of the expected value are tested for anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyType {
    /// Test only below the expected value.
    LeftTailed,
    /// Test only above the expected value.
    RightTailed,
    /// Test both sides.
    TwoTailed,
}

impl AnomalyType {
    /// Whether the upper thresholds are evaluated for this type.
    pub fn checks_upper(&self) -> bool {
        matches!(self, AnomalyType::RightTailed | AnomalyType::TwoTailed)
    }

    /// Whether the lower thresholds are evaluated for this type.
    pub fn checks_lower(&self) -> bool {
        matches!(self, AnomalyType::LeftTailed | AnomalyType::TwoTailed)
    }
}
