//! Forecast-based outlier detection.

use detect_spi::{
    AnomalyLevel, AnomalyThresholds, AnomalyType, Detector, DetectorResult, IntervalForecaster,
    Observation, OutlierResult, PointForecaster, Result,
};

use crate::classify::classify;

/// Detector that compares observations against forecast bands.
///
/// A point forecaster predicts the next value, the interval forecaster wraps
/// the prediction in weak and strong bands, and the observed value is
/// classified against those bands. Observations arriving while the point
/// forecaster is warming up are reported as `ModelWarmup` without touching
/// the interval forecaster, and observations the point forecaster cannot
/// forecast are reported as `Unknown`.
pub struct ForecastingDetector {
    name: String,
    point_forecaster: Box<dyn PointForecaster>,
    interval_forecaster: Box<dyn IntervalForecaster>,
    anomaly_type: AnomalyType,
    trusted: bool,
}

impl ForecastingDetector {
    pub fn new(
        name: impl Into<String>,
        point_forecaster: Box<dyn PointForecaster>,
        interval_forecaster: Box<dyn IntervalForecaster>,
        anomaly_type: AnomalyType,
    ) -> Self {
        Self {
            name: name.into(),
            point_forecaster,
            interval_forecaster,
            anomaly_type,
            trusted: true,
        }
    }

    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    pub fn anomaly_type(&self) -> AnomalyType {
        self.anomaly_type
    }

    pub fn is_trusted(&self) -> bool {
        self.trusted
    }
}

impl Detector for ForecastingDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(&mut self, observation: &Observation) -> Result<DetectorResult> {
        let point_forecast = self.point_forecaster.forecast(observation)?;

        let result = match point_forecast {
            None => OutlierResult::new(AnomalyLevel::Unknown),
            Some(point) if point.is_warmup => OutlierResult::new(AnomalyLevel::ModelWarmup),
            Some(point) => {
                let interval = self
                    .interval_forecaster
                    .forecast(observation, point.value)?;
                let thresholds = AnomalyThresholds::from(interval);
                let level = classify(&thresholds, self.anomaly_type, observation.value);
                OutlierResult::new(level)
                    .with_predicted(point.value)
                    .with_thresholds(thresholds)
            }
        };

        Ok(DetectorResult::Outlier(result.with_trusted(self.trusted)))
    }
}
