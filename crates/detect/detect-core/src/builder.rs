//! Detector construction from documents.

use serde::de::DeserializeOwned;
use serde_json::Value;

use detect_api::{
    ConstantThresholdConfig, CusumConfig, DetectorDocument, EdmxConfig, EwmaDetectorConfig,
    HoltWintersDetectorConfig, PewmaDetectorConfig, SeasonalNaiveDetectorConfig, SmaDetectorConfig,
};
use detect_spi::{AnomalyType, DetectError, Detector, PointForecaster, Result};

use crate::breakout::EdmxDetector;
use crate::forecast::{
    EwmaPointForecaster, ExponentialWelfordIntervalForecaster, HoltWintersPointForecaster,
    PewmaPointForecaster, SeasonalNaivePointForecaster, SmaPointForecaster,
};
use crate::outlier::{ConstantThresholdDetector, CusumDetector, ForecastingDetector};

/// Builds a boxed detector from a document.
///
/// The document's `detector_type` selects the algorithm. The document's
/// `config` is deserialized into the matching typed configuration; a null
/// config falls back to that configuration's defaults, except for the
/// constant-threshold detector whose thresholds have no sensible default.
pub fn build_detector(document: &DetectorDocument) -> Result<Box<dyn Detector>> {
    match document.detector_type.as_str() {
        "constant-detector" => {
            let config: ConstantThresholdConfig = typed_config(&document.config)?;
            let detector = ConstantThresholdDetector::new(config)?.with_trusted(document.trusted);
            Ok(Box::new(detector))
        }
        "cusum-detector" => {
            let config: CusumConfig = config_or_default(&document.config)?;
            let detector = CusumDetector::new(config)?.with_trusted(document.trusted);
            Ok(Box::new(detector))
        }
        "edmx-detector" => {
            let config: EdmxConfig = config_or_default(&document.config)?;
            let detector = EdmxDetector::new(config)?.with_trusted(document.trusted);
            Ok(Box::new(detector))
        }
        "ewma-detector" => {
            let config: EwmaDetectorConfig = config_or_default(&document.config)?;
            let point = EwmaPointForecaster::new(config.to_point_config())?;
            let interval =
                ExponentialWelfordIntervalForecaster::new(config.to_interval_config())?;
            Ok(forecasting_detector(
                "ewma",
                point,
                interval,
                config.anomaly_type,
                document,
            ))
        }
        "pewma-detector" => {
            let config: PewmaDetectorConfig = config_or_default(&document.config)?;
            let point = PewmaPointForecaster::new(config.to_point_config())?;
            let interval =
                ExponentialWelfordIntervalForecaster::new(config.to_interval_config())?;
            Ok(forecasting_detector(
                "pewma",
                point,
                interval,
                config.anomaly_type,
                document,
            ))
        }
        "holtwinters-detector" => {
            let config: HoltWintersDetectorConfig = config_or_default(&document.config)?;
            let point = HoltWintersPointForecaster::new(config.to_point_config())?;
            let interval =
                ExponentialWelfordIntervalForecaster::new(config.to_interval_config())?;
            Ok(forecasting_detector(
                "holtwinters",
                point,
                interval,
                config.anomaly_type,
                document,
            ))
        }
        "seasonalnaive-detector" => {
            let config: SeasonalNaiveDetectorConfig = config_or_default(&document.config)?;
            let point = SeasonalNaivePointForecaster::new(config.to_point_config())?;
            let interval =
                ExponentialWelfordIntervalForecaster::new(config.to_interval_config())?;
            Ok(forecasting_detector(
                "seasonalnaive",
                point,
                interval,
                config.anomaly_type,
                document,
            ))
        }
        "sma-detector" => {
            let config: SmaDetectorConfig = config_or_default(&document.config)?;
            let point = SmaPointForecaster::new(config.to_point_config())?;
            let interval =
                ExponentialWelfordIntervalForecaster::new(config.to_interval_config())?;
            Ok(forecasting_detector(
                "sma",
                point,
                interval,
                config.anomaly_type,
                document,
            ))
        }
        unknown => Err(DetectError::UnknownDetectorType(unknown.to_string())),
    }
}

fn forecasting_detector(
    name: &str,
    point: impl PointForecaster + 'static,
    interval: ExponentialWelfordIntervalForecaster,
    anomaly_type: AnomalyType,
    document: &DetectorDocument,
) -> Box<dyn Detector> {
    let detector =
        ForecastingDetector::new(name, Box::new(point), Box::new(interval), anomaly_type)
            .with_trusted(document.trusted);
    Box::new(detector)
}

fn config_or_default<T>(config: &Value) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    match config {
        Value::Null => Ok(T::default()),
        value => typed_config(value),
    }
}

fn typed_config<T: DeserializeOwned>(config: &Value) -> Result<T> {
    serde_json::from_value(config.clone())
        .map_err(|error| DetectError::InvalidConfig(error.to_string()))
}
