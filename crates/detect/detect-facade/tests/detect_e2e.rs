//! End-to-end tests for the detect facade
//!
//! Tests complete detection workflows using only this crate's API: documents
//! arrive as JSON, the builder turns them into detectors, and observations
//! stream through one at a time.

use serde_json::json;

use detect::{
    build_detector, AnomalyLevel, AnomalyType, BreakoutResult, Detector, DetectorDocument,
    ExponentialWelfordIntervalForecaster, ForecastingDetector, HoltWintersConfig,
    HoltWintersPointForecaster, Observation, OutlierResult, SeasonalityType, SmaConfig,
    SmaPointForecaster, WelfordConfig,
};

const BASE_TIMESTAMP: i64 = 1563428100;
const TOLERANCE: f64 = 1e-9;

fn observation(slot: i64, value: f64) -> Observation {
    Observation::new("bookings.count", BASE_TIMESTAMP + 60 * slot, value)
}

fn stream_outliers(detector: &mut dyn Detector, values: &[f64]) -> Vec<OutlierResult> {
    values
        .iter()
        .enumerate()
        .map(|(slot, &value)| {
            let result = detector.detect(&observation(slot as i64, value)).unwrap();
            result.as_outlier().expect("outlier result").clone()
        })
        .collect()
}

fn stream_breakouts(detector: &mut dyn Detector, values: &[f64]) -> Vec<BreakoutResult> {
    values
        .iter()
        .enumerate()
        .map(|(slot, &value)| {
            let result = detector.detect(&observation(slot as i64, value)).unwrap();
            result.as_breakout().expect("breakout result").clone()
        })
        .collect()
}

#[test]
fn e2e_cusum_document_workflow() {
    let document: DetectorDocument = serde_json::from_str(
        r#"{
            "detector_type": "cusum-detector",
            "config": {
                "target_value": 0.0,
                "slack_param": 0.0,
                "init_mean_estimate": 0.0,
                "warm_up_period": 1,
                "anomaly_type": "right_tailed"
            }
        }"#,
    )
    .unwrap();

    let mut detector = build_detector(&document).unwrap();
    assert_eq!(detector.name(), "cusum");

    let results = stream_outliers(detector.as_mut(), &[0.0, 4.0, 8.0, 8.0, 0.0]);
    let levels: Vec<AnomalyLevel> = results.iter().map(|result| result.level).collect();
    assert_eq!(
        levels,
        vec![
            AnomalyLevel::ModelWarmup,
            AnomalyLevel::Normal,
            AnomalyLevel::Weak,
            AnomalyLevel::Strong,
            AnomalyLevel::Normal,
        ]
    );
    assert!(results.iter().all(|result| result.trusted));
}

#[test]
fn e2e_seasonal_document_workflow() {
    let document = DetectorDocument::new(
        "seasonalnaive-detector",
        json!({"cycle_length": 4, "interval_length": 60}),
    );
    let mut detector = build_detector(&document).unwrap();
    assert_eq!(detector.name(), "seasonalnaive");

    let values = [3.0, 6.0, 9.0, 6.0, 3.5, 6.2, 8.8, 6.1];
    let results = stream_outliers(detector.as_mut(), &values);

    // The first cycle has nothing to compare against
    for result in &results[..4] {
        assert_eq!(result.level, AnomalyLevel::Unknown);
        assert_eq!(result.predicted, None);
    }
    // The second cycle is forecast from the first and stays in band
    for result in &results[4..] {
        assert_eq!(result.level, AnomalyLevel::Normal);
        assert!(result.thresholds.is_some());
    }
    assert_eq!(results[4].predicted, Some(3.0));
    assert_eq!(results[5].predicted, Some(6.0));
}

#[test]
fn e2e_breakout_document_workflow() {
    let document = DetectorDocument::new(
        "edmx-detector",
        json!({"buffer_size": 12, "delta": 3, "num_perms": 0, "seed": 42}),
    );
    let mut detector = build_detector(&document).unwrap();
    assert_eq!(detector.name(), "edmx");

    let mut values = vec![1.0; 6];
    values.extend_from_slice(&[10.0; 6]);
    let results = stream_breakouts(detector.as_mut(), &values);

    for result in &results[..11] {
        assert!(result.warmup);
        assert_eq!(result.timestamp, None);
    }

    let verdict = &results[11];
    assert!(!verdict.warmup);
    // The estimated breakout is the first high observation
    assert_eq!(verdict.timestamp, Some(BASE_TIMESTAMP + 60 * 6));
    assert_eq!(verdict.p_value, Some(0.0));
    assert_eq!(verdict.significant, Some(true));
    assert!((verdict.energy_distance.unwrap() - 3.0).abs() < TOLERANCE);
    assert!((verdict.pre_median.unwrap() - 0.0).abs() < TOLERANCE);
    assert!((verdict.post_median.unwrap() - 1.0).abs() < TOLERANCE);
}

#[test]
fn e2e_holt_winters_learns_a_season() {
    let config = HoltWintersConfig::new(4, 0.5, 0.5, 0.5)
        .with_seasonality_type(SeasonalityType::Additive)
        .with_init_level_estimate(10.0)
        .with_init_base_estimate(1.0)
        .with_init_seasonal_estimates(vec![1.0, -1.0, 2.0, -2.0])
        .with_warm_up_period(2);
    let point = HoltWintersPointForecaster::new(config).unwrap();
    let interval =
        ExponentialWelfordIntervalForecaster::new(WelfordConfig::new(0.05, 1.0, 3.0, 4.0))
            .unwrap();
    let mut detector = ForecastingDetector::new(
        "holtwinters",
        Box::new(point),
        Box::new(interval),
        AnomalyType::TwoTailed,
    );

    let results = stream_outliers(&mut detector, &[12.0, 13.0, 10.0, 11.0]);
    let levels: Vec<AnomalyLevel> = results.iter().map(|result| result.level).collect();
    assert_eq!(
        levels,
        vec![
            AnomalyLevel::ModelWarmup,
            AnomalyLevel::ModelWarmup,
            AnomalyLevel::Weak,
            AnomalyLevel::Normal,
        ]
    );

    // Warm-up results carry no forecast, later ones replay the model's
    assert_eq!(results[0].predicted, None);
    assert_eq!(results[1].predicted, None);
    assert!((results[2].predicted.unwrap() - 15.5).abs() < TOLERANCE);
    assert!((results[3].predicted.unwrap() - 11.375).abs() < TOLERANCE);
}

#[test]
fn e2e_sma_rolling_forecast() {
    let config = SmaConfig::new(3).with_initial_values(vec![4.0, 5.0, 6.0]);
    let point = SmaPointForecaster::new(config).unwrap();
    let interval =
        ExponentialWelfordIntervalForecaster::new(WelfordConfig::new(0.05, 1.0, 3.0, 4.0))
            .unwrap();
    let mut detector = ForecastingDetector::new(
        "sma",
        Box::new(point),
        Box::new(interval),
        AnomalyType::TwoTailed,
    );

    // Window slides from [4, 5, 6] through [5, 6, 7] to [6, 7, 8]
    let results = stream_outliers(&mut detector, &[7.0, 8.0]);

    assert_eq!(results[0].level, AnomalyLevel::Normal);
    assert!((results[0].predicted.unwrap() - 6.0).abs() < TOLERANCE);
    assert_eq!(results[1].level, AnomalyLevel::Normal);
    assert!((results[1].predicted.unwrap() - 7.0).abs() < TOLERANCE);

    let thresholds = results[1].thresholds.clone().unwrap();
    assert!(thresholds.upper_strong.unwrap() > thresholds.upper_weak.unwrap());
    assert!(thresholds.lower_weak.unwrap() > thresholds.lower_strong.unwrap());
}

#[test]
fn e2e_mixed_fleet_dispatch() {
    let documents: Vec<DetectorDocument> = serde_json::from_str(
        r#"[
            {"detector_type": "ewma-detector"},
            {"detector_type": "cusum-detector"},
            {"detector_type": "edmx-detector", "config": {"buffer_size": 12, "delta": 3}}
        ]"#,
    )
    .unwrap();

    let mut fleet: Vec<Box<dyn Detector>> = documents
        .iter()
        .map(|document| build_detector(document).unwrap())
        .collect();

    let names: Vec<&str> = fleet.iter().map(|detector| detector.name()).collect();
    assert_eq!(names, vec!["ewma", "cusum", "edmx"]);

    let shared = observation(0, 42.0);
    let verdicts: Vec<_> = fleet
        .iter_mut()
        .map(|detector| detector.detect(&shared).unwrap())
        .collect();

    assert!(verdicts[0].as_outlier().is_some());
    assert!(verdicts[1].as_outlier().is_some());
    assert!(verdicts[2].as_breakout().is_some());

    // Verdicts serialize with a kind tag so downstream consumers can route
    let outlier_wire = serde_json::to_value(&verdicts[0]).unwrap();
    assert_eq!(outlier_wire["kind"], "outlier");
    let breakout_wire = serde_json::to_value(&verdicts[2]).unwrap();
    assert_eq!(breakout_wire["kind"], "breakout");
}

#[test]
fn e2e_untrusted_document_workflow() {
    let document: DetectorDocument = serde_json::from_str(
        r#"{
            "detector_type": "sma-detector",
            "trusted": false,
            "config": {"look_back_period": 3, "initial_values": [4.0, 5.0, 6.0]}
        }"#,
    )
    .unwrap();
    assert!(!document.trusted);

    let mut detector = build_detector(&document).unwrap();
    let results = stream_outliers(detector.as_mut(), &[7.0, 7.0]);

    for result in &results {
        assert_eq!(result.level, AnomalyLevel::Normal);
        assert!(!result.trusted);
    }
}
