#![cfg(test)]

use crate::{
    algorithm::Algorithm,
    generator::{self, Derivation, compute},
    metrics::{Direction, Extras},
    noise::Jitter,
    params::HyperparameterSet,
    series::{CURVE_LEN, SERIES_LEN},
};

#[test]
fn test_xgboost_reference_scenario() {
    let params = HyperparameterSet::defaults(Algorithm::XgBoost);
    let run = compute(&params, &mut Jitter::none());

    // 0.85 + (3/10)*0.08 - |0.1-0.1|*0.1 + (100/500)*0.05
    assert_eq!(run.metrics.primary.name, "accuracy");
    assert_eq!(run.metrics.primary.value, 0.884);
    assert_eq!(run.metrics.metric("precision"), Some(0.864));
    assert_eq!(run.metrics.metric("recall"), Some(0.874));
    assert_eq!(run.metrics.metric("f1_score"), Some(0.869));
    assert_eq!(run.metrics.elapsed_secs, 0.6);
}

#[test]
fn test_minimum_settings_stay_in_clamp_range() {
    for algorithm in Algorithm::ALL {
        let params = HyperparameterSet::minimums(algorithm);
        let profile = generator::profile(&params);
        let run = compute(&params, &mut Jitter::none());
        let primary = run.metrics.primary.value;
        assert!(
            primary >= profile.floor && primary <= profile.ceiling,
            "{algorithm}: {primary}"
        );
    }
}

#[test]
fn test_offset_metrics_trail_the_primary() {
    for algorithm in Algorithm::ALL {
        let params = HyperparameterSet::defaults(algorithm);
        let profile = generator::profile(&params);
        let run = compute(&params, &mut Jitter::none());
        let primary = run.metrics.primary.value;

        for (name, rule) in profile.derived {
            let Derivation::Offset(offset) = rule else {
                continue;
            };
            let value = run.metrics.metric(name).unwrap();
            assert!(value < primary, "{algorithm}.{name}");
            assert!((primary - value - offset).abs() < 1e-9, "{algorithm}.{name}");
        }
    }
}

#[test]
fn test_curve_lands_on_primary() {
    for algorithm in Algorithm::ALL {
        let run = compute(&HyperparameterSet::defaults(algorithm), &mut Jitter::new(Some(1)));
        assert_eq!(run.curve.points.len(), CURVE_LEN);
        assert_eq!(
            run.curve.last().unwrap().accuracy,
            run.metrics.primary.value
        );
    }
}

#[test]
fn test_series_has_fixed_length() {
    for algorithm in Algorithm::ALL {
        let run = compute(&HyperparameterSet::defaults(algorithm), &mut Jitter::new(Some(9)));
        assert_eq!(run.series.len(), SERIES_LEN);
        assert_eq!(run.series.points[0].x, 0.0);
        assert!(run.series.points.iter().all(|p| p.x < 10.0));
    }
}

#[test]
fn test_jitter_is_cosmetic() {
    let params = HyperparameterSet::defaults(Algorithm::RandomForest);
    let quiet = compute(&params, &mut Jitter::none());
    let noisy = compute(&params, &mut Jitter::new(Some(42)));

    assert_eq!(quiet.metrics, noisy.metrics);
    assert_eq!(quiet.curve, noisy.curve);
    for (a, b) in quiet.series.points.iter().zip(&noisy.series.points) {
        assert_eq!(a.predicted, b.predicted);
        assert!((a.y - b.y).abs() <= crate::noise::DEFAULT_AMPLITUDE + 1e-12);
    }
}

#[test]
fn test_linear_reports_an_error_metric() {
    let run = compute(
        &HyperparameterSet::defaults(Algorithm::Linear),
        &mut Jitter::none(),
    );
    assert_eq!(run.metrics.direction, Direction::LowerIsBetter);
    assert_eq!(run.metrics.primary.name, "rmse");
    // 0.6 - 1000/2000*0.2 + 0 - 0.03 + 0.1*0.15
    assert_eq!(run.metrics.primary.value, 0.485);
    assert_eq!(run.metrics.metric("mae"), Some(0.388));
    assert!(run.series.points.iter().all(|p| p.class == 0));
    assert!(matches!(run.metrics.extras, Extras::Coefficients { .. }));
}

#[test]
fn test_each_algorithm_has_its_extras() {
    let extras = |algorithm| {
        compute(&HyperparameterSet::defaults(algorithm), &mut Jitter::none())
            .metrics
            .extras
    };

    assert!(matches!(extras(Algorithm::XgBoost), Extras::FeatureImportance { .. }));
    assert!(matches!(extras(Algorithm::Knn), Extras::ConfusionMatrix { .. }));
    assert!(matches!(extras(Algorithm::Linear), Extras::Coefficients { .. }));
    assert!(matches!(extras(Algorithm::RandomForest), Extras::FeatureImportance { .. }));
    assert!(matches!(extras(Algorithm::Svm), Extras::SupportVectors { .. }));
}

#[test]
fn test_runs_serialize() {
    let run = compute(&HyperparameterSet::defaults(Algorithm::Knn), &mut Jitter::none());
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["metrics"]["algorithm"], "knn");
    assert_eq!(json["metrics"]["extras"]["kind"], "confusion_matrix");
    assert_eq!(json["series"]["points"].as_array().unwrap().len(), SERIES_LEN);

    let params = serde_json::to_value(HyperparameterSet::defaults(Algorithm::Knn)).unwrap();
    assert_eq!(params["algorithm"], "knn");
    assert_eq!(params["metric"], "euclidean");
}
