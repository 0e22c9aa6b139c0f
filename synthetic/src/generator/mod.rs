mod knn;
mod linear;
mod profile;
mod random_forest;
mod svm;
mod terms;
mod xgboost;

use serde::Serialize;

use crate::{
    metrics::{Direction, Extras, FeatureWeight, Metric, MetricResult, round3},
    noise::Jitter,
    params::{HyperparameterSet, Tunable},
    series::{ChartSeries, PerformanceCurve},
};

pub use profile::{Derivation, MetricProfile};
pub use terms::{Shape, Term};

/// The per-algorithm half of the generator. Everything else (summing the
/// coefficient table, clamping, deriving secondary metrics, sampling the
/// chart and the curve) is shared.
pub trait Strategy: Tunable {
    fn profile(&self) -> &'static MetricProfile;

    fn terms(&self) -> &'static [Term];

    /// Fabricated wall-clock time of the run, in seconds.
    fn elapsed_secs(&self) -> f64;

    /// The clean curve `f(x)` plotted by the chart.
    fn shape(&self, x: f64) -> f64;

    fn extras(&self, primary: f64) -> Extras;

    fn classifies(&self) -> bool {
        self.profile().direction == Direction::HigherIsBetter
    }
}

/// Everything a simulated run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub metrics: MetricResult,
    pub series: ChartSeries,
    pub curve: PerformanceCurve,
}

/// Simulates training the algorithm described by `params`.
///
/// # Arguments
/// * `params` - The hyperparameters chosen by the user.
/// * `jitter` - Cosmetic noise for the chart series.
///
/// # Returns
/// Freshly fabricated metrics, chart series and training curve.
pub fn compute(params: &HyperparameterSet, jitter: &mut Jitter) -> Run {
    match params {
        HyperparameterSet::XgBoost(p) => simulate(p, jitter),
        HyperparameterSet::Knn(p) => simulate(p, jitter),
        HyperparameterSet::Linear(p) => simulate(p, jitter),
        HyperparameterSet::RandomForest(p) => simulate(p, jitter),
        HyperparameterSet::Svm(p) => simulate(p, jitter),
    }
}

/// The fabricated elapsed time a run with these hyperparameters reports.
pub fn elapsed_secs(params: &HyperparameterSet) -> f64 {
    strategy(params).elapsed_secs()
}

/// The profile shaping the primary metric of these hyperparameters.
pub fn profile(params: &HyperparameterSet) -> &'static MetricProfile {
    strategy(params).profile()
}

fn strategy(params: &HyperparameterSet) -> &dyn Strategy {
    match params {
        HyperparameterSet::XgBoost(p) => p,
        HyperparameterSet::Knn(p) => p,
        HyperparameterSet::Linear(p) => p,
        HyperparameterSet::RandomForest(p) => p,
        HyperparameterSet::Svm(p) => p,
    }
}

fn simulate<S: Strategy>(strategy: &S, jitter: &mut Jitter) -> Run {
    let profile = strategy.profile();
    let raw = strategy
        .terms()
        .iter()
        .fold(profile.baseline, |acc, term| acc + term.contribution(strategy));
    let primary = profile.settle(raw);

    log::debug!(
        algorithm = strategy.algorithm().id(),
        raw = raw,
        primary = primary;
        "simulated run"
    );

    let metrics = MetricResult {
        algorithm: strategy.algorithm(),
        primary: Metric {
            name: profile.primary,
            value: primary,
        },
        direction: profile.direction,
        secondary: profile.derive(primary),
        elapsed_secs: (strategy.elapsed_secs() * 100.0).round() / 100.0,
        extras: strategy.extras(primary),
    };

    let series = ChartSeries::sample(|x| strategy.shape(x), strategy.classifies(), jitter);
    let curve = PerformanceCurve::converging_on(primary, profile.direction);

    Run {
        metrics,
        series,
        curve,
    }
}

const FEATURES: [(&str, f64); 5] = [
    ("income", 0.30),
    ("age", 0.24),
    ("tenure", 0.19),
    ("balance", 0.15),
    ("activity", 0.12),
];

/// Normalized feature importances. Higher `sharpness` concentrates the
/// weight on the leading features.
fn feature_importance(sharpness: f64) -> Vec<FeatureWeight> {
    let raw: Vec<f64> = FEATURES.iter().map(|(_, w)| w.powf(sharpness)).collect();
    let total: f64 = raw.iter().sum();

    FEATURES
        .iter()
        .zip(raw)
        .map(|((feature, _), w)| FeatureWeight {
            feature: *feature,
            weight: round3(w / total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importance_is_normalized_and_ordered() {
        for sharpness in [0.8, 1.0, 2.0] {
            let features = feature_importance(sharpness);
            let total: f64 = features.iter().map(|f| f.weight).sum();
            assert!((total - 1.0).abs() < 0.01);
            for pair in features.windows(2) {
                assert!(pair[0].weight >= pair[1].weight);
            }
        }
    }

    #[test]
    fn sharper_importance_favors_the_leader() {
        let soft = feature_importance(1.0);
        let sharp = feature_importance(2.0);
        assert!(sharp[0].weight > soft[0].weight);
    }
}
