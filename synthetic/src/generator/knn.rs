use super::{Derivation, MetricProfile, Shape, Strategy, Term};
use crate::{
    metrics::{Direction, Extras},
    params::KnnParams,
};

const PROFILE: MetricProfile = MetricProfile {
    primary: "accuracy",
    baseline: 0.9,
    direction: Direction::HigherIsBetter,
    floor: 0.7,
    ceiling: 0.97,
    derived: &[
        ("precision", Derivation::Offset(0.015)),
        ("recall", Derivation::Offset(0.025)),
        ("f1_score", Derivation::Offset(0.02)),
    ],
};

const TERMS: &[Term] = &[
    Term::new(
        "k",
        Shape::Distance {
            reference: 7.0,
            weight: 0.005,
        },
    ),
    Term::new(
        "metric",
        Shape::Choice(&[("euclidean", 0.01), ("manhattan", 0.005), ("minkowski", 0.0)]),
    ),
    Term::new("weights", Shape::Choice(&[("uniform", 0.0), ("distance", 0.01)])),
];

const LABELS: [&str; 3] = ["setosa", "versicolor", "virginica"];
const SAMPLES_PER_CLASS: f64 = 100.0;

impl Strategy for KnnParams {
    fn profile(&self) -> &'static MetricProfile {
        &PROFILE
    }

    fn terms(&self) -> &'static [Term] {
        TERMS
    }

    fn elapsed_secs(&self) -> f64 {
        f64::from(self.k) * 0.02
    }

    fn shape(&self, x: f64) -> f64 {
        ((x - 5.0) * 3.0 / f64::from(self.k)).tanh()
    }

    fn extras(&self, primary: f64) -> Extras {
        Extras::ConfusionMatrix {
            labels: LABELS,
            cells: confusion(primary),
        }
    }
}

/// Spreads each class's misses over the two other classes.
fn confusion(accuracy: f64) -> [[u32; 3]; 3] {
    let hits = (accuracy * SAMPLES_PER_CLASS).round() as u32;
    let misses = SAMPLES_PER_CLASS as u32 - hits;

    let mut cells = [[0; 3]; 3];
    for (i, row) in cells.iter_mut().enumerate() {
        row[i] = hits;
        row[(i + 1) % 3] = misses - misses / 2;
        row[(i + 2) % 3] = misses / 2;
    }
    cells
}
