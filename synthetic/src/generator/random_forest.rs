use super::{Derivation, MetricProfile, Shape, Strategy, Term, feature_importance};
use crate::{
    metrics::{Direction, Extras},
    params::{MaxFeatures, RandomForestParams},
};

const PROFILE: MetricProfile = MetricProfile {
    primary: "accuracy",
    baseline: 0.84,
    direction: Direction::HigherIsBetter,
    floor: 0.6,
    ceiling: 0.97,
    derived: &[
        ("precision", Derivation::Offset(0.02)),
        ("recall", Derivation::Offset(0.015)),
        ("f1_score", Derivation::Offset(0.018)),
        ("oob_score", Derivation::Offset(0.03)),
    ],
};

const TERMS: &[Term] = &[
    Term::new(
        "n_estimators",
        Shape::Ratio {
            scale: 500.0,
            weight: 0.06,
        },
    ),
    Term::new(
        "max_depth",
        Shape::Ratio {
            scale: 20.0,
            weight: 0.04,
        },
    ),
    Term::new(
        "min_samples_split",
        Shape::Shift {
            reference: 2.0,
            weight: -0.002,
        },
    ),
    Term::new(
        "max_features",
        Shape::Choice(&[("sqrt", 0.01), ("log2", 0.005), ("all", 0.0)]),
    ),
];

impl Strategy for RandomForestParams {
    fn profile(&self) -> &'static MetricProfile {
        &PROFILE
    }

    fn terms(&self) -> &'static [Term] {
        TERMS
    }

    fn elapsed_secs(&self) -> f64 {
        f64::from(self.n_estimators) * f64::from(self.max_depth) * 0.0008
    }

    fn shape(&self, x: f64) -> f64 {
        x.sin() * (x * f64::from(self.max_depth) / 10.0).cos()
    }

    fn extras(&self, _primary: f64) -> Extras {
        // Trees that see every feature lean harder on the strongest ones.
        let base = match self.max_features {
            MaxFeatures::Sqrt => 0.9,
            MaxFeatures::Log2 => 0.8,
            MaxFeatures::All => 1.3,
        };
        Extras::FeatureImportance {
            features: feature_importance(base + f64::from(self.max_depth) / 40.0),
        }
    }
}
