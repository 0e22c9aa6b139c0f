use super::{Derivation, MetricProfile, Shape, Strategy, Term, feature_importance};
use crate::{
    metrics::{Direction, Extras},
    params::XgBoostParams,
};

const PROFILE: MetricProfile = MetricProfile {
    primary: "accuracy",
    baseline: 0.85,
    direction: Direction::HigherIsBetter,
    floor: 0.5,
    ceiling: 0.98,
    derived: &[
        ("precision", Derivation::Offset(0.02)),
        ("recall", Derivation::Offset(0.01)),
        ("f1_score", Derivation::Offset(0.015)),
    ],
};

const TERMS: &[Term] = &[
    Term::new(
        "max_depth",
        Shape::Ratio {
            scale: 10.0,
            weight: 0.08,
        },
    ),
    Term::new(
        "learning_rate",
        Shape::Distance {
            reference: 0.1,
            weight: 0.1,
        },
    ),
    Term::new(
        "n_estimators",
        Shape::Ratio {
            scale: 500.0,
            weight: 0.05,
        },
    ),
    Term::new(
        "subsample",
        Shape::Distance {
            reference: 0.8,
            weight: 0.02,
        },
    ),
];

impl Strategy for XgBoostParams {
    fn profile(&self) -> &'static MetricProfile {
        &PROFILE
    }

    fn terms(&self) -> &'static [Term] {
        TERMS
    }

    fn elapsed_secs(&self) -> f64 {
        f64::from(self.n_estimators) * f64::from(self.max_depth) * 0.002
    }

    fn shape(&self, x: f64) -> f64 {
        (x * self.learning_rate * 10.0).sin() * f64::from(self.max_depth) / 5.0
    }

    fn extras(&self, _primary: f64) -> Extras {
        Extras::FeatureImportance {
            features: feature_importance(1.0 + f64::from(self.max_depth) / 10.0),
        }
    }
}
