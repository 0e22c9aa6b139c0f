use super::{Derivation, MetricProfile, Shape, Strategy, Term};
use crate::{
    metrics::{Direction, Extras, FeatureWeight, round3},
    params::{LinearParams, Regularization},
};

// The primary metric is an error, so a negative weight on a distance adds
// to it.
const PROFILE: MetricProfile = MetricProfile {
    primary: "rmse",
    baseline: 0.6,
    direction: Direction::LowerIsBetter,
    floor: 0.15,
    ceiling: 2.0,
    derived: &[
        ("mae", Derivation::Scale(0.8)),
        ("r2", Derivation::Complement(0.5)),
    ],
};

const TERMS: &[Term] = &[
    Term::new(
        "learning_rate",
        Shape::Distance {
            reference: 0.01,
            weight: -2.0,
        },
    ),
    Term::new(
        "max_iter",
        Shape::Ratio {
            scale: 2000.0,
            weight: -0.2,
        },
    ),
    Term::new(
        "regularization",
        Shape::Choice(&[
            ("none", 0.0),
            ("l1", -0.02),
            ("l2", -0.03),
            ("elastic_net", -0.04),
        ]),
    ),
    Term::new(
        "alpha",
        Shape::Ratio {
            scale: 1.0,
            weight: 0.15,
        },
    ),
];

const TRUE_WEIGHTS: [(&str, f64); 4] = [("x1", 0.8), ("x2", -0.45), ("x3", 0.3), ("x4", 0.12)];
const INTERCEPT: f64 = 1.0;

impl Strategy for LinearParams {
    fn profile(&self) -> &'static MetricProfile {
        &PROFILE
    }

    fn terms(&self) -> &'static [Term] {
        TERMS
    }

    fn elapsed_secs(&self) -> f64 {
        f64::from(self.max_iter) * 0.0005
    }

    fn shape(&self, x: f64) -> f64 {
        (1.0 - self.alpha) * 0.8 * x + INTERCEPT
    }

    fn extras(&self, _primary: f64) -> Extras {
        let weights = TRUE_WEIGHTS
            .iter()
            .map(|(feature, w)| FeatureWeight {
                feature: *feature,
                weight: round3(self.shrink(*w)),
            })
            .collect();

        Extras::Coefficients {
            weights,
            intercept: INTERCEPT,
        }
    }
}

impl LinearParams {
    /// What the penalty does to a coefficient.
    fn shrink(&self, w: f64) -> f64 {
        let lasso = |w: f64| w.signum() * (w.abs() - self.alpha * 0.2).max(0.0);
        let ridge = |w: f64| w / (1.0 + self.alpha);

        match self.regularization {
            Regularization::None => w,
            Regularization::L1 => lasso(w),
            Regularization::L2 => ridge(w),
            Regularization::ElasticNet => (lasso(w) + ridge(w)) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lasso_zeroes_small_coefficients() {
        let params = LinearParams {
            regularization: Regularization::L1,
            alpha: 1.0,
            ..LinearParams::default()
        };
        let Extras::Coefficients { weights, .. } = params.extras(0.5) else {
            panic!("linear runs report coefficients");
        };
        assert_eq!(weights[3].weight, 0.0);
        assert_eq!(weights[0].weight, 0.6);
    }

    #[test]
    fn no_penalty_keeps_weights() {
        let params = LinearParams {
            regularization: Regularization::None,
            ..LinearParams::default()
        };
        let Extras::Coefficients { weights, intercept } = params.extras(0.5) else {
            panic!("linear runs report coefficients");
        };
        assert_eq!(intercept, 1.0);
        assert_eq!(weights[1].weight, -0.45);
    }
}
