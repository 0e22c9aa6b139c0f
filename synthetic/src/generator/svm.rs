use super::{Derivation, MetricProfile, Shape, Strategy, Term};
use crate::{
    metrics::{Direction, Extras, round3},
    params::{Kernel, SvmParams},
};

const PROFILE: MetricProfile = MetricProfile {
    primary: "accuracy",
    baseline: 0.86,
    direction: Direction::HigherIsBetter,
    floor: 0.6,
    ceiling: 0.96,
    derived: &[
        ("precision", Derivation::Offset(0.01)),
        ("recall", Derivation::Offset(0.02)),
        ("f1_score", Derivation::Offset(0.015)),
    ],
};

const TERMS: &[Term] = &[
    Term::new(
        "kernel",
        Shape::Choice(&[
            ("linear", 0.02),
            ("rbf", 0.04),
            ("poly", 0.03),
            ("sigmoid", 0.0),
        ]),
    ),
    Term::new(
        "c",
        Shape::Saturating {
            cap: 5.0,
            weight: 0.03,
        },
    ),
    Term::new(
        "gamma",
        Shape::Distance {
            reference: 0.1,
            weight: 0.05,
        },
    ),
    Term::new(
        "degree",
        Shape::Distance {
            reference: 3.0,
            weight: 0.005,
        },
    )
    .only_when("kernel", "poly"),
];

impl Strategy for SvmParams {
    fn profile(&self) -> &'static MetricProfile {
        &PROFILE
    }

    fn terms(&self) -> &'static [Term] {
        TERMS
    }

    fn elapsed_secs(&self) -> f64 {
        let kernel_cost = match self.kernel {
            Kernel::Linear => 0.05,
            Kernel::Rbf => 0.2,
            Kernel::Poly => 0.1 * f64::from(self.degree),
            Kernel::Sigmoid => 0.15,
        };
        self.c * 0.15 + kernel_cost
    }

    fn shape(&self, x: f64) -> f64 {
        (x * (1.0 + self.gamma)).sin() * (x / 2.0).cos()
    }

    fn extras(&self, _primary: f64) -> Extras {
        // A softer margin (small C) keeps more points on or inside it.
        let count = (30.0 + 150.0 / (1.0 + self.c) + self.gamma * 80.0).round() as u32;
        Extras::SupportVectors {
            count,
            margin: round3(2.0 / (1.0 + self.c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_margin_keeps_fewer_vectors() {
        let soft = SvmParams {
            c: 0.1,
            ..SvmParams::default()
        };
        let hard = SvmParams {
            c: 10.0,
            ..SvmParams::default()
        };
        let (Extras::SupportVectors { count: a, .. }, Extras::SupportVectors { count: b, .. }) =
            (soft.extras(0.9), hard.extras(0.9))
        else {
            panic!("svm runs report support vectors");
        };
        assert!(a > b);
    }
}
