use serde::Serialize;

use super::{ChoiceParam, ParamKind, ParamSpec, ParamValue, Tunable};
use crate::algorithm::Algorithm;

const SPECS: &[ParamSpec] = &[
    ParamSpec::float("learning_rate", "Learning rate", 0.001, 0.1, 0.001),
    ParamSpec {
        name: "max_iter",
        label: "Max iterations",
        kind: ParamKind::Number {
            min: 100.0,
            max: 2000.0,
            step: 100.0,
            integer: true,
        },
    },
    ParamSpec::choice("regularization", "Regularization", Regularization::OPTIONS),
    ParamSpec::float("alpha", "Alpha", 0.0, 1.0, 0.05),
];

/// Penalty applied to the linear coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Regularization {
    None,
    L1,
    L2,
    ElasticNet,
}

impl ChoiceParam for Regularization {
    const OPTIONS: &'static [&'static str] = &["none", "l1", "l2", "elastic_net"];

    fn as_str(self) -> &'static str {
        match self {
            Regularization::None => "none",
            Regularization::L1 => "l1",
            Regularization::L2 => "l2",
            Regularization::ElasticNet => "elastic_net",
        }
    }

    fn from_option(option: &str) -> Option<Self> {
        match option {
            "none" => Some(Regularization::None),
            "l1" => Some(Regularization::L1),
            "l2" => Some(Regularization::L2),
            "elastic_net" => Some(Regularization::ElasticNet),
            _ => None,
        }
    }
}

/// A linear regressor fit with gradient descent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearParams {
    pub learning_rate: f64,
    pub max_iter: u32,
    pub regularization: Regularization,
    pub alpha: f64,
}

impl Default for LinearParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            max_iter: 1000,
            regularization: Regularization::L2,
            alpha: 0.1,
        }
    }
}

impl Tunable for LinearParams {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Linear
    }

    fn specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            "learning_rate" => Some(ParamValue::Number(self.learning_rate)),
            "max_iter" => Some(ParamValue::Number(f64::from(self.max_iter))),
            "regularization" => Some(ParamValue::Choice(self.regularization.as_str())),
            "alpha" => Some(ParamValue::Number(self.alpha)),
            _ => None,
        }
    }

    fn put(&mut self, name: &str, value: ParamValue) {
        match (name, value) {
            ("learning_rate", ParamValue::Number(v)) => self.learning_rate = v,
            ("max_iter", ParamValue::Number(v)) => self.max_iter = v as u32,
            ("regularization", ParamValue::Choice(c)) => {
                if let Some(r) = Regularization::from_option(c) {
                    self.regularization = r;
                }
            }
            ("alpha", ParamValue::Number(v)) => self.alpha = v,
            _ => {}
        }
    }
}
