use serde::Serialize;

use super::{ParamKind, ParamSpec, ParamValue, Tunable};
use crate::algorithm::Algorithm;

const SPECS: &[ParamSpec] = &[
    ParamSpec::integer("max_depth", "Max depth", 1.0, 10.0),
    ParamSpec::float("learning_rate", "Learning rate", 0.01, 0.3, 0.01),
    ParamSpec {
        name: "n_estimators",
        label: "Estimators",
        kind: ParamKind::Number {
            min: 10.0,
            max: 500.0,
            step: 10.0,
            integer: true,
        },
    },
    ParamSpec::float("subsample", "Subsample", 0.5, 1.0, 0.05),
];

/// Gradient boosted trees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XgBoostParams {
    pub max_depth: u32,
    pub learning_rate: f64,
    pub n_estimators: u32,
    pub subsample: f64,
}

impl Default for XgBoostParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            learning_rate: 0.1,
            n_estimators: 100,
            subsample: 0.8,
        }
    }
}

impl Tunable for XgBoostParams {
    fn algorithm(&self) -> Algorithm {
        Algorithm::XgBoost
    }

    fn specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        let v = match name {
            "max_depth" => f64::from(self.max_depth),
            "learning_rate" => self.learning_rate,
            "n_estimators" => f64::from(self.n_estimators),
            "subsample" => self.subsample,
            _ => return None,
        };
        Some(ParamValue::Number(v))
    }

    fn put(&mut self, name: &str, value: ParamValue) {
        let Some(v) = value.as_number() else {
            return;
        };
        match name {
            "max_depth" => self.max_depth = v as u32,
            "learning_rate" => self.learning_rate = v,
            "n_estimators" => self.n_estimators = v as u32,
            "subsample" => self.subsample = v,
            _ => {}
        }
    }
}
