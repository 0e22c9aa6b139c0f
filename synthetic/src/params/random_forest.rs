use serde::Serialize;

use super::{ChoiceParam, ParamKind, ParamSpec, ParamValue, Tunable};
use crate::algorithm::Algorithm;

const SPECS: &[ParamSpec] = &[
    ParamSpec {
        name: "n_estimators",
        label: "Trees",
        kind: ParamKind::Number {
            min: 10.0,
            max: 500.0,
            step: 10.0,
            integer: true,
        },
    },
    ParamSpec::integer("max_depth", "Max depth", 2.0, 20.0),
    ParamSpec::integer("min_samples_split", "Min samples split", 2.0, 20.0),
    ParamSpec::choice("max_features", "Max features", MaxFeatures::OPTIONS),
];

/// How many features each split may look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    Sqrt,
    Log2,
    All,
}

impl ChoiceParam for MaxFeatures {
    const OPTIONS: &'static [&'static str] = &["sqrt", "log2", "all"];

    fn as_str(self) -> &'static str {
        match self {
            MaxFeatures::Sqrt => "sqrt",
            MaxFeatures::Log2 => "log2",
            MaxFeatures::All => "all",
        }
    }

    fn from_option(option: &str) -> Option<Self> {
        match option {
            "sqrt" => Some(MaxFeatures::Sqrt),
            "log2" => Some(MaxFeatures::Log2),
            "all" => Some(MaxFeatures::All),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RandomForestParams {
    pub n_estimators: u32,
    pub max_depth: u32,
    pub min_samples_split: u32,
    pub max_features: MaxFeatures,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: 10,
            min_samples_split: 2,
            max_features: MaxFeatures::Sqrt,
        }
    }
}

impl Tunable for RandomForestParams {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RandomForest
    }

    fn specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            "n_estimators" => Some(ParamValue::Number(f64::from(self.n_estimators))),
            "max_depth" => Some(ParamValue::Number(f64::from(self.max_depth))),
            "min_samples_split" => Some(ParamValue::Number(f64::from(self.min_samples_split))),
            "max_features" => Some(ParamValue::Choice(self.max_features.as_str())),
            _ => None,
        }
    }

    fn put(&mut self, name: &str, value: ParamValue) {
        match (name, value) {
            ("n_estimators", ParamValue::Number(v)) => self.n_estimators = v as u32,
            ("max_depth", ParamValue::Number(v)) => self.max_depth = v as u32,
            ("min_samples_split", ParamValue::Number(v)) => self.min_samples_split = v as u32,
            ("max_features", ParamValue::Choice(c)) => {
                if let Some(f) = MaxFeatures::from_option(c) {
                    self.max_features = f;
                }
            }
            _ => {}
        }
    }
}
