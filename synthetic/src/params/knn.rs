use serde::Serialize;

use super::{ChoiceParam, ParamSpec, ParamValue, Tunable};
use crate::algorithm::Algorithm;

const SPECS: &[ParamSpec] = &[
    ParamSpec::integer("k", "Neighbors (k)", 1.0, 20.0),
    ParamSpec::choice("metric", "Distance metric", DistanceMetric::OPTIONS),
    ParamSpec::choice("weights", "Weights", Weighting::OPTIONS),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    Euclidean,
    Manhattan,
    Minkowski,
}

impl ChoiceParam for DistanceMetric {
    const OPTIONS: &'static [&'static str] = &["euclidean", "manhattan", "minkowski"];

    fn as_str(self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Manhattan => "manhattan",
            DistanceMetric::Minkowski => "minkowski",
        }
    }

    fn from_option(option: &str) -> Option<Self> {
        match option {
            "euclidean" => Some(DistanceMetric::Euclidean),
            "manhattan" => Some(DistanceMetric::Manhattan),
            "minkowski" => Some(DistanceMetric::Minkowski),
            _ => None,
        }
    }
}

/// How neighbor votes are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    Uniform,
    Distance,
}

impl ChoiceParam for Weighting {
    const OPTIONS: &'static [&'static str] = &["uniform", "distance"];

    fn as_str(self) -> &'static str {
        match self {
            Weighting::Uniform => "uniform",
            Weighting::Distance => "distance",
        }
    }

    fn from_option(option: &str) -> Option<Self> {
        match option {
            "uniform" => Some(Weighting::Uniform),
            "distance" => Some(Weighting::Distance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnnParams {
    pub k: u32,
    pub metric: DistanceMetric,
    pub weights: Weighting,
}

impl Default for KnnParams {
    fn default() -> Self {
        Self {
            k: 5,
            metric: DistanceMetric::Euclidean,
            weights: Weighting::Uniform,
        }
    }
}

impl Tunable for KnnParams {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Knn
    }

    fn specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            "k" => Some(ParamValue::Number(f64::from(self.k))),
            "metric" => Some(ParamValue::Choice(self.metric.as_str())),
            "weights" => Some(ParamValue::Choice(self.weights.as_str())),
            _ => None,
        }
    }

    fn put(&mut self, name: &str, value: ParamValue) {
        match (name, value) {
            ("k", ParamValue::Number(v)) => self.k = v as u32,
            ("metric", ParamValue::Choice(c)) => {
                if let Some(metric) = DistanceMetric::from_option(c) {
                    self.metric = metric;
                }
            }
            ("weights", ParamValue::Choice(c)) => {
                if let Some(weights) = Weighting::from_option(c) {
                    self.weights = weights;
                }
            }
            _ => {}
        }
    }
}
