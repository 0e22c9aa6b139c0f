use serde::Serialize;

use crate::algorithm::Algorithm;

/// Whether a bigger number is a better number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// A named metric value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metric {
    pub name: &'static str,
    pub value: f64,
}

/// The weight a simulated model gives to a single input feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureWeight {
    pub feature: &'static str,
    pub weight: f64,
}

/// Algorithm specific details attached to a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Extras {
    FeatureImportance {
        features: Vec<FeatureWeight>,
    },
    ConfusionMatrix {
        labels: [&'static str; 3],
        cells: [[u32; 3]; 3],
    },
    Coefficients {
        weights: Vec<FeatureWeight>,
        intercept: f64,
    },
    SupportVectors {
        count: u32,
        margin: f64,
    },
}

/// Everything a simulated run reports about the fabricated model.
///
/// A new `MetricResult` is built for every run, it never gets merged with a
/// previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricResult {
    pub algorithm: Algorithm,
    pub primary: Metric,
    pub direction: Direction,
    pub secondary: Vec<Metric>,
    pub elapsed_secs: f64,
    pub extras: Extras,
}

impl MetricResult {
    /// Looks a metric up by name, the primary one included.
    pub fn metric(&self, name: &str) -> Option<f64> {
        std::iter::once(&self.primary)
            .chain(&self.secondary)
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}

/// Rounds to three decimals, the precision every metric is reported with.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
