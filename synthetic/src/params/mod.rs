mod knn;
mod linear;
mod random_forest;
mod svm;
mod xgboost;

use serde::Serialize;

use crate::{
    algorithm::Algorithm,
    error::{Result, SynthErr},
};

pub use knn::{DistanceMetric, KnnParams, Weighting};
pub use linear::{LinearParams, Regularization};
pub use random_forest::{MaxFeatures, RandomForestParams};
pub use svm::{Kernel, SvmParams};
pub use xgboost::XgBoostParams;

/// A single hyperparameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Choice(&'static str),
}

impl ParamValue {
    pub fn as_number(self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(v),
            ParamValue::Choice(_) => None,
        }
    }
}

/// What kind of control a hyperparameter is driven by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    Number {
        min: f64,
        max: f64,
        step: f64,
        integer: bool,
    },
    Choice {
        options: &'static [&'static str],
    },
}

/// Describes a hyperparameter well enough for a UI to render a slider or a
/// selector for it without knowing the algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn integer(name: &'static str, label: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Number {
                min,
                max,
                step: 1.0,
                integer: true,
            },
        }
    }

    pub const fn float(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
    ) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Number {
                min,
                max,
                step,
                integer: false,
            },
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: ParamKind::Choice { options },
        }
    }

    /// Validates a value against this spec.
    ///
    /// # Returns
    /// The value as it should be stored, or the reason it was rejected.
    pub fn check(&self, value: ParamValue) -> Result<ParamValue> {
        match (self.kind, value) {
            (
                ParamKind::Number {
                    min, max, integer, ..
                },
                ParamValue::Number(v),
            ) => {
                if !v.is_finite() || v < min || v > max {
                    return Err(SynthErr::OutOfRange {
                        name: self.name,
                        got: v,
                        min,
                        max,
                    });
                }
                if integer && v.fract() != 0.0 {
                    return Err(SynthErr::NotAnInteger {
                        name: self.name,
                        got: v,
                    });
                }
                Ok(ParamValue::Number(v))
            }
            (ParamKind::Choice { options }, ParamValue::Choice(c)) => {
                self.resolve_option(c, options)
            }
            (ParamKind::Number { .. }, ParamValue::Choice(_)) => Err(SynthErr::KindMismatch {
                name: self.name,
                expected: "numeric",
            }),
            (ParamKind::Choice { .. }, ParamValue::Number(_)) => Err(SynthErr::KindMismatch {
                name: self.name,
                expected: "choice",
            }),
        }
    }

    /// Parses and validates a raw textual value.
    pub fn parse(&self, raw: &str) -> Result<ParamValue> {
        let raw = raw.trim();
        match self.kind {
            ParamKind::Number { .. } => {
                let v = raw.parse::<f64>().map_err(|_| SynthErr::KindMismatch {
                    name: self.name,
                    expected: "numeric",
                })?;
                self.check(ParamValue::Number(v))
            }
            ParamKind::Choice { options } => self.resolve_option(raw, options),
        }
    }

    /// The lowest value this control can take; the first option for choices.
    pub fn minimum(&self) -> ParamValue {
        match self.kind {
            ParamKind::Number { min, .. } => ParamValue::Number(min),
            ParamKind::Choice { options } => ParamValue::Choice(options[0]),
        }
    }

    /// Moves `current` by `steps` slider notches, saturating at the range
    /// ends. Choices wrap around.
    pub fn nudge(&self, current: ParamValue, steps: i32) -> ParamValue {
        match (self.kind, current) {
            (
                ParamKind::Number {
                    min, max, step, ..
                },
                ParamValue::Number(v),
            ) => {
                let moved = (v + step * f64::from(steps)).clamp(min, max);
                ParamValue::Number(snap(moved))
            }
            (ParamKind::Choice { options }, ParamValue::Choice(c)) => {
                let len = options.len() as i32;
                let at = options.iter().position(|o| *o == c).unwrap_or(0) as i32;
                ParamValue::Choice(options[(at + steps).rem_euclid(len) as usize])
            }
            (_, other) => other,
        }
    }

    fn resolve_option(
        &self,
        raw: &str,
        options: &'static [&'static str],
    ) -> Result<ParamValue> {
        let wanted = raw.trim().to_ascii_lowercase().replace('-', "_");
        options
            .iter()
            .find(|o| **o == wanted)
            .map(|o| ParamValue::Choice(o))
            .ok_or_else(|| SynthErr::InvalidChoice {
                name: self.name,
                got: raw.to_string(),
                options,
            })
    }
}

/// Keeps slider arithmetic on a clean decimal grid.
fn snap(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Implemented by every per-algorithm hyperparameter struct.
pub trait Tunable {
    fn algorithm(&self) -> Algorithm;

    fn specs(&self) -> &'static [ParamSpec];

    fn get(&self, name: &str) -> Option<ParamValue>;

    /// Stores a value that was already validated against its spec.
    fn put(&mut self, name: &str, value: ParamValue);
}

/// Implemented by the enumerated hyperparameters.
pub trait ChoiceParam: Sized + Copy {
    const OPTIONS: &'static [&'static str];

    fn as_str(self) -> &'static str;

    fn from_option(option: &str) -> Option<Self>;
}

/// The hyperparameters of one algorithm, tagged by which algorithm they
/// belong to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum HyperparameterSet {
    XgBoost(XgBoostParams),
    Knn(KnnParams),
    Linear(LinearParams),
    RandomForest(RandomForestParams),
    Svm(SvmParams),
}

impl HyperparameterSet {
    /// The values a fresh session starts with.
    pub fn defaults(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::XgBoost => Self::XgBoost(XgBoostParams::default()),
            Algorithm::Knn => Self::Knn(KnnParams::default()),
            Algorithm::Linear => Self::Linear(LinearParams::default()),
            Algorithm::RandomForest => Self::RandomForest(RandomForestParams::default()),
            Algorithm::Svm => Self::Svm(SvmParams::default()),
        }
    }

    /// Every hyperparameter at its lowest setting.
    pub fn minimums(algorithm: Algorithm) -> Self {
        let mut set = Self::defaults(algorithm);
        for spec in set.specs() {
            set.tunable_mut().put(spec.name, spec.minimum());
        }
        set
    }

    pub fn algorithm(&self) -> Algorithm {
        self.tunable().algorithm()
    }

    pub fn specs(&self) -> &'static [ParamSpec] {
        self.tunable().specs()
    }

    pub fn spec(&self, name: &str) -> Result<&'static ParamSpec> {
        self.specs()
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SynthErr::UnknownParam {
                algorithm: self.algorithm().id(),
                name: name.to_string(),
            })
    }

    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.tunable().get(name)
    }

    /// Current values, in spec order.
    pub fn values(&self) -> Vec<(&'static ParamSpec, ParamValue)> {
        self.specs()
            .iter()
            .filter_map(|s| self.get(s.name).map(|v| (s, v)))
            .collect()
    }

    /// Validates and stores a value.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<()> {
        let spec = self.spec(name)?;
        let value = spec.check(value)?;
        self.tunable_mut().put(spec.name, value);
        Ok(())
    }

    /// Parses, validates and stores a textual value.
    pub fn set_str(&mut self, name: &str, raw: &str) -> Result<()> {
        let spec = self.spec(name.trim())?;
        let value = spec.parse(raw)?;
        self.tunable_mut().put(spec.name, value);
        Ok(())
    }

    /// Applies a `name=value` assignment.
    pub fn assign(&mut self, assignment: &str) -> Result<()> {
        let (name, raw) = assignment
            .split_once('=')
            .ok_or_else(|| SynthErr::MalformedAssignment(assignment.to_string()))?;
        self.set_str(name, raw)
    }

    /// Moves the `index`-th hyperparameter by `steps` slider notches.
    pub fn nudge(&mut self, index: usize, steps: i32) {
        let Some(spec) = self.specs().get(index) else {
            return;
        };
        let Some(current) = self.get(spec.name) else {
            return;
        };
        let next = spec.nudge(current, steps);
        self.tunable_mut().put(spec.name, next);
    }

    fn tunable(&self) -> &dyn Tunable {
        match self {
            Self::XgBoost(p) => p,
            Self::Knn(p) => p,
            Self::Linear(p) => p,
            Self::RandomForest(p) => p,
            Self::Svm(p) => p,
        }
    }

    fn tunable_mut(&mut self) -> &mut dyn Tunable {
        match self {
            Self::XgBoost(p) => p,
            Self::Knn(p) => p,
            Self::Linear(p) => p,
            Self::RandomForest(p) => p,
            Self::Svm(p) => p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_spec() {
        for algorithm in Algorithm::ALL {
            let set = HyperparameterSet::defaults(algorithm);
            assert_eq!(set.algorithm(), algorithm);
            for spec in set.specs() {
                let value = set.get(spec.name).unwrap();
                assert_eq!(spec.check(value), Ok(value), "{algorithm}.{}", spec.name);
            }
        }
    }

    #[test]
    fn minimums_take_lowest_settings() {
        let set = HyperparameterSet::minimums(Algorithm::XgBoost);
        assert_eq!(set.get("max_depth"), Some(ParamValue::Number(1.0)));
        assert_eq!(set.get("learning_rate"), Some(ParamValue::Number(0.01)));
        assert_eq!(set.get("n_estimators"), Some(ParamValue::Number(10.0)));

        let set = HyperparameterSet::minimums(Algorithm::Knn);
        assert_eq!(set.get("metric"), Some(ParamValue::Choice("euclidean")));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut set = HyperparameterSet::defaults(Algorithm::XgBoost);
        let err = set.set("max_depth", ParamValue::Number(11.0)).unwrap_err();
        assert!(matches!(err, SynthErr::OutOfRange { name: "max_depth", .. }));

        let err = set.set("max_depth", ParamValue::Number(2.5)).unwrap_err();
        assert!(matches!(err, SynthErr::NotAnInteger { .. }));

        assert_eq!(set.get("max_depth"), Some(ParamValue::Number(3.0)));
    }

    #[test]
    fn assignments_parse_numbers_and_choices() {
        let mut set = HyperparameterSet::defaults(Algorithm::Svm);
        set.assign("kernel=Poly").unwrap();
        set.assign("c = 2.5").unwrap();
        assert_eq!(set.get("kernel"), Some(ParamValue::Choice("poly")));
        assert_eq!(set.get("c"), Some(ParamValue::Number(2.5)));

        assert!(matches!(
            set.assign("kernel=cubic"),
            Err(SynthErr::InvalidChoice { .. })
        ));
        assert!(matches!(
            set.assign("kernel"),
            Err(SynthErr::MalformedAssignment(_))
        ));
        assert!(matches!(
            set.assign("epochs=3"),
            Err(SynthErr::UnknownParam { .. })
        ));
    }

    #[test]
    fn nudge_saturates_numbers_and_wraps_choices() {
        let mut set = HyperparameterSet::defaults(Algorithm::Knn);
        // k
        set.nudge(0, 100);
        assert_eq!(set.get("k"), Some(ParamValue::Number(20.0)));
        set.nudge(0, -100);
        assert_eq!(set.get("k"), Some(ParamValue::Number(1.0)));

        // weights: uniform -> distance -> uniform
        set.nudge(2, 1);
        assert_eq!(set.get("weights"), Some(ParamValue::Choice("distance")));
        set.nudge(2, 1);
        assert_eq!(set.get("weights"), Some(ParamValue::Choice("uniform")));
        set.nudge(2, -1);
        assert_eq!(set.get("weights"), Some(ParamValue::Choice("distance")));
    }

    #[test]
    fn nudge_keeps_decimal_grid() {
        let mut set = HyperparameterSet::defaults(Algorithm::XgBoost);
        for _ in 0..3 {
            set.nudge(1, 1);
        }
        assert_eq!(set.get("learning_rate"), Some(ParamValue::Number(0.13)));
    }
}
