use serde::Serialize;

use super::{ChoiceParam, ParamSpec, ParamValue, Tunable};
use crate::algorithm::Algorithm;

const SPECS: &[ParamSpec] = &[
    ParamSpec::float("c", "Regularization (C)", 0.1, 10.0, 0.1),
    ParamSpec::choice("kernel", "Kernel", Kernel::OPTIONS),
    ParamSpec::float("gamma", "Gamma", 0.001, 1.0, 0.01),
    ParamSpec::integer("degree", "Degree (poly)", 2.0, 5.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    Linear,
    Rbf,
    Poly,
    Sigmoid,
}

impl ChoiceParam for Kernel {
    const OPTIONS: &'static [&'static str] = &["linear", "rbf", "poly", "sigmoid"];

    fn as_str(self) -> &'static str {
        match self {
            Kernel::Linear => "linear",
            Kernel::Rbf => "rbf",
            Kernel::Poly => "poly",
            Kernel::Sigmoid => "sigmoid",
        }
    }

    fn from_option(option: &str) -> Option<Self> {
        match option {
            "linear" => Some(Kernel::Linear),
            "rbf" => Some(Kernel::Rbf),
            "poly" => Some(Kernel::Poly),
            "sigmoid" => Some(Kernel::Sigmoid),
            _ => None,
        }
    }
}

/// A support vector classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SvmParams {
    pub c: f64,
    pub kernel: Kernel,
    pub gamma: f64,
    pub degree: u32,
}

impl Default for SvmParams {
    fn default() -> Self {
        Self {
            c: 1.0,
            kernel: Kernel::Rbf,
            gamma: 0.1,
            degree: 3,
        }
    }
}

impl Tunable for SvmParams {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Svm
    }

    fn specs(&self) -> &'static [ParamSpec] {
        SPECS
    }

    fn get(&self, name: &str) -> Option<ParamValue> {
        match name {
            "c" => Some(ParamValue::Number(self.c)),
            "kernel" => Some(ParamValue::Choice(self.kernel.as_str())),
            "gamma" => Some(ParamValue::Number(self.gamma)),
            "degree" => Some(ParamValue::Number(f64::from(self.degree))),
            _ => None,
        }
    }

    fn put(&mut self, name: &str, value: ParamValue) {
        match (name, value) {
            ("c", ParamValue::Number(v)) => self.c = v,
            ("kernel", ParamValue::Choice(c)) => {
                if let Some(kernel) = Kernel::from_option(c) {
                    self.kernel = kernel;
                }
            }
            ("gamma", ParamValue::Number(v)) => self.gamma = v,
            ("degree", ParamValue::Number(v)) => self.degree = v as u32,
            _ => {}
        }
    }
}
