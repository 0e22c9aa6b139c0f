use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire synthetic module.
pub type Result<T> = std::result::Result<T, SynthErr>;

/// The synthetic module's error type.
///
/// The generator itself never fails, these only come up when building a
/// hyperparameter set out of untrusted input (config files, command lines).
#[derive(Debug, Clone, PartialEq)]
pub enum SynthErr {
    UnknownAlgorithm(String),
    UnknownParam {
        algorithm: &'static str,
        name: String,
    },
    OutOfRange {
        name: &'static str,
        got: f64,
        min: f64,
        max: f64,
    },
    NotAnInteger {
        name: &'static str,
        got: f64,
    },
    InvalidChoice {
        name: &'static str,
        got: String,
        options: &'static [&'static str],
    },
    KindMismatch {
        name: &'static str,
        expected: &'static str,
    },
    MalformedAssignment(String),
}

impl Display for SynthErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthErr::UnknownAlgorithm(name) => write!(
                f,
                "unknown algorithm '{name}', expected one of \
                 xgboost, knn, linear, random_forest, svm"
            ),
            SynthErr::UnknownParam { algorithm, name } => {
                write!(f, "{algorithm} has no hyperparameter named '{name}'")
            }
            SynthErr::OutOfRange {
                name,
                got,
                min,
                max,
            } => write!(f, "{name} must be within [{min}, {max}], got {got}"),
            SynthErr::NotAnInteger { name, got } => {
                write!(f, "{name} must be a whole number, got {got}")
            }
            SynthErr::InvalidChoice { name, got, options } => write!(
                f,
                "'{got}' is not a valid {name}, expected one of {}",
                options.join(", ")
            ),
            SynthErr::KindMismatch { name, expected } => {
                write!(f, "{name} expects a {expected} value")
            }
            SynthErr::MalformedAssignment(raw) => {
                write!(f, "expected name=value, got '{raw}'")
            }
        }
    }
}

impl Error for SynthErr {}
