//! Fabricates plausible looking training results for the showcase.
//!
//! Nothing here trains a model. A run maps a hyperparameter set to metrics,
//! a chart series and a training curve through fixed closed-form rules.

pub mod algorithm;
pub mod delay;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod noise;
pub mod params;
pub mod series;
mod test;

pub use algorithm::Algorithm;
pub use delay::training_delay;
pub use error::{Result, SynthErr};
pub use generator::{Run, compute};
pub use metrics::{Direction, Extras, Metric, MetricResult};
pub use noise::Jitter;
pub use params::{HyperparameterSet, ParamKind, ParamSpec, ParamValue};
pub use series::{ChartPoint, ChartSeries, CurvePoint, PerformanceCurve};
