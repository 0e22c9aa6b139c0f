use serde::Serialize;

use crate::{metrics::Direction, noise::Jitter};

/// Number of points in every chart series.
pub const SERIES_LEN: usize = 50;
/// Distance between consecutive x values, the series spans `[0, 10)`.
pub const X_STEP: f64 = 10.0 / SERIES_LEN as f64;
/// Number of points in every performance curve.
pub const CURVE_LEN: usize = 7;

/// A single synthetic observation plotted next to the model's prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub predicted: f64,
    pub class: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Samples `shape` over the fixed x range.
    ///
    /// # Arguments
    /// * `shape` - The clean prediction `f(x)`.
    /// * `classify` - Whether points get a class label from the sign of `f(x)`.
    /// * `jitter` - Cosmetic noise added to the observed `y`.
    pub fn sample<F>(shape: F, classify: bool, jitter: &mut Jitter) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let points = (0..SERIES_LEN)
            .map(|i| {
                let x = i as f64 * X_STEP;
                let predicted = shape(x);
                let class = u8::from(classify && predicted >= 0.0);
                ChartPoint {
                    x,
                    y: predicted + jitter.sample(),
                    predicted,
                    class,
                }
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(x, y)` pairs of the points labelled `class`, ready to be handed to a
    /// plotting widget. Regression series only have class 0.
    pub fn observed(&self, class: u8) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|p| p.class == class)
            .map(|p| (p.x, p.y))
            .collect()
    }

    /// `(x, predicted)` pairs.
    pub fn predicted(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.predicted)).collect()
    }

    /// The smallest and largest value across observations and predictions.
    pub fn y_bounds(&self) -> (f64, f64) {
        self.points
            .iter()
            .flat_map(|p| [p.y, p.predicted])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub epoch: u32,
    pub accuracy: f64,
    pub loss: f64,
}

/// A fake training curve that converges on the run's primary metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceCurve {
    pub points: Vec<CurvePoint>,
}

impl PerformanceCurve {
    /// Eases from a starting value towards `target`.
    ///
    /// Higher-is-better metrics start at 0.5, lower-is-better ones one unit
    /// above the target. The last point lands on `target` exactly.
    pub fn converging_on(target: f64, direction: Direction) -> Self {
        let start = match direction {
            Direction::HigherIsBetter => 0.5_f64.min(target),
            Direction::LowerIsBetter => target + 1.0,
        };
        let last = (CURVE_LEN - 1) as f64;

        let points = (0..CURVE_LEN)
            .map(|i| {
                let remaining = 1.0 - i as f64 / last;
                let accuracy = target - (target - start) * remaining * remaining;
                let loss = match direction {
                    Direction::HigherIsBetter => 1.0 - accuracy,
                    Direction::LowerIsBetter => accuracy * accuracy,
                };
                CurvePoint {
                    epoch: i as u32 + 1,
                    accuracy,
                    loss,
                }
            })
            .collect();

        Self { points }
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_spans_zero_to_ten() {
        let series = ChartSeries::sample(|x| x, false, &mut Jitter::none());
        assert_eq!(series.len(), SERIES_LEN);
        assert_eq!(series.points[0].x, 0.0);
        assert!(series.points.last().unwrap().x < 10.0);
        for pair in series.points.windows(2) {
            assert!((pair[1].x - pair[0].x - X_STEP).abs() < 1e-9);
        }
    }

    #[test]
    fn classes_follow_the_prediction_sign() {
        let series = ChartSeries::sample(|x| x - 5.0, true, &mut Jitter::none());
        assert!(series.points.iter().all(|p| p.class == u8::from(p.x >= 5.0 - 1e-9)));

        let regression = ChartSeries::sample(|x| x - 5.0, false, &mut Jitter::none());
        assert!(regression.points.iter().all(|p| p.class == 0));
        assert_eq!(regression.observed(0).len(), SERIES_LEN);
        assert!(regression.observed(1).is_empty());
    }

    #[test]
    fn observed_splits_points_by_class() {
        let series = ChartSeries::sample(|x| x - 5.0, true, &mut Jitter::none());
        let below = series.observed(0);
        let above = series.observed(1);
        assert_eq!(below.len() + above.len(), SERIES_LEN);
        assert!(below.iter().all(|(x, y)| *x < 5.0 && *y < 0.0));
        assert!(above.iter().all(|(_, y)| *y >= 0.0));
    }

    #[test]
    fn curve_rises_to_target() {
        let curve = PerformanceCurve::converging_on(0.912, Direction::HigherIsBetter);
        assert_eq!(curve.points.len(), CURVE_LEN);
        assert!((curve.points[0].accuracy - 0.5).abs() < 1e-12);
        assert_eq!(curve.last().unwrap().accuracy, 0.912);
        for pair in curve.points.windows(2) {
            assert!(pair[1].accuracy >= pair[0].accuracy);
            assert!(pair[1].loss <= pair[0].loss);
        }
    }

    #[test]
    fn curve_falls_to_error_target() {
        let curve = PerformanceCurve::converging_on(0.42, Direction::LowerIsBetter);
        assert_eq!(curve.last().unwrap().accuracy, 0.42);
        for pair in curve.points.windows(2) {
            assert!(pair[1].accuracy <= pair[0].accuracy);
        }
    }
}
