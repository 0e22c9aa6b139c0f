use crate::params::{ParamValue, Tunable};

/// How a single hyperparameter moves the primary metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// `v / scale * weight`
    Ratio { scale: f64, weight: f64 },
    /// `min(v, cap) / cap * weight`
    Saturating { cap: f64, weight: f64 },
    /// `-|v - reference| * weight`, a penalty for straying from an ideal value.
    Distance { reference: f64, weight: f64 },
    /// `(v - reference) * weight`
    Shift { reference: f64, weight: f64 },
    /// A flat bonus per option.
    Choice(&'static [(&'static str, f64)]),
}

/// One row of an algorithm's coefficient table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub param: &'static str,
    pub shape: Shape,
    gate: Option<(&'static str, &'static str)>,
}

impl Term {
    pub const fn new(param: &'static str, shape: Shape) -> Self {
        Self {
            param,
            shape,
            gate: None,
        }
    }

    /// Restricts the term to runs where `param` is set to `option`.
    pub const fn only_when(mut self, param: &'static str, option: &'static str) -> Self {
        self.gate = Some((param, option));
        self
    }

    /// The offset this term adds to the baseline.
    pub fn contribution<T: Tunable + ?Sized>(&self, params: &T) -> f64 {
        if let Some((param, option)) = self.gate {
            if params.get(param) != Some(ParamValue::Choice(option)) {
                return 0.0;
            }
        }

        match (self.shape, params.get(self.param)) {
            (Shape::Ratio { scale, weight }, Some(ParamValue::Number(v))) => v / scale * weight,
            (Shape::Saturating { cap, weight }, Some(ParamValue::Number(v))) => {
                v.min(cap) / cap * weight
            }
            (Shape::Distance { reference, weight }, Some(ParamValue::Number(v))) => {
                -(v - reference).abs() * weight
            }
            (Shape::Shift { reference, weight }, Some(ParamValue::Number(v))) => {
                (v - reference) * weight
            }
            (Shape::Choice(bonuses), Some(ParamValue::Choice(c))) => bonuses
                .iter()
                .find(|(option, _)| *option == c)
                .map(|(_, bonus)| *bonus)
                .unwrap_or_default(),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{SvmParams, XgBoostParams};

    #[test]
    fn numeric_shapes() {
        let params = XgBoostParams::default();

        let ratio = Term::new("max_depth", Shape::Ratio { scale: 10.0, weight: 0.08 });
        assert!((ratio.contribution(&params) - 0.024).abs() < 1e-12);

        let distance = Term::new(
            "learning_rate",
            Shape::Distance {
                reference: 0.2,
                weight: 0.1,
            },
        );
        assert!((distance.contribution(&params) + 0.01).abs() < 1e-12);

        let shift = Term::new(
            "n_estimators",
            Shape::Shift {
                reference: 50.0,
                weight: 0.001,
            },
        );
        assert!((shift.contribution(&params) - 0.05).abs() < 1e-12);

        let saturating = Term::new("n_estimators", Shape::Saturating { cap: 50.0, weight: 0.3 });
        assert!((saturating.contribution(&params) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn choice_and_gate() {
        let mut params = SvmParams::default();
        let kernel = Term::new("kernel", Shape::Choice(&[("rbf", 0.04), ("poly", 0.03)]));
        assert_eq!(kernel.contribution(&params), 0.04);

        let degree = Term::new(
            "degree",
            Shape::Distance {
                reference: 2.0,
                weight: 0.5,
            },
        )
        .only_when("kernel", "poly");
        assert_eq!(degree.contribution(&params), 0.0);

        params.kernel = crate::params::Kernel::Poly;
        assert_eq!(degree.contribution(&params), -0.5);
    }

    #[test]
    fn unknown_param_contributes_nothing() {
        let term = Term::new("missing", Shape::Ratio { scale: 1.0, weight: 1.0 });
        assert_eq!(term.contribution(&XgBoostParams::default()), 0.0);
    }
}
