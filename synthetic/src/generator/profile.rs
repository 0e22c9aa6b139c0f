use crate::metrics::{Direction, Metric, round3};

/// How a secondary metric is derived from the primary one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Derivation {
    /// `primary - c`
    Offset(f64),
    /// `primary * k`
    Scale(f64),
    /// `1 - primary * k`
    Complement(f64),
}

impl Derivation {
    pub fn apply(self, primary: f64) -> f64 {
        match self {
            Derivation::Offset(c) => primary - c,
            Derivation::Scale(k) => primary * k,
            Derivation::Complement(k) => 1.0 - primary * k,
        }
    }
}

/// The fixed constants shaping an algorithm's headline number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricProfile {
    pub primary: &'static str,
    pub baseline: f64,
    pub direction: Direction,
    pub floor: f64,
    pub ceiling: f64,
    pub derived: &'static [(&'static str, Derivation)],
}

impl MetricProfile {
    /// Clamps a raw score into the plausible range and rounds it to the
    /// reported precision.
    pub fn settle(&self, raw: f64) -> f64 {
        round3(raw.clamp(self.floor, self.ceiling))
    }

    /// Secondary metrics for an already settled primary value.
    pub fn derive(&self, primary: f64) -> Vec<Metric> {
        self.derived
            .iter()
            .map(|(name, rule)| Metric {
                name: *name,
                value: round3(rule.apply(primary)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: MetricProfile = MetricProfile {
        primary: "accuracy",
        baseline: 0.8,
        direction: Direction::HigherIsBetter,
        floor: 0.6,
        ceiling: 0.95,
        derived: &[
            ("precision", Derivation::Offset(0.02)),
            ("error", Derivation::Complement(1.0)),
            ("half", Derivation::Scale(0.5)),
        ],
    };

    #[test]
    fn settle_clamps_and_rounds() {
        assert_eq!(PROFILE.settle(1.4), 0.95);
        assert_eq!(PROFILE.settle(0.1), 0.6);
        assert_eq!(PROFILE.settle(0.81249), 0.812);
    }

    #[test]
    fn derive_applies_each_rule() {
        let derived = PROFILE.derive(0.9);
        let values: Vec<_> = derived.iter().map(|m| (m.name, m.value)).collect();
        assert_eq!(values, vec![("precision", 0.88), ("error", 0.1), ("half", 0.45)]);
    }
}
