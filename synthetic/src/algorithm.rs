use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SynthErr;

/// The algorithms the showcase can simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    XgBoost,
    Knn,
    Linear,
    RandomForest,
    Svm,
}

impl Algorithm {
    /// Every algorithm, in tab order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::XgBoost,
        Algorithm::Knn,
        Algorithm::Linear,
        Algorithm::RandomForest,
        Algorithm::Svm,
    ];

    /// The stable identifier used on the command line and in config files.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::XgBoost => "xgboost",
            Algorithm::Knn => "knn",
            Algorithm::Linear => "linear",
            Algorithm::RandomForest => "random_forest",
            Algorithm::Svm => "svm",
        }
    }

    /// Human readable name.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::XgBoost => "XGBoost",
            Algorithm::Knn => "K-Nearest Neighbors",
            Algorithm::Linear => "Linear Regression",
            Algorithm::RandomForest => "Random Forest",
            Algorithm::Svm => "Support Vector Machine",
        }
    }

    /// Position of this algorithm inside [`Algorithm::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|a| *a == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = SynthErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "xgboost" | "xgb" => Ok(Algorithm::XgBoost),
            "knn" => Ok(Algorithm::Knn),
            "linear" => Ok(Algorithm::Linear),
            "random_forest" | "rf" => Ok(Algorithm::RandomForest),
            "svm" => Ok(Algorithm::Svm),
            _ => Err(SynthErr::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_parse_back() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.id().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn aliases_and_dashes() {
        assert_eq!("Random-Forest".parse(), Ok(Algorithm::RandomForest));
        assert_eq!("xgb".parse(), Ok(Algorithm::XgBoost));
        assert!("perceptron".parse::<Algorithm>().is_err());
    }

    #[test]
    fn index_matches_tab_order() {
        for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(algorithm.index(), i);
        }
    }
}
