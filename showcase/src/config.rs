use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use synthetic::{Algorithm, HyperparameterSet};

use crate::{
    chat::DEFAULT_MAX_UPLOAD_BYTES,
    error::{Result, ShowcaseErr},
    knowledge::KnowledgeLevel,
};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";

/// A preset value as written in JSON, a number or a choice name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PresetValue {
    Number(f64),
    Text(String),
}

impl PresetValue {
    fn as_raw(&self) -> String {
        match self {
            PresetValue::Number(v) => v.to_string(),
            PresetValue::Text(s) => s.clone(),
        }
    }
}

/// Runtime settings shared by the TUI and the CLI.
///
/// ```json
/// {
///     "seed": 42,
///     "jitter": true,
///     "delay": false,
///     "knowledge_level": "advanced",
///     "max_upload_bytes": 65536,
///     "presets": { "xgboost": { "max_depth": 6, "subsample": 0.9 } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub seed: Option<u64>,
    pub jitter: bool,
    pub delay: bool,
    pub knowledge_level: KnowledgeLevel,
    pub max_upload_bytes: u64,
    pub presets: BTreeMap<String, BTreeMap<String, PresetValue>>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            jitter: true,
            delay: true,
            knowledge_level: KnowledgeLevel::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            presets: BTreeMap::new(),
        }
    }
}

impl ShowcaseConfig {
    /// Parses and validates a config from its JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `explicit` if given, then the file named by `SHOWCASE_CONFIG`,
    /// falling back to the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Checks every preset the same way a `--set` flag is checked.
    pub fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(ShowcaseErr::Config(
                "max_upload_bytes must be positive".to_string(),
            ));
        }

        let mut seen: Vec<Algorithm> = Vec::new();
        for key in self.presets.keys() {
            let algorithm: Algorithm = key.parse()?;
            if seen.contains(&algorithm) {
                return Err(ShowcaseErr::Config(format!(
                    "duplicate preset for {}",
                    algorithm.id()
                )));
            }
            seen.push(algorithm);
            self.params_for(algorithm)?;
        }
        Ok(())
    }

    /// The starting hyperparameters of `algorithm`: its defaults with the
    /// configured preset applied on top.
    pub fn params_for(&self, algorithm: Algorithm) -> Result<HyperparameterSet> {
        let mut params = HyperparameterSet::defaults(algorithm);
        let Some(preset) = self.preset(algorithm)? else {
            return Ok(params);
        };

        for (name, value) in preset {
            params.set_str(name, &value.as_raw())?;
        }
        Ok(params)
    }

    fn preset(&self, algorithm: Algorithm) -> Result<Option<&BTreeMap<String, PresetValue>>> {
        for (key, preset) in &self.presets {
            if key.parse::<Algorithm>()? == algorithm {
                return Ok(Some(preset));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthetic::ParamValue;

    #[test]
    fn empty_object_gives_defaults() {
        let config = ShowcaseConfig::from_json("{}").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert!(config.jitter);
        assert!(config.delay);
        assert_eq!(config.max_upload_bytes, 1024 * 1024);
    }

    #[test]
    fn presets_override_defaults() {
        let config = ShowcaseConfig::from_json(
            r#"{ "presets": { "xgb": { "max_depth": 6 }, "svm": { "kernel": "poly" } } }"#,
        )
        .unwrap();

        let xgb = config.params_for(Algorithm::XgBoost).unwrap();
        assert_eq!(xgb.get("max_depth"), Some(ParamValue::Number(6.0)));
        assert_eq!(xgb.get("subsample"), Some(ParamValue::Number(0.8)));

        let svm = config.params_for(Algorithm::Svm).unwrap();
        assert_eq!(svm.get("kernel"), Some(ParamValue::Choice("poly")));

        let knn = config.params_for(Algorithm::Knn).unwrap();
        assert_eq!(knn, HyperparameterSet::defaults(Algorithm::Knn));
    }

    #[test]
    fn invalid_presets_are_rejected() {
        for json in [
            r#"{ "presets": { "xgboost": { "max_depth": 99 } } }"#,
            r#"{ "presets": { "xgboost": { "depth": 3 } } }"#,
            r#"{ "presets": { "svm": { "kernel": "cubic" } } }"#,
            r#"{ "presets": { "perceptron": {} } }"#,
        ] {
            assert!(
                matches!(ShowcaseConfig::from_json(json), Err(ShowcaseErr::Synth(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn aliased_presets_for_one_algorithm_are_rejected() {
        for json in [
            r#"{ "presets": { "xgb": { "max_depth": 6 }, "xgboost": { "max_depth": 2 } } }"#,
            r#"{ "presets": { "rf": {}, "random-forest": { "max_depth": 4 } } }"#,
        ] {
            match ShowcaseConfig::from_json(json) {
                Err(ShowcaseErr::Config(msg)) => {
                    assert!(msg.contains("duplicate preset"), "{msg}")
                }
                other => panic!("expected a duplicate preset error, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            ShowcaseConfig::from_json(r#"{ "jitter": "yes" }"#),
            Err(ShowcaseErr::Config(_))
        ));
        assert!(matches!(
            ShowcaseConfig::from_json(r#"{ "colour": "blue" }"#),
            Err(ShowcaseErr::Config(_))
        ));
        assert!(matches!(
            ShowcaseConfig::from_json(r#"{ "max_upload_bytes": 0 }"#),
            Err(ShowcaseErr::Config(_))
        ));
    }
}
