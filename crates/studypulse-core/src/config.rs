//! TOML-based application configuration.
//!
//! Stores:
//! - Where the model artifacts live
//! - Feature derivation mode
//! - Burnout weights, targets and thresholds
//! - Probability display clamp
//!
//! Configuration is stored at `~/.config/studypulse/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::burnout::BurnoutConfig;
use crate::error::{ConfigError, Result};
use crate::features::FeatureConfig;

/// Returns `~/.config/studypulse[-dev]/` based on STUDYPULSE_ENV.
///
/// Set STUDYPULSE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STUDYPULSE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("studypulse-dev")
    } else {
        base_dir.join("studypulse")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}

/// Model artifact locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Directory holding the artifacts. Empty means `<data_dir>/models`.
    #[serde(default)]
    pub dir: String,
    #[serde(default = "default_performance_file")]
    pub performance_file: String,
    #[serde(default = "default_burnout_file")]
    pub burnout_file: String,
}

/// Clamp applied to the classifier's probability before display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityConfig {
    #[serde(default = "default_true")]
    pub clamp: bool,
    #[serde(default = "default_probability_min")]
    pub min: f64,
    #[serde(default = "default_probability_max")]
    pub max: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/studypulse/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub features: FeatureConfig,
    #[serde(default)]
    pub burnout: BurnoutConfig,
    #[serde(default)]
    pub probability: ProbabilityConfig,
}

fn default_performance_file() -> String {
    "performance_model.json".into()
}
fn default_burnout_file() -> String {
    "burnout_model.json".into()
}
fn default_true() -> bool {
    true
}
fn default_probability_min() -> f64 {
    0.05
}
fn default_probability_max() -> f64 {
    0.95
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            performance_file: default_performance_file(),
            burnout_file: default_burnout_file(),
        }
    }
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            clamp: true,
            min: default_probability_min(),
            max: default_probability_max(),
        }
    }
}

impl ProbabilityConfig {
    /// Apply the clamp if enabled. Reversed bounds are reordered.
    pub fn apply(&self, probability: f64) -> f64 {
        if !self.clamp {
            return probability;
        }
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        probability.max(lo).min(hi)
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| {
                                    invalid(format!("cannot parse '{value}' as number"))
                                })?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")));
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot set a whole section".to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default config file location.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Check the consistency cap, burnout settings and the probability clamp.
    pub fn validate(&self) -> Result<()> {
        self.features.validate()?;
        self.burnout.validate()?;
        let p = &self.probability;
        if !(0.0..=1.0).contains(&p.min) || !(0.0..=1.0).contains(&p.max) || p.min > p.max {
            return Err(ConfigError::InvalidValue {
                key: "probability".to_string(),
                message: format!("need 0 <= min <= max <= 1, got min={} max={}", p.min, p.max),
            }
            .into());
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. The result must still validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting configuration is invalid. `self` is unchanged on
    /// error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Resolve the model directory.
    pub fn models_dir(&self) -> Result<PathBuf, ConfigError> {
        if self.models.dir.is_empty() {
            Ok(data_dir()?.join("models"))
        } else {
            Ok(PathBuf::from(&self.models.dir))
        }
    }
}
