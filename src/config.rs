use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "thenlint.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration, normally loaded from `thenlint.toml`.
/// Unknown keys are rejected everywhere; the accepted shape is the whole
/// schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThenlintConfig {
    #[serde(default)]
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(default, rename = "no-callback-in-promise")]
    pub no_callback_in_promise: NoCallbackInPromiseConfig,

    #[serde(default, rename = "prefer-await-to-then")]
    pub prefer_await_to_then: PreferAwaitToThenConfig,
}

/// Options for no-callback-in-promise. `exceptions` holds callee/property
/// names exempted from callback classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoCallbackInPromiseConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub exceptions: HashSet<String>,
}

impl Default for NoCallbackInPromiseConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            exceptions: HashSet::new(),
        }
    }
}

/// prefer-await-to-then takes no options beyond enablement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferAwaitToThenConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Default for PreferAwaitToThenConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl ThenlintConfig {
    /// Load from an explicit path, or from `thenlint.toml` in the current
    /// directory when present, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Fold CLI-supplied exception names into the rule 1 options.
    pub fn with_extra_exceptions<I: IntoIterator<Item = String>>(mut self, names: I) -> Self {
        self.rules.no_callback_in_promise.exceptions.extend(names);
        self
    }

    /// Template written by `thenlint init`.
    pub fn default_toml() -> String {
        let defaults = Self::default();
        toml::to_string_pretty(&defaults).unwrap_or_default()
    }
}
