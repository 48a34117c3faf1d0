//! Config loading and validation.

use super::model::Config;
use super::CONFIG_FILE;
use crate::error::{Result, SprigError};
use std::path::Path;

impl Config {
    /// Load `sprig.yaml` from the working directory if present, otherwise
    /// return defaults.
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            SprigError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| SprigError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `slug_max_len` must be positive
    /// - `max_probe` must be at least 2 (counter starts probing at `_2`)
    pub fn validate(&self) -> Result<()> {
        if self.slug_max_len == 0 {
            return Err(SprigError::UserError(
                "config validation failed: slug_max_len must be greater than 0".to_string(),
            ));
        }

        if self.max_probe < 2 {
            return Err(SprigError::UserError(
                "config validation failed: max_probe must be at least 2".to_string(),
            ));
        }

        Ok(())
    }
}
