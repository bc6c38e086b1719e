//! Render configuration for pvault.
//!
//! This module defines the tunables of the payload builder: the proximity
//! window used by the isolated-placeholder check and the character limit
//! that triggers the payload duplication guard. Both are deliberate policy
//! knobs rather than hardcoded constants so they can be tested independently
//! and overridden per invocation via a YAML config file.
//!
//! Unknown fields in the YAML are silently ignored for forward compatibility.

use crate::error::{Result, VaultError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of characters inspected on each side of a placeholder
/// when deciding whether it is isolated.
pub const DEFAULT_PROXIMITY_WINDOW: usize = 10;

/// Default payload character limit beyond which the duplication guard fires.
pub const DEFAULT_CHAR_LIMIT: usize = 50_000;

// Default value functions for serde
fn default_proximity_window() -> usize {
    DEFAULT_PROXIMITY_WINDOW
}
fn default_char_limit() -> usize {
    DEFAULT_CHAR_LIMIT
}

/// Tunables for payload building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Characters scanned immediately before and after a placeholder when
    /// deciding whether it sits isolated (whitespace-only neighborhood).
    #[serde(default = "default_proximity_window")]
    pub proximity_window: usize,

    /// Payload character count above which the result is duplicated
    /// (`result + " " + result`).
    #[serde(default = "default_char_limit")]
    pub char_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            proximity_window: DEFAULT_PROXIMITY_WINDOW,
            char_limit: DEFAULT_CHAR_LIMIT,
        }
    }
}

impl RenderConfig {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(RenderConfig)` - Successfully loaded and validated config
    /// * `Err(VaultError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            VaultError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RenderConfig = serde_yaml::from_str(yaml)
            .map_err(|e| VaultError::ParseError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| VaultError::ParseError(format!("failed to serialize config: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `char_limit` must be positive (a zero limit would duplicate every
    ///   non-empty payload)
    ///
    /// A zero `proximity_window` is allowed: the scanned windows are empty,
    /// so every resolved placeholder counts as isolated.
    pub fn validate(&self) -> Result<()> {
        if self.char_limit == 0 {
            return Err(VaultError::ParseError(
                "config validation failed: char_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let config = RenderConfig::default();
        assert_eq!(config.proximity_window, 10);
        assert_eq!(config.char_limit, 50_000);
    }

    #[test]
    fn from_yaml_full() {
        let config = RenderConfig::from_yaml("proximity_window: 4\nchar_limit: 100\n").unwrap();
        assert_eq!(config.proximity_window, 4);
        assert_eq!(config.char_limit, 100);
    }

    #[test]
    fn from_yaml_applies_defaults_for_missing_fields() {
        let config = RenderConfig::from_yaml("char_limit: 999\n").unwrap();
        assert_eq!(config.proximity_window, DEFAULT_PROXIMITY_WINDOW);
        assert_eq!(config.char_limit, 999);
    }

    #[test]
    fn from_yaml_rejects_zero_char_limit() {
        let result = RenderConfig::from_yaml("char_limit: 0\n");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, VaultError::ParseError(_)));
        assert!(err.to_string().contains("char_limit"));
    }

    #[test]
    fn from_yaml_allows_zero_proximity_window() {
        let config = RenderConfig::from_yaml("proximity_window: 0\n").unwrap();
        assert_eq!(config.proximity_window, 0);
    }

    #[test]
    fn from_yaml_rejects_garbage() {
        let result = RenderConfig::from_yaml(": not yaml : [");
        assert!(result.is_err());
    }

    #[test]
    fn yaml_round_trip() {
        let config = RenderConfig {
            proximity_window: 7,
            char_limit: 1234,
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = RenderConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "proximity_window: 3").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.proximity_window, 3);
        assert_eq!(config.char_limit, DEFAULT_CHAR_LIMIT);
    }

    #[test]
    fn load_missing_file_is_user_error() {
        let result = RenderConfig::load("/nonexistent/pvault-config.yaml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), VaultError::UserError(_)));
    }
}
