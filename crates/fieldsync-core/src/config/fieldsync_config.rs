//! Top-level fieldsync configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ImportConfig, MatchingConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Environment variable overriding `import.crop_code_prefix`.
pub const ENV_CROP_CODE_PREFIX: &str = "FIELDSYNC_CROP_CODE_PREFIX";
/// Environment variable overriding `observability.log_level`.
pub const ENV_LOG_LEVEL: &str = "FIELDSYNC_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FIELDSYNC_*`)
/// 2. Config file passed to [`FieldSyncConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FieldSyncConfig {
    pub matching: MatchingConfig,
    pub import: ImportConfig,
    pub observability: ObservabilityConfig,
}

impl FieldSyncConfig {
    /// Load configuration from an optional TOML file, then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate(&config)?;

        tracing::debug!(
            crop_code_prefix = %config.import.crop_code_prefix,
            spatial_match_threshold = config.matching.spatial_match_threshold,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from a key lookup. Empty values are ignored.
    pub fn apply_overrides<F>(config: &mut FieldSyncConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(prefix) = non_empty(ENV_CROP_CODE_PREFIX) {
            config.import.crop_code_prefix = prefix.trim().to_string();
        }
        if let Some(level) = non_empty(ENV_LOG_LEVEL) {
            config.observability.log_level = level.trim().to_string();
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &FieldSyncConfig) -> Result<(), ConfigError> {
        let thresholds = [
            (
                "matching.spatial_match_threshold",
                config.matching.spatial_match_threshold,
            ),
            (
                "matching.geometry_diff_threshold",
                config.matching.geometry_diff_threshold,
            ),
        ];
        for (field, value) in thresholds {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if config.import.crop_code_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "import.crop_code_prefix".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if config.import.acquiring_method.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "import.acquiring_method".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
