pub mod logging_config;
pub mod migration_config;
pub mod pattern_config;
pub mod scan_config;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use logging_config::LoggingConfig;
pub use migration_config::MigrationConfig;
pub use pattern_config::PatternConfig;
pub use scan_config::ScanConfig;

/// Top-level configuration aggregating all subsystem configs.
///
/// Typically read from `unilint.toml`; every section and field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnilintConfig {
    pub patterns: PatternConfig,
    pub migration: MigrationConfig,
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

impl UnilintConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        ::tracing::debug!(
            target_version = %config.migration.target_version,
            disabled_rules = config.patterns.disabled_rules.len(),
            "config loaded"
        );
        Ok(config)
    }

    /// Reject values that would make every query degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.migration.target_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "migration.target_version".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.scan.max_file_size == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
