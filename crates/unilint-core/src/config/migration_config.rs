//! API migration check configuration.

use serde::{Deserialize, Serialize};

/// Default Unity version migrations are checked against.
pub const DEFAULT_TARGET_VERSION: &str = "6000.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationConfig {
    /// Unity editor version to check against (e.g. "6000.0", "2022.3.1f1").
    pub target_version: String,
    /// Restrict the check to one migration category (case-insensitive).
    pub category: Option<String>,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            target_version: DEFAULT_TARGET_VERSION.to_string(),
            category: None,
        }
    }
}
