//! Pattern rule engine configuration.

use serde::{Deserialize, Serialize};

/// Controls which pattern issues are reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Keep Info-severity issues in reports. Default: true.
    pub include_info: bool,
    /// Only report issues raised inside hot-path methods. Default: false.
    pub hot_paths_only: bool,
    /// Rule codes to skip entirely (e.g. "UPA0003").
    pub disabled_rules: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            include_info: true,
            hot_paths_only: false,
            disabled_rules: Vec::new(),
        }
    }
}
