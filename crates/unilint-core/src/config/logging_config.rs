use serde::{Deserialize, Serialize};

/// Log output settings. `UNILINT_LOG` overrides `level` when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "warn" or "unilint_analysis=debug".
    pub level: String,
    /// Include module targets in log lines.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            with_target: false,
        }
    }
}
