use super::error_code::UnilintErrorCode;
use super::{ConfigError, ParseError, ProjectError};

/// Top-level error type. Subsystem errors convert into this via `From`.
#[derive(Debug, thiserror::Error)]
pub enum UnilintError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("project error: {0}")]
    Project(#[from] ProjectError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl UnilintErrorCode for UnilintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Project(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience type alias.
pub type UnilintResult<T> = Result<T, UnilintError>;
