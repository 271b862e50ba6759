//! Project discovery errors.

use std::path::PathBuf;

use super::error_code::{self, UnilintErrorCode};

/// Errors raised while locating and reading script files.
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {message}")]
    Walk { message: String },
}

impl UnilintErrorCode for ProjectError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::FILE_NOT_FOUND,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Walk { .. } => error_code::WALK_ERROR,
        }
    }
}
