//! Errors from the C# program-model provider.

use std::path::PathBuf;

use super::error_code::{self, UnilintErrorCode};

/// Errors that can occur while building a syntax tree.
///
/// Syntax errors inside a script are not reported here: tree-sitter recovers
/// and the parsed script records its error node count instead.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar not available for {language}")]
    GrammarNotFound { language: String },

    #[error("Tree-sitter failed on {path}: {message}")]
    TreeSitterError { path: PathBuf, message: String },
}

impl UnilintErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarNotFound { .. } => error_code::GRAMMAR_NOT_FOUND,
            Self::TreeSitterError { .. } => error_code::PARSE_ERROR,
        }
    }
}
