//! Error code mapping tests.

use std::path::PathBuf;

use unilint_core::errors::{ParseError, ProjectError};
use unilint_core::{UnilintError, UnilintErrorCode};

#[test]
fn parse_errors_map_to_codes() {
    let grammar = ParseError::GrammarNotFound { language: "csharp".to_string() };
    assert_eq!(grammar.error_code(), "GRAMMAR_NOT_FOUND");

    let ts = ParseError::TreeSitterError {
        path: PathBuf::from("Player.cs"),
        message: "tree-sitter returned None".to_string(),
    };
    assert_eq!(ts.error_code(), "PARSE_ERROR");
    assert!(ts.to_string().contains("Player.cs"));
}

#[test]
fn umbrella_error_forwards_codes() {
    let err: UnilintError = ProjectError::NotFound { path: PathBuf::from("Missing") }.into();
    assert_eq!(err.error_code(), "FILE_NOT_FOUND");

    let io = ProjectError::Io {
        path: PathBuf::from("Assets"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let err: UnilintError = io.into();
    assert_eq!(err.error_code(), "IO_ERROR");
}

#[test]
fn tracing_init_is_idempotent() {
    let config = unilint_core::config::LoggingConfig::default();
    let _first = unilint_core::tracing::init(&config);
    assert!(!unilint_core::tracing::init(&config));
}
