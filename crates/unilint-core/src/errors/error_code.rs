//! Stable error codes surfaced to callers (CLI exit messages, RPC payloads).

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_NOT_FOUND: &str = "GRAMMAR_NOT_FOUND";
pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
pub const IO_ERROR: &str = "IO_ERROR";
pub const WALK_ERROR: &str = "WALK_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error value to one of the constants above.
pub trait UnilintErrorCode {
    fn error_code(&self) -> &'static str;
}
