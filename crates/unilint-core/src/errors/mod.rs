//! Error taxonomy for unilint.
//!
//! The analysis algorithms themselves never fail: malformed versions degrade to
//! `0.0.0`, unresolved types are treated as non-components, and an empty model
//! produces an empty result. Errors only come from the edges: parsing, config
//! loading, and project file discovery.

pub mod config_error;
pub mod error_code;
pub mod parse_error;
pub mod project_error;
mod unilint_error;

pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use project_error::ProjectError;
pub use unilint_error::{UnilintError, UnilintResult};
