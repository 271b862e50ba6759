//! # unilint-core
//!
//! Foundation crate for the unilint Unity script analyzer.
//! Defines config, errors, error codes, tracing setup, and shared collection types.
//! The analysis crate depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::UnilintConfig;
pub use errors::error_code::UnilintErrorCode;
pub use errors::{UnilintError, UnilintResult};
pub use types::collections::{FxHashMap, FxHashSet};
