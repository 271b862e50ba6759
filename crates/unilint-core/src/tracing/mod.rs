//! Tracing subscriber setup.

mod setup;

pub use setup::{init, ENV_VAR};
