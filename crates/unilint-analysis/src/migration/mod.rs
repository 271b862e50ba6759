//! Deprecated API registry and text scanner.

pub mod check;
pub mod registry;
pub mod scanner;
pub mod version;

pub use check::{MigrationCheck, MigrationReport};
pub use registry::{ApiMigration, MigrationRegistry, MIGRATIONS};
pub use scanner::{scan, search_term, LineIndex, MigrationFinding};
pub use version::UnityVersion;
