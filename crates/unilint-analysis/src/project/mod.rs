//! Unity project detection and script discovery.

pub mod detect;
pub mod walker;

pub use detect::{has_unity_references, is_unity_project, unity_version};
pub use walker::{collect_scripts, load_sources, SourceFile, DEFAULT_IGNORES};
