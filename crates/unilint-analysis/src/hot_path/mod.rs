//! Hot-path classification: which methods run every frame, and which types
//! are runtime-managed components.

pub mod classifier;
pub mod hierarchy;

pub use classifier::{is_hot_path, HOT_PATH_METHODS};
pub use hierarchy::{
    is_component_declaration, is_component_type, normalize_type_name, TypeHierarchy, TypeIndex,
    COMPONENT_BASE,
};
