//! Lifecycle callbacks that Unity invokes every frame or physics tick.

/// Message methods on the per-frame, per-physics-step, per-render and
/// per-collision-stay paths.
pub const HOT_PATH_METHODS: &[&str] = &[
    "Update",
    "LateUpdate",
    "FixedUpdate",
    "OnGUI",
    "OnRenderObject",
    "OnDrawGizmos",
    "OnTriggerStay",
    "OnCollisionStay",
    "OnTriggerStay2D",
    "OnCollisionStay2D",
];

/// Case-insensitive membership test against [`HOT_PATH_METHODS`].
pub fn is_hot_path(method_name: &str) -> bool {
    HOT_PATH_METHODS
        .iter()
        .any(|hot| hot.eq_ignore_ascii_case(method_name))
}
