//! Hash collection aliases used across the workspace.

/// FxHash-backed map. Keys are short identifiers, never attacker-controlled.
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// FxHash-backed set.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
