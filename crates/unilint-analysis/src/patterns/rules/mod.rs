//! Built-in pattern rules.

pub mod camera_main;
pub mod debug_log;
pub mod expensive_call;
pub mod string_alloc;

pub use camera_main::MainCameraRule;
pub use debug_log::DebugLogRule;
pub use expensive_call::{expensive_call_suggestion, ExpensiveCallRule, EXPENSIVE_CALLS};
pub use string_alloc::StringAllocationRule;
