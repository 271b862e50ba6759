//! Pattern rule engine: anti-pattern detection inside component methods.

pub mod analyzer;
pub mod registry;
pub mod rules;
pub mod traits;
pub mod types;

pub use analyzer::PatternAnalyzer;
pub use registry::PatternRuleSet;
pub use traits::{MethodContext, PatternRule};
pub use types::{PatternIssue, PatternRuleId, Severity, PERFORMANCE_CATEGORY};
