//! # unilint-analysis
//!
//! Analysis engine for Unity C# scripts.
//! Contains the C# parser, hot-path classifier, pattern rule engine,
//! API migration registry and scanner, external analyzer catalog,
//! project detection, and report summaries.

#![allow(clippy::module_inception)]

pub mod analyzers;
pub mod hot_path;
pub mod migration;
pub mod parsers;
pub mod patterns;
pub mod pipeline;
pub mod project;
pub mod reporting;

pub use hot_path::{is_component_type, is_hot_path, TypeHierarchy, TypeIndex};
pub use migration::{ApiMigration, MigrationFinding, MigrationRegistry, UnityVersion};
pub use parsers::{CSharpParser, ParsedScript};
pub use patterns::{PatternAnalyzer, PatternIssue, PatternRuleId, Severity};
pub use analyzers::{AnalyzerCatalog, RuleCategory, RuleSource};
pub use pipeline::{analyze_project, ProjectAnalysis};
