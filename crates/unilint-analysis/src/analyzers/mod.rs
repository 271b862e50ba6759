//! External analyzer catalog and diagnostic category filter.

pub mod catalog;
pub mod category;

pub use catalog::{
    install_shared, shared, AnalyzerCatalog, ExternalAnalyzer, RuleDescriptor, RuleSource, SharedCatalog,
    SharedSource,
};
pub use category::{classify, is_unity_diagnostic, rule_number, RuleCategory, RULE_PREFIX};
