//! Discovery summary of everything the engine can report.

use serde::Serialize;

use crate::analyzers::{AnalyzerCatalog, RuleDescriptor, RuleSource};
use crate::migration::MigrationRegistry;
use crate::patterns::{PatternRuleId, PERFORMANCE_CATEGORY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomPatternInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsOverview {
    pub analyzer_diagnostics: Vec<RuleDescriptor>,
    pub analyzer_count: usize,
    pub custom_patterns: Vec<CustomPatternInfo>,
    pub migration_rules: usize,
    pub migration_categories: Vec<&'static str>,
}

impl DiagnosticsOverview {
    pub fn collect<S: RuleSource>(
        catalog: &AnalyzerCatalog<S>,
        registry: &MigrationRegistry,
    ) -> Self {
        let analyzer_diagnostics = catalog.available_diagnostics();
        Self {
            analyzer_count: analyzer_diagnostics.len(),
            analyzer_diagnostics,
            custom_patterns: PatternRuleId::all()
                .iter()
                .map(|id| CustomPatternInfo {
                    id: id.code(),
                    title: id.title(),
                    category: PERFORMANCE_CATEGORY,
                })
                .collect(),
            migration_rules: registry.len(),
            migration_categories: registry.categories().into_iter().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
