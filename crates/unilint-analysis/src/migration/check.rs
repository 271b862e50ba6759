//! Migration check over a set of source files.

use serde::Serialize;
use unilint_core::config::MigrationConfig;

use super::registry::{ApiMigration, MigrationRegistry};
use super::scanner::{scan, MigrationFinding};
use crate::project::SourceFile;
use crate::reporting::{count_by, CountEntry};

/// Target version plus optional category filter, resolved against a registry.
#[derive(Debug, Clone)]
pub struct MigrationCheck {
    registry: MigrationRegistry,
    target_version: String,
    category: Option<String>,
}

impl MigrationCheck {
    pub fn new(registry: MigrationRegistry, target_version: impl Into<String>) -> Self {
        Self {
            registry,
            target_version: target_version.into(),
            category: None,
        }
    }

    pub fn from_config(config: &MigrationConfig) -> Self {
        Self::new(MigrationRegistry::builtin(), config.target_version.clone())
            .with_category(config.category.clone())
    }

    /// Restrict to one category (case-insensitive). Blank means no filter.
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn target_version(&self) -> &str {
        &self.target_version
    }

    /// Rules that apply for the configured version and category.
    pub fn rules(&self) -> Vec<&'static ApiMigration> {
        self.registry
            .for_version(&self.target_version)
            .filter(|m| {
                self.category
                    .as_deref()
                    .map_or(true, |c| m.category.eq_ignore_ascii_case(c))
            })
            .collect()
    }

    /// Scan every `.cs` file. Other files are skipped and not counted.
    pub fn run(&self, files: &[SourceFile]) -> MigrationReport {
        let rules = self.rules();
        let mut files_checked = 0;
        let mut findings = Vec::new();

        for file in files.iter().filter(|f| f.is_csharp()) {
            files_checked += 1;
            findings.extend(scan(&file.display_path(), &file.text, &rules));
        }

        tracing::debug!(
            target_version = %self.target_version,
            rules = rules.len(),
            files = files_checked,
            findings = findings.len(),
            "migration check complete"
        );

        MigrationReport {
            target_version: self.target_version.clone(),
            migration_rules_checked: rules.len(),
            files_checked,
            total_findings: findings.len(),
            by_api: count_by(findings.iter().map(|f| f.migration.old_api)),
            by_category: count_by(findings.iter().map(|f| f.migration.category)),
            findings,
        }
    }
}

/// Result of a migration check.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub target_version: String,
    pub migration_rules_checked: usize,
    pub files_checked: usize,
    pub total_findings: usize,
    /// Findings per old API, most frequent first.
    pub by_api: Vec<CountEntry>,
    /// Findings per category, most frequent first.
    pub by_category: Vec<CountEntry>,
    pub findings: Vec<MigrationFinding>,
}

impl MigrationReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
