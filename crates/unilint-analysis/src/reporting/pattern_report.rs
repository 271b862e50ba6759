//! Filtered pattern issue report with per-category and per-rule counts.

use serde::Serialize;
use unilint_core::config::PatternConfig;

use super::{count_by, CountEntry};
use crate::patterns::{PatternIssue, PatternRuleId, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternReportOptions {
    /// Keep `Info` issues.
    pub include_info: bool,
    /// Keep only issues found in hot-path methods.
    pub hot_paths_only: bool,
}

impl Default for PatternReportOptions {
    fn default() -> Self {
        Self {
            include_info: true,
            hot_paths_only: false,
        }
    }
}

impl From<&PatternConfig> for PatternReportOptions {
    fn from(config: &PatternConfig) -> Self {
        Self {
            include_info: config.include_info,
            hot_paths_only: config.hot_paths_only,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    pub id: PatternRuleId,
    pub title: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternReport {
    /// File or project the issues came from.
    pub scope: String,
    pub total_issues: usize,
    pub by_category: Vec<CountEntry>,
    pub by_id: Vec<RuleCount>,
    pub issues: Vec<PatternIssue>,
}

impl PatternReport {
    pub fn build(
        scope: impl Into<String>,
        issues: Vec<PatternIssue>,
        options: PatternReportOptions,
    ) -> Self {
        let issues: Vec<PatternIssue> = issues
            .into_iter()
            .filter(|issue| options.include_info || issue.severity != Severity::Info)
            .filter(|issue| !options.hot_paths_only || issue.in_hot_path)
            .collect();

        let by_category = count_by(issues.iter().map(|i| i.category.as_str()));

        let mut by_id: Vec<RuleCount> = PatternRuleId::all()
            .iter()
            .map(|&id| RuleCount {
                id,
                title: id.title(),
                count: issues.iter().filter(|i| i.id == id).count(),
            })
            .filter(|entry| entry.count > 0)
            .collect();
        by_id.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));

        Self {
            scope: scope.into(),
            total_issues: issues.len(),
            by_category,
            by_id,
            issues,
        }
    }

    pub fn count_of(&self, id: PatternRuleId) -> usize {
        self.by_id
            .iter()
            .find(|entry| entry.id == id)
            .map_or(0, |entry| entry.count)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
