//! Report summaries over pattern issues, migration findings and the analyzer catalog.

pub mod overview;
pub mod pattern_report;

pub use overview::{CustomPatternInfo, DiagnosticsOverview};
pub use pattern_report::{PatternReport, PatternReportOptions, RuleCount};

use serde::Serialize;
use unilint_core::FxHashMap;

/// A key and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// Occurrence counts, most frequent first, ties by name.
pub fn count_by<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<CountEntry> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry {
            name: name.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    entries
}
