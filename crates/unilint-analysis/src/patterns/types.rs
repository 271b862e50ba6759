//! Pattern issue types: the output of the rule engine.

use serde::{Deserialize, Serialize};

/// Category every built-in pattern issue is filed under.
pub const PERFORMANCE_CATEGORY: &str = "Performance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The 4 built-in pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PatternRuleId {
    /// Component lookup, object search or message dispatch in a hot path.
    #[serde(rename = "UPA0001")]
    ExpensiveCall,
    /// String concatenation or interpolation in a hot path.
    #[serde(rename = "UPA0002")]
    StringAllocation,
    /// `Debug.Log*` in a hot path.
    #[serde(rename = "UPA0003")]
    DebugLog,
    /// `Camera.main` accessor anywhere in a component.
    #[serde(rename = "UPA0004")]
    MainCamera,
}

impl PatternRuleId {
    pub fn all() -> &'static [PatternRuleId] {
        &[
            Self::ExpensiveCall,
            Self::StringAllocation,
            Self::DebugLog,
            Self::MainCamera,
        ]
    }

    /// Stable rule code, e.g. `UPA0001`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ExpensiveCall => "UPA0001",
            Self::StringAllocation => "UPA0002",
            Self::DebugLog => "UPA0003",
            Self::MainCamera => "UPA0004",
        }
    }

    /// Short rule title used in summaries.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExpensiveCall => "Expensive call in hot path",
            Self::StringAllocation => "String operation in hot path",
            Self::DebugLog => "Debug logging in hot path",
            Self::MainCamera => "Camera.main usage",
        }
    }

    /// Parse a rule code (case-insensitive).
    pub fn parse_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for PatternRuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single detected anti-pattern occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternIssue {
    pub id: PatternRuleId,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: String,
    pub file_path: String,
    /// 0-based.
    pub line: u32,
    /// 0-based, in characters.
    pub column: u32,
    /// Verbatim source of the offending expression.
    pub code_snippet: String,
    pub suggestion: Option<String>,
    /// Name of the method the issue was found in.
    pub method: String,
    /// Whether that method is a hot-path callback.
    pub in_hot_path: bool,
}
