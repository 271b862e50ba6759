//! Diagnostic id → category buckets by numeric sub-range.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Prefix of the external analyzer rule ids (`UNT0001`).
pub const RULE_PREFIX: &str = "UNT";

/// Prefix of the external suppressor ids (`USP0001`).
pub const SUPPRESSOR_PREFIX: &str = "USP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuleCategory {
    #[default]
    All,
    /// UNT0001-UNT0015: message method signatures and empty messages.
    Messages,
    /// UNT0016-UNT0025: null coalescing and propagation on engine objects.
    NullChecking,
    /// UNT0026-UNT0035: tag comparison, lookups in loops.
    Performance,
    /// UNT0036 and up.
    BestPractices,
}

impl RuleCategory {
    pub fn all() -> &'static [RuleCategory] {
        &[
            Self::All,
            Self::Messages,
            Self::NullChecking,
            Self::Performance,
            Self::BestPractices,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Messages => "messages",
            Self::NullChecking => "nullchecking",
            Self::Performance => "performance",
            Self::BestPractices => "bestpractices",
        }
    }

    /// Parse a user-facing category name (case-insensitive). Aliases: `null`, `practices`.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "messages" => Some(Self::Messages),
            "nullchecking" | "null" => Some(Self::NullChecking),
            "performance" => Some(Self::Performance),
            "bestpractices" | "practices" => Some(Self::BestPractices),
            _ => None,
        }
    }

    /// Parse with unknown or missing names falling back to `All`.
    pub fn parse_or_all(s: Option<&str>) -> Self {
        s.and_then(Self::parse_str).unwrap_or_default()
    }

    /// Inclusive rule number range; `None` for `All`.
    pub fn range(&self) -> Option<RangeInclusive<u32>> {
        match self {
            Self::All => None,
            Self::Messages => Some(1..=15),
            Self::NullChecking => Some(16..=25),
            Self::Performance => Some(26..=35),
            Self::BestPractices => Some(36..=u32::MAX),
        }
    }
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric suffix of a `UNT` id, if it has one.
pub fn rule_number(id: &str) -> Option<u32> {
    let prefix = id.get(..RULE_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(RULE_PREFIX) {
        return None;
    }
    id.get(RULE_PREFIX.len()..)?.trim().parse().ok()
}

/// Whether `id` falls in `category`. `All` accepts every id.
pub fn classify(id: &str, category: RuleCategory) -> bool {
    match category.range() {
        None => true,
        Some(range) => rule_number(id).is_some_and(|n| range.contains(&n)),
    }
}

/// Analyzer (`UNT`) or suppressor (`USP`) id, case-insensitive.
pub fn is_unity_diagnostic(id: &str) -> bool {
    [RULE_PREFIX, SUPPRESSOR_PREFIX].iter().any(|prefix| {
        id.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}
