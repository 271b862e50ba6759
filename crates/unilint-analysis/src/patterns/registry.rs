//! PatternRuleSet: register rules, enable/disable by rule id.

use unilint_core::FxHashSet;

use super::rules::{DebugLogRule, ExpensiveCallRule, MainCameraRule, StringAllocationRule};
use super::traits::{MethodContext, PatternRule};
use super::types::{PatternIssue, PatternRuleId};

/// Ordered set of pattern rules with per-rule enable/disable.
pub struct PatternRuleSet {
    rules: Vec<Box<dyn PatternRule>>,
    disabled: FxHashSet<PatternRuleId>,
}

impl PatternRuleSet {
    /// Create a new empty rule set.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled: FxHashSet::default(),
        }
    }

    /// Rule set with all built-in rules, minus any listed in `disabled_codes`.
    /// Unknown codes are logged and ignored.
    pub fn with_disabled<S: AsRef<str>>(disabled_codes: &[S]) -> Self {
        let mut set = Self::default();
        for code in disabled_codes {
            match PatternRuleId::parse_code(code.as_ref()) {
                Some(id) => set.disable(id),
                None => tracing::warn!(code = code.as_ref(), "unknown pattern rule code in config"),
            }
        }
        set
    }

    pub fn register(&mut self, rule: Box<dyn PatternRule>) {
        self.rules.push(rule);
    }

    pub fn disable(&mut self, id: PatternRuleId) {
        self.disabled.insert(id);
    }

    pub fn enable(&mut self, id: PatternRuleId) {
        self.disabled.remove(&id);
    }

    pub fn is_enabled(&self, id: PatternRuleId) -> bool {
        !self.disabled.contains(&id)
    }

    /// Total registered rules.
    pub fn count(&self) -> usize {
        self.rules.len()
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|r| self.is_enabled(r.id())).count()
    }

    /// Ids of the registered rules, in registration order.
    pub fn ids(&self) -> Vec<PatternRuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run every enabled rule that applies to this method.
    pub fn run(&self, ctx: &MethodContext<'_>) -> Vec<PatternIssue> {
        let mut issues = Vec::new();
        for rule in &self.rules {
            if !self.is_enabled(rule.id()) {
                continue;
            }
            if rule.hot_path_only() && !ctx.is_hot_path {
                continue;
            }
            issues.extend(rule.check(ctx));
        }
        issues
    }
}

impl Default for PatternRuleSet {
    fn default() -> Self {
        let mut set = Self::new();
        set.register(Box::new(ExpensiveCallRule));
        set.register(Box::new(StringAllocationRule));
        set.register(Box::new(DebugLogRule));
        set.register(Box::new(MainCameraRule));
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registers_all_four() {
        let set = PatternRuleSet::default();
        assert_eq!(set.count(), 4);
        assert_eq!(set.enabled_count(), 4);
        assert_eq!(set.ids(), PatternRuleId::all());
    }

    #[test]
    fn disable_and_enable() {
        let mut set = PatternRuleSet::default();
        set.disable(PatternRuleId::DebugLog);
        assert_eq!(set.enabled_count(), 3);
        assert!(!set.is_enabled(PatternRuleId::DebugLog));
        set.enable(PatternRuleId::DebugLog);
        assert_eq!(set.enabled_count(), 4);
    }

    #[test]
    fn with_disabled_ignores_unknown_codes() {
        let set = PatternRuleSet::with_disabled(&["upa0004", "UPA9999"]);
        assert_eq!(set.enabled_count(), 3);
        assert!(!set.is_enabled(PatternRuleId::MainCamera));
    }
}
