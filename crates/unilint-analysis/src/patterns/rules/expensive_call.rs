//! Expensive call in hot path: component lookups, object searches, message dispatch.

use crate::parsers::syntax;
use crate::patterns::traits::{MethodContext, PatternRule};
use crate::patterns::types::{PatternIssue, PatternRuleId, Severity};

/// Simple callee name → remediation.
pub const EXPENSIVE_CALLS: &[(&str, &str)] = &[
    ("GetComponent", "Cache component references in Awake/Start instead of calling every frame"),
    ("GetComponentInChildren", "Cache component references in Awake/Start"),
    ("GetComponentInParent", "Cache component references in Awake/Start"),
    ("GetComponents", "Cache component array in Awake/Start"),
    ("FindObjectOfType", "Use object references or singletons instead - extremely expensive"),
    ("FindObjectsOfType", "Use object references or caching - extremely expensive"),
    ("FindGameObjectWithTag", "Cache references in Awake/Start"),
    ("FindGameObjectsWithTag", "Cache references or use object pooling"),
    ("Find", "Use direct references or cached lookups instead of Find()"),
    ("SendMessage", "Use direct method calls or events instead - uses reflection"),
    ("BroadcastMessage", "Use direct method calls or events instead - uses reflection"),
    ("SendMessageUpwards", "Use direct method calls or events instead - uses reflection"),
];

/// Remediation for an expensive callee, matched exactly (case-sensitive).
pub fn expensive_call_suggestion(callee: &str) -> Option<&'static str> {
    EXPENSIVE_CALLS
        .iter()
        .find(|(name, _)| *name == callee)
        .map(|(_, suggestion)| *suggestion)
}

pub struct ExpensiveCallRule;

impl PatternRule for ExpensiveCallRule {
    fn id(&self) -> PatternRuleId { PatternRuleId::ExpensiveCall }
    fn hot_path_only(&self) -> bool { true }

    fn check(&self, ctx: &MethodContext<'_>) -> Vec<PatternIssue> {
        let mut issues = Vec::new();
        ctx.for_each_node(|node| {
            if node.kind() != "invocation_expression" {
                return;
            }
            let Some(callee) = syntax::callee_name(node, ctx.source) else {
                return;
            };
            let Some(suggestion) = expensive_call_suggestion(callee) else {
                return;
            };
            issues.push(ctx.issue(
                self.id(),
                node,
                format!("Expensive call '{callee}' in hot path"),
                format!(
                    "'{callee}' is called in '{}' which runs frequently. This can cause performance issues.",
                    ctx.method_name
                ),
                Severity::Warning,
                Some(suggestion),
            ));
        });
        issues
    }
}
