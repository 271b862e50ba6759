//! `Debug.Log*` in hot path.

use crate::parsers::syntax;
use crate::patterns::traits::{MethodContext, PatternRule};
use crate::patterns::types::{PatternIssue, PatternRuleId, Severity};

const LOG_METHODS: &[&str] = &["Log", "LogWarning", "LogError"];

pub struct DebugLogRule;

impl PatternRule for DebugLogRule {
    fn id(&self) -> PatternRuleId { PatternRuleId::DebugLog }
    fn hot_path_only(&self) -> bool { true }

    fn check(&self, ctx: &MethodContext<'_>) -> Vec<PatternIssue> {
        let mut issues = Vec::new();
        ctx.for_each_node(|node| {
            if node.kind() != "invocation_expression" {
                return;
            }
            let is_debug_log = node
                .child_by_field_name("function")
                .and_then(|function| syntax::member_access_parts(function, ctx.source))
                .is_some_and(|(receiver, name)| receiver == "Debug" && LOG_METHODS.contains(&name));
            if !is_debug_log {
                return;
            }
            issues.push(ctx.issue(
                self.id(),
                node,
                "Debug logging in hot path".to_string(),
                format!(
                    "Debug.Log in '{}' should be removed or conditionally compiled for release builds.",
                    ctx.method_name
                ),
                Severity::Info,
                Some("Wrap in #if UNITY_EDITOR or [Conditional(\"UNITY_EDITOR\")] attribute, or remove for release"),
            ));
        });
        issues
    }
}
