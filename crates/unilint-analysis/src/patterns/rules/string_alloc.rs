//! String concatenation and interpolation in hot path.

use crate::parsers::syntax;
use crate::patterns::traits::{MethodContext, PatternRule};
use crate::patterns::types::{PatternIssue, PatternRuleId, Severity};

const CONCAT_SUGGESTION: &str =
    "Use StringBuilder, string.Format with cached values, or avoid string operations in Update";
const INTERPOLATION_SUGGESTION: &str = "Cache formatted strings or avoid string operations in Update";

pub struct StringAllocationRule;

impl PatternRule for StringAllocationRule {
    fn id(&self) -> PatternRuleId { PatternRuleId::StringAllocation }
    fn hot_path_only(&self) -> bool { true }

    fn check(&self, ctx: &MethodContext<'_>) -> Vec<PatternIssue> {
        let mut issues = Vec::new();
        ctx.for_each_node(|node| {
            if syntax::is_add_expression(node) {
                // Only a literal operand counts; `a + b` on string-typed locals is not flagged.
                let has_literal = ["left", "right"].iter().any(|field| {
                    node.child_by_field_name(field)
                        .is_some_and(syntax::is_string_literal)
                });
                if has_literal {
                    issues.push(ctx.issue(
                        self.id(),
                        node,
                        "String concatenation in hot path".to_string(),
                        format!(
                            "String concatenation in '{}' allocates memory every frame.",
                            ctx.method_name
                        ),
                        Severity::Warning,
                        Some(CONCAT_SUGGESTION),
                    ));
                }
            } else if node.kind() == "interpolated_string_expression" {
                issues.push(ctx.issue(
                    self.id(),
                    node,
                    "String interpolation in hot path".to_string(),
                    format!(
                        "String interpolation in '{}' allocates memory every frame.",
                        ctx.method_name
                    ),
                    Severity::Warning,
                    Some(INTERPOLATION_SUGGESTION),
                ));
            }
        });
        issues
    }
}
