//! PatternRule trait and the per-method context rules run against.

use tree_sitter::Node;

use super::types::{PatternIssue, PatternRuleId, Severity, PERFORMANCE_CATEGORY};
use crate::parsers::syntax;

/// Everything a rule sees about one method of a component class.
#[derive(Debug, Clone, Copy)]
pub struct MethodContext<'a> {
    pub file: &'a str,
    pub source: &'a str,
    pub method: Node<'a>,
    pub method_name: &'a str,
    pub is_hot_path: bool,
}

impl<'a> MethodContext<'a> {
    /// Pre-order walk over the method's descendants (signature and body).
    pub fn for_each_node(&self, visit: impl FnMut(Node<'a>)) {
        syntax::walk_descendants(self.method, visit);
    }

    pub fn text(&self, node: Node<'_>) -> &'a str {
        syntax::node_text(node, self.source)
    }

    /// Build an issue located at `node`.
    pub fn issue(
        &self,
        id: PatternRuleId,
        node: Node<'_>,
        title: String,
        description: String,
        severity: Severity,
        suggestion: Option<&str>,
    ) -> PatternIssue {
        let (line, column) = syntax::start_position(node, self.source);
        PatternIssue {
            id,
            title,
            description,
            severity,
            category: PERFORMANCE_CATEGORY.to_string(),
            file_path: self.file.to_string(),
            line,
            column,
            code_snippet: self.text(node).to_string(),
            suggestion: suggestion.map(str::to_string),
            method: self.method_name.to_string(),
            in_hot_path: self.is_hot_path,
        }
    }
}

/// A single anti-pattern family.
pub trait PatternRule: Send + Sync {
    fn id(&self) -> PatternRuleId;

    /// Rules that only make sense on hot paths are skipped for other methods.
    fn hot_path_only(&self) -> bool;

    /// Emit one issue per match inside the method.
    fn check(&self, ctx: &MethodContext<'_>) -> Vec<PatternIssue>;
}
