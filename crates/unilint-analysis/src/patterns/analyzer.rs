//! PatternAnalyzer: finds component types in a parsed script and runs the
//! rule set over each of their methods.

use rayon::prelude::*;
use tree_sitter::Node;
use unilint_core::config::PatternConfig;

use super::registry::PatternRuleSet;
use super::traits::MethodContext;
use super::types::PatternIssue;
use crate::hot_path::{is_component_declaration, is_hot_path, TypeHierarchy, TypeIndex};
use crate::parsers::syntax;
use crate::parsers::ParsedScript;

pub struct PatternAnalyzer {
    rules: PatternRuleSet,
}

impl PatternAnalyzer {
    pub fn new(rules: PatternRuleSet) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &PatternConfig) -> Self {
        Self::new(PatternRuleSet::with_disabled(&config.disabled_rules))
    }

    pub fn rules(&self) -> &PatternRuleSet {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut PatternRuleSet {
        &mut self.rules
    }

    /// Analyze one script. Component ancestry is resolved through `hierarchy`;
    /// types it cannot resolve are skipped.
    pub fn analyze(&self, script: &ParsedScript, hierarchy: &dyn TypeHierarchy) -> Vec<PatternIssue> {
        let source = script.text();
        let mut issues = Vec::new();

        for decl in script.type_declarations() {
            if !is_component_declaration(decl, source, hierarchy) {
                continue;
            }
            for method in owned_methods(decl) {
                let Some(method_name) = syntax::declared_name(method, source) else {
                    continue;
                };
                let ctx = MethodContext {
                    file: script.file(),
                    source,
                    method,
                    method_name,
                    is_hot_path: is_hot_path(method_name),
                };
                issues.extend(self.rules.run(&ctx));
            }
        }

        tracing::debug!(file = script.file(), issues = issues.len(), "pattern analysis complete");
        issues
    }

    /// Analyze a script using only the types it declares itself.
    pub fn analyze_standalone(&self, script: &ParsedScript) -> Vec<PatternIssue> {
        let index = TypeIndex::from_script(script);
        self.analyze(script, &index)
    }

    /// Analyze many scripts in parallel. Output keeps the input order of scripts.
    pub fn analyze_scripts(
        &self,
        scripts: &[ParsedScript],
        hierarchy: &dyn TypeHierarchy,
    ) -> Vec<PatternIssue> {
        scripts
            .par_iter()
            .map(|script| self.analyze(script, hierarchy))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new(PatternRuleSet::default())
    }
}

/// Methods whose nearest enclosing type is `decl`.
fn owned_methods(decl: Node<'_>) -> Vec<Node<'_>> {
    let mut methods = Vec::new();
    syntax::walk_descendants(decl, |node| {
        if node.kind() == "method_declaration" && syntax::enclosing_type(node) == Some(decl) {
            methods.push(node);
        }
    });
    methods
}
