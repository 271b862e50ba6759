//! `Camera.main` accessor, anywhere in a component.
//!
//! Matching is textual (receiver `Camera`, member `main`). A user type that
//! happens to be named `Camera` with a `main` member is reported as well.

use crate::parsers::syntax;
use crate::patterns::traits::{MethodContext, PatternRule};
use crate::patterns::types::{PatternIssue, PatternRuleId, Severity};

pub struct MainCameraRule;

impl PatternRule for MainCameraRule {
    fn id(&self) -> PatternRuleId { PatternRuleId::MainCamera }
    fn hot_path_only(&self) -> bool { false }

    fn check(&self, ctx: &MethodContext<'_>) -> Vec<PatternIssue> {
        let mut issues = Vec::new();
        ctx.for_each_node(|node| {
            let is_main_camera = syntax::member_access_parts(node, ctx.source)
                .is_some_and(|(receiver, name)| receiver == "Camera" && name == "main");
            if !is_main_camera {
                return;
            }
            let (description, severity) = if ctx.is_hot_path {
                (
                    format!(
                        "Camera.main in '{}' calls FindObjectByTag every frame.",
                        ctx.method_name
                    ),
                    Severity::Warning,
                )
            } else {
                (
                    "Camera.main calls FindObjectByTag internally. Consider caching the reference."
                        .to_string(),
                    Severity::Info,
                )
            };
            issues.push(ctx.issue(
                self.id(),
                node,
                "Camera.main usage".to_string(),
                description,
                severity,
                Some("Cache Camera.main reference in Awake/Start: private Camera _mainCamera; void Awake() => _mainCamera = Camera.main;"),
            ));
        });
        issues
    }
}
