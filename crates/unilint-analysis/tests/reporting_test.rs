//! Report summary tests: filters, counts, overview.

use unilint_analysis::analyzers::{AnalyzerCatalog, ExternalAnalyzer, RuleDescriptor};
use unilint_analysis::reporting::{DiagnosticsOverview, PatternReport, PatternReportOptions};
use unilint_analysis::{CSharpParser, MigrationRegistry, PatternAnalyzer, PatternIssue, PatternRuleId};
use unilint_core::config::PatternConfig;

fn sample_issues() -> Vec<PatternIssue> {
    let source = r#"
public class Player : MonoBehaviour
{
    void Start() { var cam = Camera.main; }
    void Update()
    {
        Find("x");
        Find("y");
        Debug.Log("x" + 1);
    }
}
"#;
    let script = CSharpParser::new().parse("Player.cs", source).unwrap();
    PatternAnalyzer::default().analyze_standalone(&script)
}

#[test]
fn default_options_keep_everything() {
    let issues = sample_issues();
    let report = PatternReport::build("Player.cs", issues.clone(), PatternReportOptions::default());
    assert_eq!(report.total_issues, issues.len());
    assert_eq!(report.total_issues, 5);
    assert_eq!(report.by_id[0].id, PatternRuleId::ExpensiveCall);
    assert_eq!(report.by_id[0].count, 2);
    assert_eq!(report.by_category.len(), 1);
    assert_eq!(report.by_category[0].name, "Performance");
    assert_eq!(report.by_category[0].count, 5);
}

#[test]
fn include_info_false_drops_info() {
    let options = PatternReportOptions {
        include_info: false,
        hot_paths_only: false,
    };
    let report = PatternReport::build("Player.cs", sample_issues(), options);
    // Find x2 and the concatenation remain; Debug.Log and Start's Camera.main are Info.
    assert_eq!(report.total_issues, 3);
    assert_eq!(report.count_of(PatternRuleId::DebugLog), 0);
    assert_eq!(report.count_of(PatternRuleId::MainCamera), 0);
}

#[test]
fn hot_paths_only_drops_other_methods() {
    let config = PatternConfig {
        hot_paths_only: true,
        ..PatternConfig::default()
    };
    let report = PatternReport::build("Player.cs", sample_issues(), PatternReportOptions::from(&config));
    assert_eq!(report.total_issues, 4);
    assert!(report.issues.iter().all(|i| i.method == "Update"));
}

#[test]
fn report_json_has_codes_and_titles() {
    let report = PatternReport::build("Player.cs", sample_issues(), PatternReportOptions::default());
    let json = report.to_json().unwrap();
    assert!(json.contains("\"UPA0001\""));
    assert!(json.contains("Expensive call in hot path"));
}

#[test]
fn overview_lists_everything() {
    let catalog = AnalyzerCatalog::new(|| {
        vec![ExternalAnalyzer {
            name: "EmptyMessage".to_string(),
            supported: vec![RuleDescriptor {
                id: "UNT0001".to_string(),
                title: "Empty Unity message".to_string(),
                description: String::new(),
                category: "Performance".to_string(),
                default_severity: "Warning".to_string(),
                help_link: None,
            }],
        }]
    });
    let overview = DiagnosticsOverview::collect(&catalog, &MigrationRegistry::builtin());
    assert_eq!(overview.analyzer_count, 1);
    assert_eq!(overview.custom_patterns.len(), 4);
    assert_eq!(overview.custom_patterns[3].id, "UPA0004");
    assert_eq!(overview.migration_rules, 30);
    assert_eq!(overview.migration_categories.len(), 13);
    assert!(overview.to_json().unwrap().contains("UNT0001"));
}
