//! Deprecation registry and migration scanner tests.

use std::collections::BTreeSet;

use unilint_analysis::migration::{scan, search_term, MigrationCheck, MigrationRegistry};
use unilint_analysis::project::SourceFile;
use unilint_analysis::{ApiMigration, UnityVersion};

fn registry() -> MigrationRegistry {
    MigrationRegistry::builtin()
}

// ---- Registry queries ----

#[test]
fn table_invariants_hold() {
    for m in registry().all() {
        assert!(!m.old_api.is_empty());
        assert!(!m.new_api.is_empty());
        assert!(!m.category.is_empty());
        assert!(!m.deprecated_version.is_empty());
        assert!(m.deprecated_in() > UnityVersion::default(), "{}", m.old_api);
        if let Some(removed) = m.removed_in() {
            assert!(removed >= m.deprecated_in(), "{}", m.old_api);
        }
    }
}

#[test]
fn for_version_includes_entries_removed_at_target() {
    let names: Vec<&str> = registry().for_version("6000.0").map(|m| m.old_api).collect();
    assert!(names.contains(&"UnityEngine.Networking.NetworkManager"));
    assert!(names.contains(&"EditorUtility.DisplayDialog (some overloads)"));
    // Removed long before the target, still returned.
    assert!(names.contains(&"Application.LoadLevel"));
    assert_eq!(names.len(), 30);
}

#[test]
fn for_version_filters_by_deprecation() {
    assert_eq!(registry().for_version("2019.4").count(), 13);
    assert_eq!(registry().for_version("2017.4.40f1").count(), 3);
    assert_eq!(registry().for_version("2017.3").count(), 0);
}

#[test]
fn garbage_version_returns_without_error() {
    assert_eq!(registry().for_version("latest").count(), 0);
    assert_eq!(registry().for_version("").count(), 0);
    assert_eq!(registry().for_version("99999").count(), 30);
}

#[test]
fn search_is_case_insensitive() {
    let upper: Vec<&ApiMigration> = registry().search_by_old_api("INPUT").collect();
    let lower: Vec<&ApiMigration> = registry().search_by_old_api("input").collect();
    assert_eq!(upper, lower);
    assert_eq!(upper.len(), 6);
    assert_eq!(registry().search_by_old_api("").count(), 30);
    assert_eq!(registry().search_by_old_api("NoSuchApi").count(), 0);
}

#[test]
fn categories_are_distinct_and_backed() {
    let categories = registry().categories();
    assert_eq!(categories.len(), 13);
    for category in &categories {
        assert!(registry().by_category(category).count() >= 1, "{category}");
    }
    let sorted: Vec<&str> = categories.iter().copied().collect();
    let mut expected = sorted.clone();
    expected.sort();
    assert_eq!(sorted, expected);
}

#[test]
fn by_category_ignores_case() {
    assert_eq!(registry().by_category("networking").count(), 4);
    assert_eq!(registry().by_category("NETWORKING").count(), 4);
    assert_eq!(registry().by_category("Network").count(), 0);
}

// ---- Scanner ----

#[test]
fn scan_reports_each_occurrence_in_order() {
    let text = "void Update() {\n  if (Input.GetAxis(\"H\") > 0 && Input.GetAxis(\"V\") > 0) {}\n}\n";
    let rules: Vec<&'static ApiMigration> = registry().search_by_old_api("GetAxis").collect();
    let findings = scan("Assets/Move.cs", text, &rules);

    assert_eq!(findings.len(), 2);
    assert!(findings[0].offset < findings[1].offset);
    assert_eq!((findings[0].line, findings[0].column), (1, 6));
    assert_eq!((findings[1].line, findings[1].column), (1, 32));
    assert_eq!(
        findings[0].code_snippet,
        "if (Input.GetAxis(\"H\") > 0 && Input.GetAxis(\"V\") > 0) {}"
    );
    assert_eq!(findings[0].file, "Assets/Move.cs");
    assert_eq!(findings[0].migration.new_api, "UnityEngine.InputSystem.InputAction");
}

#[test]
fn scan_orders_by_rule_then_position() {
    let text = "var b = Input.GetButton(\"Fire\");\nvar a = Input.GetAxis(\"H\");\n";
    let rules: Vec<&'static ApiMigration> = registry().by_category("Input").collect();
    let findings = scan("a.cs", text, &rules);
    let apis: Vec<&str> = findings.iter().map(|f| f.migration.old_api).collect();
    assert_eq!(apis, vec!["UnityEngine.Input.GetAxis", "UnityEngine.Input.GetButton"]);
}

#[test]
fn scan_is_ordinal() {
    let rules: Vec<&'static ApiMigration> = registry().search_by_old_api("GetAxis").collect();
    assert!(scan("a.cs", "input.getaxis(\"H\")", &rules).is_empty());
}

#[test]
fn parenthetical_terms_keep_trailing_space() {
    let rules: Vec<&'static ApiMigration> =
        registry().search_by_old_api("IgnoreCollision").collect();
    assert_eq!(search_term(rules[0].old_api), "Physics.IgnoreCollision ");
    assert!(scan("a.cs", "Physics.IgnoreCollision(a, b);", &rules).is_empty());
    assert_eq!(scan("a.cs", "Physics.IgnoreCollision (a, b);", &rules).len(), 1);
}

#[test]
fn replacement_overloads_are_not_flagged() {
    for (old, replacement) in [
        ("StartCoroutine", "StartCoroutine(Spawn());"),
        ("ParticleSystem.Emit", "system.Emit(emitParams, 10); ParticleSystem.Emit(p, 1);"),
        ("Graphics.Blit", "Graphics.Blit(source, destination);"),
        ("RenderTexture.GetTemporary", "RenderTexture.GetTemporary(descriptor);"),
    ] {
        let rules: Vec<&'static ApiMigration> = registry().search_by_old_api(old).collect();
        assert!(!rules.is_empty(), "{old}");
        assert!(scan("a.cs", replacement, &rules).is_empty(), "{old}");
    }
}

#[test]
fn empty_inputs_yield_no_findings() {
    let all: Vec<&'static ApiMigration> = registry().all().iter().collect();
    assert!(scan("a.cs", "", &all).is_empty());
    assert!(scan("a.cs", "Application.LoadLevel(1);", &[]).is_empty());
}

#[test]
fn columns_count_characters() {
    let rules: Vec<&'static ApiMigration> = registry().search_by_old_api("UnityEngine.WWW").collect();
    let findings = scan("a.cs", "// héllo → new WWW(url)\nvar é = new UnityEngine.WWW(url);", &rules);
    // Term is "UnityEngine.WWW"; only the second line has it.
    assert_eq!(findings.len(), 1);
    assert_eq!((findings[0].line, findings[0].column), (1, 12));
}

// ---- Check ----

#[test]
fn check_counts_only_csharp_files() {
    let files = vec![
        SourceFile::new("Assets/A.cs", "Application.LoadLevel(1); Application.LoadLevel(2);"),
        SourceFile::new("Assets/B.cs", "var w = new WWW(url); NetworkManager.singleton.StartHost();"),
        SourceFile::new("Assets/readme.txt", "Application.LoadLevel"),
    ];
    let report = MigrationCheck::new(registry(), "6000.0").run(&files);

    assert_eq!(report.files_checked, 2);
    assert_eq!(report.migration_rules_checked, 30);
    assert_eq!(report.total_findings, report.findings.len());
    assert_eq!(report.by_api[0].name, "Application.LoadLevel");
    assert_eq!(report.by_api[0].count, 2);
    assert!(report.findings.iter().all(|f| f.file.ends_with(".cs")));
}

#[test]
fn check_category_filter() {
    let files = vec![SourceFile::new(
        "Assets/A.cs",
        "Application.LoadLevel(1); Input.GetKey(KeyCode.A);",
    )];
    let report = MigrationCheck::new(registry(), "6000.0")
        .with_category(Some("input".to_string()))
        .run(&files);
    assert_eq!(report.migration_rules_checked, 5);
    assert_eq!(report.total_findings, 1);
    assert_eq!(report.by_category[0].name, "Input");

    let unfiltered = MigrationCheck::new(registry(), "6000.0")
        .with_category(Some("  ".to_string()))
        .run(&files);
    assert_eq!(unfiltered.migration_rules_checked, 30);
}

#[test]
fn report_serializes() {
    let files = vec![SourceFile::new("A.cs", "Application.LoadLevel(0);")];
    let json = MigrationCheck::new(registry(), "2022.3").run(&files).to_json().unwrap();
    assert!(json.contains("\"migration_rules_checked\""));
    assert!(json.contains("SceneManager.LoadScene"));
}

#[test]
fn categories_match_table() {
    let from_entries: BTreeSet<&str> = registry().all().iter().map(|m| m.category).collect();
    assert_eq!(from_entries, registry().categories());
}
