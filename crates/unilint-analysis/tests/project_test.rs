//! Project detection, script discovery and end-to-end pipeline tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use unilint_analysis::project::{collect_scripts, has_unity_references, is_unity_project, unity_version};
use unilint_analysis::{analyze_project, PatternRuleId};
use unilint_core::config::ScanConfig;
use unilint_core::errors::ProjectError;
use unilint_core::UnilintConfig;

// ---- Helpers ----

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

const CSPROJ_WITH_ENGINE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup>
    <Reference Include="UnityEngine">
      <HintPath>/Applications/Unity/Hub/Editor/6000.0.23f1/Unity.app/Contents/Managed/UnityEngine/UnityEngine.dll</HintPath>
    </Reference>
  </ItemGroup>
</Project>"#;

const CSPROJ_PLAIN: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <ItemGroup>
    <Reference Include="Newtonsoft.Json">
      <HintPath>packages/Newtonsoft.Json.dll</HintPath>
    </Reference>
  </ItemGroup>
</Project>"#;

// ---- Detection ----

#[test]
fn folder_structure_marks_unity_project() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Game.sln", "");
    fs::create_dir_all(dir.path().join("Assets")).unwrap();
    fs::create_dir_all(dir.path().join("ProjectSettings")).unwrap();
    assert!(is_unity_project(&dir.path().join("Game.sln")));
}

#[test]
fn missing_solution_is_not_a_project() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("Assets")).unwrap();
    fs::create_dir_all(dir.path().join("ProjectSettings")).unwrap();
    assert!(!is_unity_project(&dir.path().join("Game.sln")));
}

#[test]
fn generated_project_file_marks_unity_project() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Game.sln", "");
    write(dir.path(), "Assembly-CSharp-Editor.csproj", "<Project />");
    assert!(is_unity_project(&dir.path().join("Game.sln")));
}

#[test]
fn engine_hint_path_marks_unity_project() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Tools.sln", "");
    write(dir.path(), "MyTools.csproj", CSPROJ_WITH_ENGINE);
    assert!(has_unity_references(&dir.path().join("MyTools.csproj")));
    assert!(is_unity_project(&dir.path().join("Tools.sln")));
}

#[test]
fn plain_dotnet_solution_is_not_unity() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "App.sln", "");
    write(dir.path(), "App.csproj", CSPROJ_PLAIN);
    write(dir.path(), "Broken.csproj", "<Project><HintPath>UnityEngine.dll</Wrong>");
    assert!(!has_unity_references(&dir.path().join("App.csproj")));
    assert!(!has_unity_references(&dir.path().join("Broken.csproj")));
    assert!(!is_unity_project(&dir.path().join("App.sln")));
}

#[test]
fn reads_editor_version() {
    let dir = TempDir::new().unwrap();
    assert_eq!(unity_version(dir.path()), None);
    write(
        dir.path(),
        "ProjectSettings/ProjectVersion.txt",
        "m_EditorVersion: 6000.0.23f1\nm_EditorVersionWithRevision: 6000.0.23f1 (1c4764c07fb4)\n",
    );
    assert_eq!(unity_version(dir.path()).as_deref(), Some("6000.0.23f1"));
}

// ---- Discovery ----

#[test]
fn collect_scripts_skips_generated_folders() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Assets/Scripts/Player.cs", "");
    write(root, "Assets/Editor/Tools.cs", "");
    write(root, "Assets/Art/readme.md", "");
    write(root, "Library/PackageCache/com.unity.x/Runtime.cs", "");
    write(root, "Temp/Generated.cs", "");
    write(root, "obj/Debug/AssemblyInfo.cs", "");
    write(root, "Assets/ThirdParty/Vendor.cs", "");

    let config = ScanConfig {
        extra_ignore: vec!["ThirdParty".to_string()],
        ..ScanConfig::default()
    };
    let scripts = collect_scripts(root, &config).unwrap();
    let relative: Vec<String> = scripts
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(relative, vec!["Assets/Editor/Tools.cs", "Assets/Scripts/Player.cs"]);
}

#[test]
fn collect_scripts_missing_root_errors() {
    let dir = TempDir::new().unwrap();
    let err = collect_scripts(&dir.path().join("nope"), &ScanConfig::default()).unwrap_err();
    assert!(matches!(err, ProjectError::NotFound { .. }));
}

// ---- Pipeline ----

#[test]
fn analyze_project_end_to_end() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "Assets/Scripts/BaseBehaviour.cs", "public abstract class BaseBehaviour : MonoBehaviour { }");
    write(
        root,
        "Assets/Scripts/Player.cs",
        r#"
public class Player : BaseBehaviour
{
    void Update()
    {
        var rb = GetComponent<Rigidbody>();
        Debug.Log("tick");
        if (Input.GetKey(KeyCode.Space)) { }
    }
}
"#,
    );
    write(root, "ProjectSettings/ProjectVersion.txt", "m_EditorVersion: 2022.3.1f1\n");

    let config = UnilintConfig::from_toml("[patterns]\ninclude_info = false\n").unwrap();
    let analysis = analyze_project(root, &config).unwrap();

    assert_eq!(analysis.scripts_found, 2);
    assert_eq!(analysis.scripts_parsed, 2);
    assert_eq!(analysis.unity_version.as_deref(), Some("2022.3.1f1"));

    // Debug.Log is Info and filtered out.
    assert_eq!(analysis.patterns.total_issues, 1);
    assert_eq!(analysis.patterns.count_of(PatternRuleId::ExpensiveCall), 1);
    assert_eq!(analysis.patterns.count_of(PatternRuleId::DebugLog), 0);

    assert_eq!(analysis.migrations.files_checked, 2);
    assert_eq!(analysis.migrations.total_findings, 1);
    assert_eq!(analysis.migrations.by_api[0].name, "UnityEngine.Input.GetKey");
}

#[test]
fn analyze_project_on_empty_directory() {
    let dir = TempDir::new().unwrap();
    let analysis = analyze_project(dir.path(), &UnilintConfig::default()).unwrap();

    assert_eq!(analysis.scripts_found, 0);
    assert_eq!(analysis.scripts_parsed, 0);
    assert_eq!(analysis.unity_version, None);
    assert_eq!(analysis.patterns.total_issues, 0);
    assert!(analysis.patterns.issues.is_empty());
    assert_eq!(analysis.migrations.files_checked, 0);
    assert_eq!(analysis.migrations.total_findings, 0);
}
