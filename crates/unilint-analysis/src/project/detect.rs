//! Heuristics for recognising a Unity-generated solution.
//!
//! Every check degrades to "not detected" on I/O or XML errors.

use std::fs;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

const GENERATED_PROJECTS: &[&str] = &["Assembly-CSharp.csproj", "Assembly-CSharp-Editor.csproj"];
const VERSION_FILE: &str = "ProjectVersion.txt";
const EDITOR_VERSION_KEY: &str = "m_EditorVersion:";

/// Whether the solution at `solution_path` belongs to a Unity project.
///
/// Checked in order: `Assets/` + `ProjectSettings/` next to the solution,
/// a generated `Assembly-CSharp*.csproj`, then any top-level `.csproj`
/// referencing engine assemblies.
pub fn is_unity_project(solution_path: &Path) -> bool {
    if !solution_path.is_file() {
        return false;
    }
    let Some(dir) = solution_path.parent() else {
        return false;
    };
    let dir = if dir.as_os_str().is_empty() { Path::new(".") } else { dir };

    has_folder_structure(dir) || has_generated_project(dir) || any_project_references_unity(dir)
}

fn has_folder_structure(dir: &Path) -> bool {
    dir.join("Assets").is_dir() && dir.join("ProjectSettings").is_dir()
}

fn has_generated_project(dir: &Path) -> bool {
    GENERATED_PROJECTS.iter().any(|name| dir.join(name).is_file())
}

fn any_project_references_unity(dir: &Path) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list project directory");
            return false;
        }
    };
    entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csproj") && path.is_file())
        .any(|path| has_unity_references(&path))
}

/// Whether a `.csproj` has a `HintPath` to an engine assembly or a Unity
/// `Managed` folder. Unreadable or malformed files count as no.
pub fn has_unity_references(csproj_path: &Path) -> bool {
    let xml = match fs::read_to_string(csproj_path) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::warn!(path = %csproj_path.display(), error = %e, "cannot read project file");
            return false;
        }
    };
    match hint_paths(&xml) {
        Ok(paths) => paths.iter().any(|p| is_unity_hint_path(p)),
        Err(e) => {
            tracing::warn!(path = %csproj_path.display(), error = %e, "malformed project file");
            false
        }
    }
}

fn is_unity_hint_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    lower.contains("unityengine.dll")
        || lower.contains("unityeditor.dll")
        || (lower.contains("unity") && lower.contains("managed"))
}

/// Text of every `HintPath` element, namespace prefixes ignored.
fn hint_paths(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut paths = Vec::new();
    let mut in_hint_path = false;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"HintPath" => {
                in_hint_path = true;
            }
            Event::End(e) if e.local_name().as_ref() == b"HintPath" => {
                in_hint_path = false;
            }
            Event::Text(text) if in_hint_path => {
                paths.push(text.unescape()?.into_owned());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(paths)
}

/// Editor version from `ProjectSettings/ProjectVersion.txt`, e.g. `6000.0.0f1`.
pub fn unity_version(project_dir: &Path) -> Option<String> {
    let path = project_dir.join("ProjectSettings").join(VERSION_FILE);
    let contents = fs::read_to_string(&path).ok()?;
    contents
        .lines()
        .find_map(|line| line.strip_prefix(EDITOR_VERSION_KEY))
        .map(|version| version.trim().to_string())
        .filter(|version| !version.is_empty())
}
