//! Script discovery using the `ignore` crate's `WalkBuilder`.
//!
//! Engine-generated folders (Library, Temp, obj, ...) are always skipped.

use std::path::{Path, PathBuf};

use unilint_core::config::ScanConfig;
use unilint_core::errors::ProjectError;

/// Directories skipped on every walk.
pub const DEFAULT_IGNORES: &[&str] = &[
    "Library",
    "Temp",
    "Logs",
    "obj",
    "bin",
    "Build",
    "Builds",
    "UserSettings",
    ".git",
    ".vs",
    ".idea",
];

const SCRIPT_EXTENSION: &str = "cs";

/// A script's path and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a file, replacing invalid UTF-8.
    pub fn read(path: &Path) -> Result<Self, ProjectError> {
        let bytes = std::fs::read(path).map_err(|source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path, String::from_utf8_lossy(&bytes).into_owned()))
    }

    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    pub fn is_csharp(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION)
    }
}

/// Every `.cs` file under `root`, sorted by path.
///
/// Respects `.gitignore`, [`DEFAULT_IGNORES`] and `config.extra_ignore`.
/// Files over the size limit are skipped.
pub fn collect_scripts(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ProjectError> {
    if !root.exists() {
        return Err(ProjectError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .require_git(false)
        .max_filesize(Some(config.effective_max_file_size()))
        .follow_links(config.effective_follow_symlinks());

    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    let patterns = DEFAULT_IGNORES
        .iter()
        .copied()
        .chain(config.extra_ignore.iter().map(String::as_str));
    for pattern in patterns {
        for glob in [format!("!{pattern}/**"), format!("!{pattern}")] {
            overrides.add(&glob).map_err(|e| ProjectError::Walk {
                message: format!("invalid ignore pattern '{pattern}': {e}"),
            })?;
        }
    }
    let built = overrides.build().map_err(|e| ProjectError::Walk {
        message: e.to_string(),
    })?;
    builder.overrides(built);

    let mut scripts = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION) {
            scripts.push(path);
        }
    }

    scripts.sort();
    tracing::debug!(root = %root.display(), scripts = scripts.len(), "script discovery complete");
    Ok(scripts)
}

/// Read every path; unreadable files are logged and skipped.
pub fn load_sources(paths: &[PathBuf]) -> Vec<SourceFile> {
    paths
        .iter()
        .filter_map(|path| match SourceFile::read(path) {
            Ok(file) => Some(file),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable script");
                None
            }
        })
        .collect()
}
