//! Whole-project analysis: discover → parse → index types → pattern rules +
//! migration scan.

use std::path::Path;

use rayon::prelude::*;
use unilint_core::{UnilintConfig, UnilintResult};

use crate::hot_path::TypeIndex;
use crate::migration::{MigrationCheck, MigrationReport};
use crate::parsers::{CSharpParser, ParsedScript};
use crate::patterns::PatternAnalyzer;
use crate::project::{self, SourceFile};
use crate::reporting::{PatternReport, PatternReportOptions};

/// Everything produced for one project.
#[derive(Debug)]
pub struct ProjectAnalysis {
    pub scripts_found: usize,
    pub scripts_parsed: usize,
    /// Scripts that parsed with recovered syntax errors.
    pub scripts_with_errors: usize,
    /// Editor version from the project settings, when present.
    pub unity_version: Option<String>,
    pub patterns: PatternReport,
    pub migrations: MigrationReport,
}

/// Analyze every script under `root`.
///
/// Component ancestry is resolved across all scripts of the project, so a
/// class deriving from a base declared in another file is still analyzed.
pub fn analyze_project(root: &Path, config: &UnilintConfig) -> UnilintResult<ProjectAnalysis> {
    let paths = project::collect_scripts(root, &config.scan)?;
    let sources = project::load_sources(&paths);
    Ok(analyze_sources(root, &sources, config, paths.len()))
}

/// Analyze already-loaded sources. `scripts_found` is reported as-is.
pub fn analyze_sources(
    root: &Path,
    sources: &[SourceFile],
    config: &UnilintConfig,
    scripts_found: usize,
) -> ProjectAnalysis {
    let parser = CSharpParser::new();
    let scripts: Vec<ParsedScript> = sources
        .par_iter()
        .filter(|source| source.is_csharp())
        .filter_map(|source| match parser.parse(&source.path, source.text.as_str()) {
            Ok(script) => Some(script),
            Err(e) => {
                tracing::warn!(file = %source.path.display(), error = %e, "skipping unparsable script");
                None
            }
        })
        .collect();

    let index = TypeIndex::from_scripts(&scripts);
    let analyzer = PatternAnalyzer::from_config(&config.patterns);
    let issues = analyzer.analyze_scripts(&scripts, &index);
    let patterns = PatternReport::build(
        root.to_string_lossy(),
        issues,
        PatternReportOptions::from(&config.patterns),
    );

    let migrations = MigrationCheck::from_config(&config.migration).run(sources);

    tracing::info!(
        root = %root.display(),
        scripts = scripts.len(),
        types = index.len(),
        issues = patterns.total_issues,
        findings = migrations.total_findings,
        "project analysis complete"
    );

    ProjectAnalysis {
        scripts_found,
        scripts_parsed: scripts.len(),
        scripts_with_errors: scripts.iter().filter(|s| s.has_errors()).count(),
        unity_version: project::unity_version(root),
        patterns,
        migrations,
    }
}
