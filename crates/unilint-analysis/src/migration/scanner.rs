//! Textual scan of source files for deprecated API usage.

use serde::Serialize;

use super::registry::ApiMigration;

/// Search term for a documented API path.
///
/// Any parenthetical qualifier is cut, then at most the last two
/// `.`-separated segments are kept: `UnityEngine.Input.GetAxis` → `Input.GetAxis`.
///
/// Whitespace before the qualifier stays in the term, so
/// `StartCoroutine (string method name)` searches for `"StartCoroutine "` and
/// never matches the `StartCoroutine(Routine())` replacement form.
pub fn search_term(old_api: &str) -> &str {
    let api = match old_api.find('(') {
        Some(paren) => &old_api[..paren],
        None => old_api,
    };
    match api.rmatch_indices('.').nth(1) {
        Some((dot, _)) => &api[dot + 1..],
        None => api,
    }
}

/// Byte offset → 0-based (line, column) lookup. Columns count characters.
#[derive(Debug, Clone)]
pub struct LineIndex<'t> {
    text: &'t str,
    line_starts: Vec<usize>,
}

impl<'t> LineIndex<'t> {
    pub fn new(text: &'t str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn position(&self, offset: usize) -> (u32, u32) {
        let line = self.line_of(offset);
        let start = self.line_starts[line];
        let column = self
            .text
            .get(start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(offset - start);
        (line as u32, column as u32)
    }

    /// Text of a 0-based line without its terminator (`\n` or `\r\n`).
    pub fn line_text(&self, line: usize) -> &'t str {
        let Some(&start) = self.line_starts.get(line) else {
            return "";
        };
        let end = self
            .line_starts
            .get(line + 1)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        let raw = &self.text[start..end];
        raw.strip_suffix('\r').unwrap_or(raw)
    }

    fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }
}

/// One occurrence of a deprecated API in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationFinding {
    pub migration: &'static ApiMigration,
    pub file: String,
    /// 0-based.
    pub line: u32,
    /// 0-based, in characters.
    pub column: u32,
    /// Byte offset of the match.
    pub offset: usize,
    /// Whole source line of the match, trimmed.
    pub code_snippet: String,
}

/// Scan `text` for every rule's search term.
///
/// Matching is ordinal and non-overlapping per term. Findings are ordered by
/// rule, then by position.
pub fn scan(file: &str, text: &str, rules: &[&'static ApiMigration]) -> Vec<MigrationFinding> {
    let index = LineIndex::new(text);
    let mut findings = Vec::new();

    for &migration in rules {
        let term = search_term(migration.old_api);
        if term.is_empty() {
            continue;
        }
        for (offset, _) in text.match_indices(term) {
            let (line, column) = index.position(offset);
            findings.push(MigrationFinding {
                migration,
                file: file.to_string(),
                line,
                column,
                offset,
                code_snippet: index.line_text(line as usize).trim().to_string(),
            });
        }
    }

    findings
}
