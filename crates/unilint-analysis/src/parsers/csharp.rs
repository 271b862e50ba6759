//! CSharpParser: builds tree-sitter syntax trees for Unity scripts.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};
use unilint_core::errors::{ParseError, ProjectError};
use unilint_core::UnilintError;

use super::syntax::{self, TYPE_DECLARATION_KINDS};

/// A parsed C# source file: the text plus its syntax tree.
pub struct ParsedScript {
    path: PathBuf,
    file: String,
    source: String,
    tree: Tree,
    error_count: usize,
}

impl ParsedScript {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path rendered for reports.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn text(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Number of ERROR/MISSING nodes tree-sitter recovered from.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// All class, struct, interface and record declarations, nested ones included.
    pub fn type_declarations(&self) -> Vec<Node<'_>> {
        let mut declarations = Vec::new();
        syntax::walk_descendants(self.root(), |node| {
            if TYPE_DECLARATION_KINDS.contains(&node.kind()) {
                declarations.push(node);
            }
        });
        declarations
    }
}

impl std::fmt::Debug for ParsedScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedScript")
            .field("path", &self.path)
            .field("bytes", &self.source.len())
            .field("error_count", &self.error_count)
            .finish()
    }
}

/// Stateless C# parser. A fresh tree-sitter `Parser` is created per call, so a
/// single instance can be shared across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct CSharpParser;

impl CSharpParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse source text. Syntax errors do not fail the parse.
    pub fn parse(
        &self,
        path: impl AsRef<Path>,
        source: impl Into<String>,
    ) -> Result<ParsedScript, ParseError> {
        let path = path.as_ref();
        let source = source.into();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .map_err(|_| ParseError::GrammarNotFound {
                language: "c_sharp".to_string(),
            })?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::TreeSitterError {
                path: path.to_path_buf(),
                message: "tree-sitter returned None".to_string(),
            })?;

        let error_count = count_errors(tree.root_node());
        if error_count > 0 {
            tracing::warn!(
                file = %path.display(),
                error_count,
                "script parsed with syntax errors"
            );
        }

        Ok(ParsedScript {
            path: path.to_path_buf(),
            file: path.to_string_lossy().into_owned(),
            source,
            tree,
            error_count,
        })
    }

    /// Read and parse a file from disk. Invalid UTF-8 is replaced, not rejected.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParsedScript, UnilintError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ProjectError::NotFound { path: path.to_path_buf() }.into());
        }
        let bytes = std::fs::read(path).map_err(|source| ProjectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes).into_owned();
        Ok(self.parse(path, source)?)
    }
}

fn count_errors(root: Node<'_>) -> usize {
    if !root.has_error() {
        return 0;
    }
    let mut count = usize::from(root.is_error() || root.is_missing());
    syntax::walk_descendants(root, |node| {
        if node.is_error() || node.is_missing() {
            count += 1;
        }
    });
    count
}
