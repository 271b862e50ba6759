//! C# program-model provider built on tree-sitter.

pub mod csharp;
pub mod syntax;

pub use csharp::{CSharpParser, ParsedScript};
