//! Type hierarchy resolution for component detection.
//!
//! Without a compiler there is no semantic model, so base types are resolved
//! through a [`TypeHierarchy`]: a name → declared-bases lookup. [`TypeIndex`]
//! builds one from parsed scripts; callers with better symbol information can
//! supply their own. Resolution fails closed: a base that cannot be looked up
//! ends the chain, and the type is not a component.

use smallvec::SmallVec;
use tree_sitter::Node;
use unilint_core::{FxHashMap, FxHashSet};

use crate::parsers::syntax;
use crate::parsers::ParsedScript;

/// Simple name of the runtime's component base class.
pub const COMPONENT_BASE: &str = "MonoBehaviour";
const QUALIFIED_COMPONENT_BASE: &str = "UnityEngine.MonoBehaviour";

/// Lookup of declared base types by simple type name.
pub trait TypeHierarchy: Send + Sync {
    /// Base-list entries of `type_name`, or `None` if the type is unknown.
    fn base_types(&self, type_name: &str) -> Option<&[String]>;
}

/// Syntactic type index over one or more scripts.
///
/// Partial declarations of the same name merge their base lists.
#[derive(Debug, Default, Clone)]
pub struct TypeIndex {
    bases: FxHashMap<String, SmallVec<[String; 2]>>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a single script.
    pub fn from_script(script: &ParsedScript) -> Self {
        let mut index = Self::new();
        index.add_script(script);
        index
    }

    /// Index every script of a project, so base classes declared in other
    /// files resolve.
    pub fn from_scripts<'a>(scripts: impl IntoIterator<Item = &'a ParsedScript>) -> Self {
        let mut index = Self::new();
        for script in scripts {
            index.add_script(script);
        }
        index
    }

    pub fn add_script(&mut self, script: &ParsedScript) {
        for decl in script.type_declarations() {
            let Some(name) = syntax::declared_name(decl, script.text()) else {
                continue;
            };
            let declared = syntax::declared_bases(decl, script.text());
            self.add_type(name, declared);
        }
    }

    /// Register a type by name with its declared bases.
    pub fn add_type<I, S>(&mut self, type_name: &str, bases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .bases
            .entry(normalize_type_name(type_name).to_string())
            .or_default();
        for base in bases {
            let base = base.into();
            if !entry.contains(&base) {
                entry.push(base);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl TypeHierarchy for TypeIndex {
    fn base_types(&self, type_name: &str) -> Option<&[String]> {
        self.bases
            .get(normalize_type_name(type_name))
            .map(|bases| bases.as_slice())
    }
}

/// Strip generic arguments and namespace/alias qualifiers:
/// `global::UnityEngine.MonoBehaviour` → `MonoBehaviour`, `Pool<T>` → `Pool`.
pub fn normalize_type_name(name: &str) -> &str {
    let name = name.trim();
    let name = match name.find('<') {
        Some(idx) => &name[..idx],
        None => name,
    };
    let name = match name.rfind("::") {
        Some(idx) => &name[idx + 2..],
        None => name,
    };
    let name = match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    };
    name.trim()
}

fn is_component_root(base: &str) -> bool {
    normalize_type_name(base) == COMPONENT_BASE || base.contains(QUALIFIED_COMPONENT_BASE)
}

/// Whether `type_name` transitively derives from the component base.
///
/// A type the hierarchy does not know is not a component.
pub fn is_component_type(type_name: &str, hierarchy: &dyn TypeHierarchy) -> bool {
    let mut visited = FxHashSet::default();
    visited.insert(normalize_type_name(type_name).to_string());
    match hierarchy.base_types(type_name) {
        Some(bases) => bases_reach_component(bases, hierarchy, &mut visited),
        None => false,
    }
}

/// Same as [`is_component_type`], starting from a declaration node's own base list.
pub fn is_component_declaration(
    decl: Node<'_>,
    source: &str,
    hierarchy: &dyn TypeHierarchy,
) -> bool {
    let bases = syntax::declared_bases(decl, source);
    let mut visited = FxHashSet::default();
    if let Some(name) = syntax::declared_name(decl, source) {
        visited.insert(normalize_type_name(name).to_string());
    }
    bases_reach_component(&bases, hierarchy, &mut visited)
}

fn bases_reach_component(
    bases: &[String],
    hierarchy: &dyn TypeHierarchy,
    visited: &mut FxHashSet<String>,
) -> bool {
    for base in bases {
        if is_component_root(base) {
            return true;
        }
        let simple = normalize_type_name(base);
        if !visited.insert(simple.to_string()) {
            continue;
        }
        if let Some(next) = hierarchy.base_types(simple) {
            if bases_reach_component(next, hierarchy, visited) {
                return true;
            }
        }
    }
    false
}
