//! Node helpers over the tree-sitter-c-sharp grammar.

use smallvec::SmallVec;
use tree_sitter::Node;

/// Declarations that introduce a named type with an optional base list.
pub const TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "struct_declaration",
    "interface_declaration",
    "record_declaration",
];

/// String literal node kinds (regular, verbatim, raw).
pub const STRING_LITERAL_KINDS: &[&str] = &[
    "string_literal",
    "verbatim_string_literal",
    "raw_string_literal",
];

/// Pre-order walk over every descendant of `node`, excluding `node` itself.
pub fn walk_descendants<'t>(node: Node<'t>, mut visit: impl FnMut(Node<'t>)) {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return;
    }
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() || cursor.node() == node {
                return;
            }
        }
    }
}

/// Source text covered by a node.
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// 0-based (line, column) of a node's start, with the column counted in characters.
pub fn start_position(node: Node<'_>, source: &str) -> (u32, u32) {
    let point = node.start_position();
    let start = node.start_byte();
    let line_start = start.saturating_sub(point.column);
    let column = source
        .get(line_start..start)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(point.column);
    (point.row as u32, column as u32)
}

/// Declared name of a type or method declaration.
pub fn declared_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    node.child_by_field_name("name")
        .map(|name| node_text(name, source))
        .filter(|name| !name.is_empty())
}

/// Entries of a declaration's base list, as written (`UnityEngine.MonoBehaviour`,
/// `IComparable<T>`, ...).
pub fn declared_bases(node: Node<'_>, source: &str) -> SmallVec<[String; 2]> {
    let mut bases = SmallVec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() != "base_list" {
            continue;
        }
        let mut list_cursor = child.walk();
        for entry in child.named_children(&mut list_cursor) {
            // Record primary constructors: `: Base(arg)` wraps the type.
            let type_node = if entry.kind() == "primary_constructor_base_type" {
                entry.named_child(0).unwrap_or(entry)
            } else {
                entry
            };
            let text = node_text(type_node, source).trim();
            if !text.is_empty() {
                bases.push(text.to_string());
            }
        }
    }
    bases
}

/// Nearest enclosing type declaration of a node.
pub fn enclosing_type(node: Node<'_>) -> Option<Node<'_>> {
    let mut current = node.parent();
    while let Some(parent) = current {
        if TYPE_DECLARATION_KINDS.contains(&parent.kind()) {
            return Some(parent);
        }
        current = parent.parent();
    }
    None
}

/// Simple name of an identifier, generic name, or the name part of a member access.
///
/// `GetComponent`, `GetComponent<Rigidbody>` and `gameObject.GetComponent<T>`
/// all resolve to `GetComponent`.
pub fn simple_name<'s>(node: Node<'_>, source: &'s str) -> Option<&'s str> {
    match node.kind() {
        "identifier" => Some(node_text(node, source)),
        "generic_name" => {
            let mut cursor = node.walk();
            let ident = node
                .named_children(&mut cursor)
                .find(|child| child.kind() == "identifier");
            ident.map(|ident| node_text(ident, source))
        }
        "member_access_expression" => node
            .child_by_field_name("name")
            .and_then(|name| simple_name(name, source)),
        _ => None,
    }
}

/// Callee simple name of an `invocation_expression`.
pub fn callee_name<'s>(invocation: Node<'_>, source: &'s str) -> Option<&'s str> {
    invocation
        .child_by_field_name("function")
        .and_then(|function| simple_name(function, source))
}

/// Receiver text and member name of a `member_access_expression`.
pub fn member_access_parts<'s>(node: Node<'_>, source: &'s str) -> Option<(&'s str, &'s str)> {
    if node.kind() != "member_access_expression" {
        return None;
    }
    let receiver = node.child_by_field_name("expression")?;
    let name = node.child_by_field_name("name")?;
    Some((node_text(receiver, source).trim(), simple_name(name, source)?))
}

pub fn is_string_literal(node: Node<'_>) -> bool {
    STRING_LITERAL_KINDS.contains(&node.kind())
}

/// True for a binary `+` expression.
pub fn is_add_expression(node: Node<'_>) -> bool {
    node.kind() == "binary_expression"
        && node
            .child_by_field_name("operator")
            .is_some_and(|op| op.kind() == "+")
}
