//! Structural edits on the immutable CST
//!
//! Trees are never mutated in place. Every edit builds a new green tree
//! that shares all untouched subtrees with the original and returns the new
//! root; the original root keeps printing the original text. Edits are the
//! only operations in the crate that can fail: an unresolvable path or a
//! kind-incompatible replacement returns [`SquillError`] instead of
//! producing a tree that could not have been parsed.

use rowan::{GreenNode, GreenToken, Language, NodeOrToken};

use super::language::SqlLanguage;
use super::nodes::{SqlSyntaxElement, SqlSyntaxNode};
use super::syntax_kind::SqlSyntaxKind;
use crate::error::SquillError;
use crate::result::Result;

/// A green-side element, the unit of insertion
pub type GreenElement = NodeOrToken<GreenNode, GreenToken>;

/// Stable address of an element: child indices from the root, trivia
/// included in the numbering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The path of `node` relative to its tree's root
    pub fn of(node: &SqlSyntaxNode) -> Self {
        let mut indices = Vec::new();
        let mut cursor = node.clone();
        while let Some(parent) = cursor.parent() {
            indices.push(cursor.index());
            cursor = parent;
        }
        indices.reverse();
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Walk the path down from `root`
    pub fn resolve(&self, root: &SqlSyntaxNode) -> Result<SqlSyntaxElement> {
        let mut element: SqlSyntaxElement = NodeOrToken::Node(root.clone());
        for (depth, &index) in self.0.iter().enumerate() {
            let node = match &element {
                NodeOrToken::Node(node) => node.clone(),
                NodeOrToken::Token(_) => {
                    return Err(SquillError::PathNotFound { index, depth });
                }
            };
            element = node
                .children_with_tokens()
                .nth(index)
                .ok_or(SquillError::PathNotFound { index, depth })?;
        }
        Ok(element)
    }
}

/// Replace the element at `path` with a new green subtree.
///
/// Node targets accept a node of the same kind, or any expression kind when
/// the target is itself an expression. Token targets accept a token of the
/// same kind. Returns the root of the new tree.
pub fn replace(
    root: &SqlSyntaxNode,
    path: &NodePath,
    replacement: GreenElement,
) -> Result<SqlSyntaxNode> {
    let target = path.resolve(root)?;
    match (target, replacement) {
        (NodeOrToken::Node(node), NodeOrToken::Node(green)) => {
            let new_kind = SqlLanguage::kind_from_raw(green.kind());
            check_node_compat(node.kind(), new_kind)?;
            Ok(SqlSyntaxNode::new_root(node.replace_with(green)))
        }
        (NodeOrToken::Token(token), NodeOrToken::Token(green)) => {
            let new_kind = SqlLanguage::kind_from_raw(green.kind());
            if token.kind() != new_kind {
                return Err(SquillError::IncompatibleKind {
                    target: token.kind(),
                    replacement: new_kind,
                });
            }
            Ok(SqlSyntaxNode::new_root(token.replace_with(green)))
        }
        (NodeOrToken::Node(_), NodeOrToken::Token(_)) => Err(SquillError::invalid_edit(
            "cannot replace a node with a token",
        )),
        (NodeOrToken::Token(_), NodeOrToken::Node(_)) => Err(SquillError::invalid_edit(
            "cannot replace a token with a node",
        )),
    }
}

/// Insert `child` as the `index`-th child of the node at `parent_path`
pub fn insert_child(
    root: &SqlSyntaxNode,
    parent_path: &NodePath,
    index: usize,
    child: GreenElement,
) -> Result<SqlSyntaxNode> {
    let parent = resolve_node(root, parent_path)?;
    let len = parent.children_with_tokens().count();
    if index > len {
        return Err(SquillError::RangeOutOfBounds {
            start: index,
            end: index,
            len,
        });
    }
    let new_green = parent.green().splice_children(index..index, [child]);
    Ok(SqlSyntaxNode::new_root(parent.replace_with(new_green)))
}

/// Remove the children in `range` from the node at `parent_path`
pub fn remove_children(
    root: &SqlSyntaxNode,
    parent_path: &NodePath,
    range: std::ops::Range<usize>,
) -> Result<SqlSyntaxNode> {
    let parent = resolve_node(root, parent_path)?;
    let len = parent.children_with_tokens().count();
    if range.start > range.end || range.end > len {
        return Err(SquillError::RangeOutOfBounds {
            start: range.start,
            end: range.end,
            len,
        });
    }
    let new_green = parent
        .green()
        .splice_children(range, std::iter::empty::<GreenElement>());
    Ok(SqlSyntaxNode::new_root(parent.replace_with(new_green)))
}

fn resolve_node(root: &SqlSyntaxNode, path: &NodePath) -> Result<SqlSyntaxNode> {
    match path.resolve(root)? {
        NodeOrToken::Node(node) => Ok(node),
        NodeOrToken::Token(_) => Err(SquillError::invalid_edit(
            "path addresses a token where a node is required",
        )),
    }
}

fn check_node_compat(target: SqlSyntaxKind, replacement: SqlSyntaxKind) -> Result<()> {
    if target == replacement || (target.is_expr() && replacement.is_expr()) {
        return Ok(());
    }
    Err(SquillError::IncompatibleKind {
        target,
        replacement,
    })
}

/// Factories for small green subtrees used as replacements
pub mod factory {
    use super::*;
    use crate::cst::builder::CstBuilder;

    fn raw(kind: SqlSyntaxKind) -> rowan::SyntaxKind {
        SqlLanguage::kind_to_raw(kind)
    }

    /// `'value'` literal node; embedded quotes are doubled
    pub fn string_literal(value: &str) -> GreenElement {
        let escaped = value.replace('\'', "''");
        let mut builder = CstBuilder::new();
        builder.start_node(SqlSyntaxKind::Literal);
        builder.token(SqlSyntaxKind::StringLit, &format!("'{escaped}'"));
        builder.finish_node();
        NodeOrToken::Node(builder.finish_green())
    }

    /// Numeric literal node from its textual form
    pub fn number_literal(text: &str) -> GreenElement {
        let mut builder = CstBuilder::new();
        builder.start_node(SqlSyntaxKind::Literal);
        builder.token(SqlSyntaxKind::NumberLit, text);
        builder.finish_node();
        NodeOrToken::Node(builder.finish_green())
    }

    /// Column reference node from dotted parts
    pub fn column_ref(parts: &[&str]) -> GreenElement {
        let mut builder = CstBuilder::new();
        builder.start_node(SqlSyntaxKind::ColumnRef);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                builder.token(SqlSyntaxKind::Dot, ".");
            }
            builder.token(SqlSyntaxKind::Ident, part);
        }
        builder.finish_node();
        NodeOrToken::Node(builder.finish_green())
    }

    /// Placeholder node with the given full text, delimiters included
    pub fn placeholder(text: &str) -> GreenElement {
        let mut builder = CstBuilder::new();
        builder.start_node(SqlSyntaxKind::Placeholder);
        builder.token(SqlSyntaxKind::PlaceholderToken, text);
        builder.finish_node();
        NodeOrToken::Node(builder.finish_green())
    }

    /// Bare whitespace token
    pub fn whitespace(text: &str) -> GreenElement {
        NodeOrToken::Token(GreenToken::new(raw(SqlSyntaxKind::Whitespace), text))
    }

    /// Comma token
    pub fn comma() -> GreenElement {
        NodeOrToken::Token(GreenToken::new(raw(SqlSyntaxKind::Comma), ","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::printer::print;
    use crate::parse;

    fn find(root: &SqlSyntaxNode, kind: SqlSyntaxKind) -> SqlSyntaxNode {
        root.descendants()
            .find(|n| n.kind() == kind)
            .unwrap_or_else(|| panic!("no {kind:?}"))
    }

    #[test]
    fn replace_placeholder_with_literal() {
        let parsed = parse("SELECT * FROM t WHERE dt >= {{start_date}}");
        let root = parsed.syntax();
        let target = find(&root, SqlSyntaxKind::Placeholder);
        let path = NodePath::of(&target);

        let new_root = replace(&root, &path, factory::string_literal("2024-01-01")).unwrap();
        assert_eq!(
            print(&new_root),
            "SELECT * FROM t WHERE dt >= '2024-01-01'"
        );
        // The original tree is untouched
        assert_eq!(print(&root), "SELECT * FROM t WHERE dt >= {{start_date}}");
    }

    #[test]
    fn replace_rejects_incompatible_kinds() {
        let parsed = parse("SELECT a FROM t WHERE x = 1");
        let root = parsed.syntax();
        let where_clause = find(&root, SqlSyntaxKind::WhereClause);
        let path = NodePath::of(&where_clause);

        let err = replace(&root, &path, factory::number_literal("2")).unwrap_err();
        assert!(matches!(err, SquillError::IncompatibleKind { .. }));
    }

    #[test]
    fn replace_expression_with_different_expression_kind() {
        let parsed = parse("SELECT a FROM t");
        let root = parsed.syntax();
        let col = find(&root, SqlSyntaxKind::ColumnRef);
        let path = NodePath::of(&col);

        let new_root = replace(&root, &path, factory::number_literal("42")).unwrap();
        assert_eq!(print(&new_root), "SELECT 42 FROM t");
    }

    #[test]
    fn insert_select_list_item() {
        let parsed = parse("SELECT a FROM t");
        let root = parsed.syntax();
        let list = find(&root, SqlSyntaxKind::SelectList);
        let path = NodePath::of(&list);

        let len = list.children_with_tokens().count();
        let root = insert_child(&root, &path, len, factory::comma()).unwrap();
        let root = insert_child(&root, &path, len + 1, factory::whitespace(" ")).unwrap();
        let root = insert_child(&root, &path, len + 2, factory::column_ref(&["b"])).unwrap();
        assert_eq!(print(&root), "SELECT a, b FROM t");
    }

    #[test]
    fn remove_children_drops_exact_text() {
        let parsed = parse("SELECT a, b FROM t");
        let root = parsed.syntax();
        let list = find(&root, SqlSyntaxKind::SelectList);
        let path = NodePath::of(&list);

        // Children of the list: ColumnRef(a), ",", ws, ColumnRef(b)
        let len = list.children_with_tokens().count();
        let new_root = remove_children(&root, &path, 1..len).unwrap();
        assert_eq!(print(&new_root), "SELECT a FROM t");
    }

    #[test]
    fn path_round_trips_through_resolution() {
        let parsed = parse("SELECT a, b FROM t WHERE a > 1");
        let root = parsed.syntax();
        for node in root.descendants() {
            let path = NodePath::of(&node);
            let resolved = path.resolve(&root).unwrap();
            assert_eq!(resolved.text_range(), node.text_range());
        }
    }

    #[test]
    fn stale_path_errors() {
        let parsed = parse("SELECT a FROM t");
        let root = parsed.syntax();
        let err = NodePath::new(vec![0, 99]).resolve(&root).unwrap_err();
        assert!(matches!(
            err,
            SquillError::PathNotFound { index: 99, depth: 1 }
        ));
    }

    #[test]
    fn out_of_bounds_ranges_error() {
        let parsed = parse("SELECT a FROM t");
        let root = parsed.syntax();
        let list = find(&root, SqlSyntaxKind::SelectList);
        let path = NodePath::of(&list);
        let err = remove_children(&root, &path, 0..50).unwrap_err();
        assert!(matches!(err, SquillError::RangeOutOfBounds { .. }));
    }
}
