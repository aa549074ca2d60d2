//! Typed AST layer over the CST
//!
//! Ergonomic, type-safe wrappers over raw syntax nodes. Each wrapper is a
//! zero-cost view: casting checks the node kind and accessors navigate the
//! children on demand. The underlying CST stays lossless; these views just
//! make the common questions cheap to ask.

use super::nodes::{SqlSyntaxNode, SqlSyntaxToken};
use super::syntax_kind::SqlSyntaxKind;

/// Trait for casting CST nodes to typed wrappers
pub trait AstNode: Sized {
    fn can_cast(kind: SqlSyntaxKind) -> bool;
    fn cast(node: SqlSyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SqlSyntaxNode;
}

fn child_of_kind(parent: &SqlSyntaxNode, kind: SqlSyntaxKind) -> Option<SqlSyntaxNode> {
    parent.children().find(|n| n.kind() == kind)
}

fn first_expr_child(parent: &SqlSyntaxNode) -> Option<SqlSyntaxNode> {
    parent.children().find(|n| n.kind().is_expr())
}

fn token_of_kind(parent: &SqlSyntaxNode, kind: SqlSyntaxKind) -> Option<SqlSyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

fn has_keyword(parent: &SqlSyntaxNode, kw: &str) -> bool {
    parent
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .any(|t| t.kind() == SqlSyntaxKind::Keyword && t.text().eq_ignore_ascii_case(kw))
}

macro_rules! ast_node {
    ($(#[$doc:meta])* $name:ident, $kind:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            syntax: SqlSyntaxNode,
        }

        impl AstNode for $name {
            fn can_cast(kind: SqlSyntaxKind) -> bool {
                kind == SqlSyntaxKind::$kind
            }

            fn cast(node: SqlSyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self { syntax: node })
            }

            fn syntax(&self) -> &SqlSyntaxNode {
                &self.syntax
            }
        }
    };
}

ast_node!(
    /// Root node covering the whole input
    SourceFile,
    SourceFile
);

impl SourceFile {
    pub fn statements(&self) -> impl Iterator<Item = SelectStatement> + '_ {
        self.syntax.children().filter_map(SelectStatement::cast)
    }
}

ast_node!(
    /// One SELECT statement, optionally headed by WITH
    SelectStatement,
    SelectStatement
);

impl SelectStatement {
    pub fn with_clause(&self) -> Option<WithClause> {
        child_of_kind(&self.syntax, SqlSyntaxKind::WithClause).and_then(WithClause::cast)
    }

    pub fn select_list(&self) -> Option<SelectList> {
        child_of_kind(&self.syntax, SqlSyntaxKind::SelectList).and_then(SelectList::cast)
    }

    pub fn from_clause(&self) -> Option<FromClause> {
        child_of_kind(&self.syntax, SqlSyntaxKind::FromClause).and_then(FromClause::cast)
    }

    pub fn where_clause(&self) -> Option<WhereClause> {
        child_of_kind(&self.syntax, SqlSyntaxKind::WhereClause).and_then(WhereClause::cast)
    }

    pub fn group_by_clause(&self) -> Option<SqlSyntaxNode> {
        child_of_kind(&self.syntax, SqlSyntaxKind::GroupByClause)
    }

    pub fn having_clause(&self) -> Option<SqlSyntaxNode> {
        child_of_kind(&self.syntax, SqlSyntaxKind::HavingClause)
    }

    pub fn order_by_clause(&self) -> Option<OrderByClause> {
        child_of_kind(&self.syntax, SqlSyntaxKind::OrderByClause).and_then(OrderByClause::cast)
    }

    pub fn limit_clause(&self) -> Option<SqlSyntaxNode> {
        child_of_kind(&self.syntax, SqlSyntaxKind::LimitClause)
    }

    pub fn offset_clause(&self) -> Option<SqlSyntaxNode> {
        child_of_kind(&self.syntax, SqlSyntaxKind::OffsetClause)
    }

    /// True when the select list starts with DISTINCT
    pub fn is_distinct(&self) -> bool {
        has_keyword(&self.syntax, "DISTINCT")
    }

    /// The continuation statement after UNION / INTERSECT / EXCEPT, if any
    pub fn set_op_continuation(&self) -> Option<SelectStatement> {
        child_of_kind(&self.syntax, SqlSyntaxKind::SelectStatement)
            .and_then(SelectStatement::cast)
    }
}

ast_node!(
    /// `WITH [RECURSIVE] name AS (...), ...`
    WithClause,
    WithClause
);

impl WithClause {
    pub fn is_recursive(&self) -> bool {
        has_keyword(&self.syntax, "RECURSIVE")
    }

    pub fn ctes(&self) -> impl Iterator<Item = CteDefinition> + '_ {
        self.syntax.children().filter_map(CteDefinition::cast)
    }
}

ast_node!(
    /// One common table expression
    CteDefinition,
    CteDefinition
);

impl CteDefinition {
    /// The CTE's declared name
    pub fn name(&self) -> Option<String> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| {
                matches!(
                    t.kind(),
                    SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent
                )
            })
            .map(|t| t.text().to_string())
    }

    /// The parenthesized body statement
    pub fn body(&self) -> Option<SelectStatement> {
        child_of_kind(&self.syntax, SqlSyntaxKind::SelectStatement)
            .and_then(SelectStatement::cast)
    }

    pub fn column_list(&self) -> Option<SqlSyntaxNode> {
        child_of_kind(&self.syntax, SqlSyntaxKind::ColumnList)
    }
}

ast_node!(
    /// The projection list of a SELECT
    SelectList,
    SelectList
);

impl SelectList {
    /// Expression items, opaque recovery spans excluded
    pub fn items(&self) -> impl Iterator<Item = SqlSyntaxNode> + '_ {
        self.syntax.children().filter(|n| n.kind().is_expr())
    }
}

ast_node!(
    /// `FROM tables and joins`
    FromClause,
    FromClause
);

impl FromClause {
    pub fn tables(&self) -> impl Iterator<Item = TableRef> + '_ {
        self.syntax.children().filter_map(TableRef::cast)
    }

    pub fn joins(&self) -> impl Iterator<Item = SqlSyntaxNode> + '_ {
        self.syntax
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::JoinClause)
    }
}

ast_node!(
    /// `WHERE condition`
    WhereClause,
    WhereClause
);

impl WhereClause {
    pub fn condition(&self) -> Option<SqlSyntaxNode> {
        first_expr_child(&self.syntax)
    }
}

ast_node!(
    /// `ORDER BY term, ...`
    OrderByClause,
    OrderByClause
);

impl OrderByClause {
    pub fn terms(&self) -> impl Iterator<Item = OrderingTerm> + '_ {
        self.syntax.children().filter_map(OrderingTerm::cast)
    }
}

ast_node!(
    /// One ordering term: expression plus direction and null placement
    OrderingTerm,
    OrderingTerm
);

impl OrderingTerm {
    pub fn expr(&self) -> Option<SqlSyntaxNode> {
        first_expr_child(&self.syntax)
    }

    pub fn is_descending(&self) -> bool {
        has_keyword(&self.syntax, "DESC")
    }
}

ast_node!(
    /// Function invocation, window-less
    FunctionCall,
    FunctionCall
);

impl FunctionCall {
    /// The function's (possibly qualified) name as written
    pub fn name(&self) -> Option<String> {
        child_of_kind(&self.syntax, SqlSyntaxKind::ColumnRef).map(|n| n.text().to_string())
    }

    pub fn args(&self) -> impl Iterator<Item = SqlSyntaxNode> + '_ {
        self.syntax
            .children()
            .skip(1) // the callee
            .filter(|n| n.kind().is_expr())
    }
}

ast_node!(
    /// `call OVER (window)`
    WindowFunctionCall,
    WindowFunctionCall
);

impl WindowFunctionCall {
    pub fn function(&self) -> Option<FunctionCall> {
        child_of_kind(&self.syntax, SqlSyntaxKind::FunctionCall).and_then(FunctionCall::cast)
    }

    pub fn window(&self) -> Option<SqlSyntaxNode> {
        child_of_kind(&self.syntax, SqlSyntaxKind::WindowDefinition)
    }
}

ast_node!(
    /// `expr [AS] name`
    AliasExpr,
    AliasExpr
);

impl AliasExpr {
    pub fn expr(&self) -> Option<SqlSyntaxNode> {
        first_expr_child(&self.syntax)
    }

    /// The alias identifier, quotes preserved if present
    pub fn alias_name(&self) -> Option<String> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| {
                matches!(
                    t.kind(),
                    SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent
                )
            })
            .last()
            .map(|t| t.text().to_string())
    }
}

ast_node!(
    /// Opaque template placeholder
    Placeholder,
    Placeholder
);

impl Placeholder {
    /// The full placeholder text, delimiters included
    pub fn text(&self) -> String {
        self.syntax.text().to_string()
    }

    /// The text between the delimiters, surrounding whitespace trimmed
    pub fn inner_text(&self, syntax: &crate::config::PlaceholderSyntax) -> String {
        let text = self.text();
        text.strip_prefix(syntax.open.as_str())
            .and_then(|t| t.strip_suffix(syntax.close.as_str()))
            .unwrap_or(&text)
            .trim()
            .to_string()
    }
}

ast_node!(
    /// Table name in a FROM or JOIN
    TableRef,
    TableRef
);

impl TableRef {
    /// Dotted name exactly as written
    pub fn name(&self) -> String {
        self.syntax.text().to_string()
    }
}

ast_node!(
    /// Column reference, possibly qualified
    ColumnRef,
    ColumnRef
);

impl ColumnRef {
    /// Name parts between the dots
    pub fn parts(&self) -> Vec<String> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| {
                matches!(
                    t.kind(),
                    SqlSyntaxKind::Ident
                        | SqlSyntaxKind::QuotedIdent
                        | SqlSyntaxKind::Keyword
                        | SqlSyntaxKind::Star
                )
            })
            .map(|t| t.text().to_string())
            .collect()
    }
}

ast_node!(
    /// Binary operation, keyword operators included
    BinaryExpr,
    BinaryExpr
);

impl BinaryExpr {
    pub fn lhs(&self) -> Option<SqlSyntaxNode> {
        self.syntax.children().find(|n| n.kind().is_expr())
    }

    pub fn rhs(&self) -> Option<SqlSyntaxNode> {
        self.syntax
            .children()
            .filter(|n| n.kind().is_expr())
            .nth(1)
    }

    /// The operator token between the operands
    pub fn operator(&self) -> Option<SqlSyntaxToken> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| !t.kind().is_trivia())
    }
}

ast_node!(
    /// Parenthesized SELECT used as an expression or table
    Subquery,
    Subquery
);

impl Subquery {
    pub fn statement(&self) -> Option<SelectStatement> {
        child_of_kind(&self.syntax, SqlSyntaxKind::SelectStatement)
            .and_then(SelectStatement::cast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn stmt(source: &str) -> SelectStatement {
        let parsed = parse(source);
        SourceFile::cast(parsed.syntax())
            .unwrap()
            .statements()
            .next()
            .unwrap()
    }

    #[test]
    fn navigates_statement_structure() {
        let s = stmt("WITH x AS (SELECT 1) SELECT DISTINCT a, b FROM t WHERE a > 1 ORDER BY a DESC LIMIT 5");
        assert!(s.is_distinct());
        let with = s.with_clause().unwrap();
        assert!(!with.is_recursive());
        let cte = with.ctes().next().unwrap();
        assert_eq!(cte.name().unwrap(), "x");
        assert!(cte.body().is_some());

        assert_eq!(s.select_list().unwrap().items().count(), 2);
        assert_eq!(s.from_clause().unwrap().tables().next().unwrap().name(), "t");
        assert!(s.where_clause().unwrap().condition().is_some());
        let term = s.order_by_clause().unwrap().terms().next().unwrap();
        assert!(term.is_descending());
        assert!(s.limit_clause().is_some());
        assert!(s.offset_clause().is_none());
    }

    #[test]
    fn alias_and_function_views() {
        let s = stmt("SELECT count(*) AS n FROM t");
        let item = s.select_list().unwrap().items().next().unwrap();
        let alias = AliasExpr::cast(item).unwrap();
        assert_eq!(alias.alias_name().unwrap(), "n");
        let call = FunctionCall::cast(alias.expr().unwrap()).unwrap();
        assert_eq!(call.name().unwrap(), "count");
    }

    #[test]
    fn window_view() {
        let s = stmt("SELECT rank() OVER (ORDER BY x) FROM t");
        let item = s.select_list().unwrap().items().next().unwrap();
        let win = WindowFunctionCall::cast(item).unwrap();
        assert_eq!(win.function().unwrap().name().unwrap(), "rank");
        assert!(win.window().is_some());
    }

    #[test]
    fn column_parts() {
        let s = stmt("SELECT schema.t.col FROM t");
        let item = s.select_list().unwrap().items().next().unwrap();
        let col = ColumnRef::cast(item).unwrap();
        assert_eq!(col.parts(), vec!["schema", "t", "col"]);
    }

    #[test]
    fn cast_rejects_wrong_kind() {
        let parsed = parse("SELECT 1");
        assert!(WhereClause::cast(parsed.syntax()).is_none());
    }
}
