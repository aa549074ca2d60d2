//! Binding powers for the expression parser

use crate::cst::lexer::CstToken;
use crate::cst::syntax_kind::SqlSyntaxKind;

/// Precedence levels for column expressions, weakest first.
///
/// `AsAlias` sits below the logical operators so that a trailing bare
/// identifier in a select list binds as an alias of the whole expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest = 0,
    AscDesc = 1,
    AsAlias = 2,
    Or = 3,
    And = 4,
    Not = 5,
    Is = 6,
    Comparison = 7,
    BetweenInLike = 8,
    Concat = 9,
    Sum = 10,
    Product = 11,
    Prefix = 12,
    Cast = 13,
    Call = 14,
}

/// The binding power of `token` when it appears in infix position.
///
/// `in_select_list` enables the alias shorthand: `AS` and a bare identifier
/// only act as infix alias operators directly inside a select list.
pub fn infix_precedence(token: &CstToken, in_select_list: bool) -> Precedence {
    match token.kind {
        SqlSyntaxKind::Keyword => {
            let upper = token.text.to_ascii_uppercase();
            match upper.as_str() {
                "ASC" | "DESC" => Precedence::AscDesc,
                "AS" if in_select_list => Precedence::AsAlias,
                "OR" => Precedence::Or,
                "AND" => Precedence::And,
                "NOT" => Precedence::Not,
                "IS" => Precedence::Is,
                "BETWEEN" | "IN" | "LIKE" | "ILIKE" => Precedence::BetweenInLike,
                _ => Precedence::Lowest,
            }
        }
        SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent if in_select_list => Precedence::AsAlias,
        SqlSyntaxKind::Eq
        | SqlSyntaxKind::NotEq
        | SqlSyntaxKind::Lt
        | SqlSyntaxKind::LtEq
        | SqlSyntaxKind::Gt
        | SqlSyntaxKind::GtEq => Precedence::Comparison,
        SqlSyntaxKind::Concat => Precedence::Concat,
        SqlSyntaxKind::Plus | SqlSyntaxKind::Minus => Precedence::Sum,
        SqlSyntaxKind::Star | SqlSyntaxKind::Slash | SqlSyntaxKind::Percent => Precedence::Product,
        SqlSyntaxKind::CastColons => Precedence::Cast,
        SqlSyntaxKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: SqlSyntaxKind, text: &str) -> CstToken {
        CstToken::new(kind, text, 0..text.len())
    }

    #[test]
    fn ladder_ordering() {
        assert!(Precedence::Or < Precedence::And);
        assert!(Precedence::And < Precedence::Comparison);
        assert!(Precedence::Comparison < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Cast);
    }

    #[test]
    fn keyword_operators_are_case_insensitive() {
        assert_eq!(
            infix_precedence(&tok(SqlSyntaxKind::Keyword, "and"), false),
            Precedence::And
        );
        assert_eq!(
            infix_precedence(&tok(SqlSyntaxKind::Keyword, "Between"), false),
            Precedence::BetweenInLike
        );
    }

    #[test]
    fn alias_shorthand_only_in_select_list() {
        let ident = tok(SqlSyntaxKind::Ident, "total");
        assert_eq!(infix_precedence(&ident, true), Precedence::AsAlias);
        assert_eq!(infix_precedence(&ident, false), Precedence::Lowest);
        let as_kw = tok(SqlSyntaxKind::Keyword, "AS");
        assert_eq!(infix_precedence(&as_kw, true), Precedence::AsAlias);
        assert_eq!(infix_precedence(&as_kw, false), Precedence::Lowest);
    }
}
