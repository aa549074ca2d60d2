//! Trivia views over the SQL CST
//!
//! Whitespace and comments live in the tree as ordinary tokens, so nothing
//! here stores anything. These are read-only views that answer the usual
//! questions a tool asks: what trivia leads a token, what trails it on the
//! same line, and which comments a node carries.

use rowan::NodeOrToken;

use super::nodes::{SqlSyntaxNode, SqlSyntaxToken};
use super::syntax_kind::SqlSyntaxKind;

/// A single trivia token lifted out of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriviaPiece {
    pub kind: SqlSyntaxKind,
    pub text: String,
    pub range: rowan::TextRange,
}

impl TriviaPiece {
    fn from_token(token: &SqlSyntaxToken) -> Self {
        Self {
            kind: token.kind(),
            text: token.text().to_string(),
            range: token.text_range(),
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self.kind,
            SqlSyntaxKind::CommentLine | SqlSyntaxKind::CommentBlock
        )
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == SqlSyntaxKind::Whitespace
    }
}

/// Trivia tokens immediately before `token`, in source order.
///
/// Walks backwards across node boundaries until a non-trivia token or the
/// start of the file.
pub fn leading_trivia(token: &SqlSyntaxToken) -> Vec<TriviaPiece> {
    let mut pieces = Vec::new();
    let mut cursor = token.prev_token();
    while let Some(prev) = cursor {
        if !prev.kind().is_trivia() {
            break;
        }
        pieces.push(TriviaPiece::from_token(&prev));
        cursor = prev.prev_token();
    }
    pieces.reverse();
    pieces
}

/// Trivia tokens after `token` up to the end of its line.
///
/// A whitespace token containing a newline ends the run and is excluded; a
/// line comment ends the run and is included.
pub fn trailing_trivia(token: &SqlSyntaxToken) -> Vec<TriviaPiece> {
    let mut pieces = Vec::new();
    let mut cursor = token.next_token();
    while let Some(next) = cursor {
        if !next.kind().is_trivia() {
            break;
        }
        if next.kind() == SqlSyntaxKind::Whitespace && next.text().contains('\n') {
            break;
        }
        pieces.push(TriviaPiece::from_token(&next));
        if next.kind() == SqlSyntaxKind::CommentLine {
            break;
        }
        cursor = next.next_token();
    }
    pieces
}

/// All comment tokens inside `node`, in source order
pub fn comments_in(node: &SqlSyntaxNode) -> Vec<TriviaPiece> {
    node.descendants_with_tokens()
        .filter_map(|el| match el {
            NodeOrToken::Token(tok) if tok.kind().is_trivia() => {
                let piece = TriviaPiece::from_token(&tok);
                piece.is_comment().then_some(piece)
            }
            _ => None,
        })
        .collect()
}

/// The first non-trivia token of `node`
pub fn first_meaningful_token(node: &SqlSyntaxNode) -> Option<SqlSyntaxToken> {
    node.descendants_with_tokens().find_map(|el| match el {
        NodeOrToken::Token(tok) if !tok.kind().is_trivia() => Some(tok),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn token_with_text(root: &SqlSyntaxNode, text: &str) -> SqlSyntaxToken {
        root.descendants_with_tokens()
            .find_map(|el| match el {
                NodeOrToken::Token(tok) if tok.text() == text => Some(tok),
                _ => None,
            })
            .unwrap_or_else(|| panic!("no token {text:?}"))
    }

    #[test]
    fn leading_trivia_crosses_clause_boundaries() {
        let parsed = parse("SELECT a\n-- filter below\nFROM t");
        let root = parsed.syntax();
        let from = token_with_text(&root, "FROM");
        let lead = leading_trivia(&from);
        let kinds: Vec<_> = lead.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SqlSyntaxKind::Whitespace,
                SqlSyntaxKind::CommentLine,
                SqlSyntaxKind::Whitespace,
            ]
        );
        assert_eq!(lead[1].text, "-- filter below");
    }

    #[test]
    fn trailing_trivia_stops_at_newline() {
        let parsed = parse("SELECT a -- same line\nFROM t");
        let root = parsed.syntax();
        let a = token_with_text(&root, "a");
        let trail = trailing_trivia(&a);
        assert_eq!(trail.len(), 2);
        assert!(trail[1].is_comment());
        assert_eq!(trail[1].text, "-- same line");
    }

    #[test]
    fn comments_in_collects_all() {
        let parsed = parse("/* head */ SELECT a -- tail\nFROM t");
        let comments = comments_in(&parsed.syntax());
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "/* head */");
        assert_eq!(comments[1].text, "-- tail");
    }
}
