//! Typed aliases over the rowan tree

use super::language::SqlLanguage;

pub type SqlSyntaxNode = rowan::SyntaxNode<SqlLanguage>;
pub type SqlSyntaxToken = rowan::SyntaxToken<SqlLanguage>;
pub type SqlSyntaxElement = rowan::SyntaxElement<SqlLanguage>;
pub type SqlSyntaxNodeChildren = rowan::SyntaxNodeChildren<SqlLanguage>;
