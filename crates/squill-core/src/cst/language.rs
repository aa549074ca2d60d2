//! rowan language binding for SQL

use rowan::Language;

use super::syntax_kind::SqlSyntaxKind;

/// The SQL language definition used to type the rowan tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SqlLanguage {}

impl Language for SqlLanguage {
    type Kind = SqlSyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        match raw.0 {
            0 => SqlSyntaxKind::Whitespace,
            1 => SqlSyntaxKind::CommentLine,
            2 => SqlSyntaxKind::CommentBlock,

            10 => SqlSyntaxKind::Keyword,
            11 => SqlSyntaxKind::Ident,
            12 => SqlSyntaxKind::QuotedIdent,
            13 => SqlSyntaxKind::NumberLit,
            14 => SqlSyntaxKind::StringLit,
            15 => SqlSyntaxKind::BoolLit,
            16 => SqlSyntaxKind::PlaceholderToken,

            100 => SqlSyntaxKind::Comma,
            101 => SqlSyntaxKind::Dot,
            102 => SqlSyntaxKind::Semicolon,
            103 => SqlSyntaxKind::LParen,
            104 => SqlSyntaxKind::RParen,
            105 => SqlSyntaxKind::Plus,
            106 => SqlSyntaxKind::Minus,
            107 => SqlSyntaxKind::Star,
            108 => SqlSyntaxKind::Slash,
            109 => SqlSyntaxKind::Percent,
            110 => SqlSyntaxKind::Eq,
            111 => SqlSyntaxKind::NotEq,
            112 => SqlSyntaxKind::Lt,
            113 => SqlSyntaxKind::LtEq,
            114 => SqlSyntaxKind::Gt,
            115 => SqlSyntaxKind::GtEq,
            116 => SqlSyntaxKind::CastColons,
            117 => SqlSyntaxKind::Concat,

            200 => SqlSyntaxKind::SourceFile,
            201 => SqlSyntaxKind::SelectStatement,
            202 => SqlSyntaxKind::WithClause,
            203 => SqlSyntaxKind::CteDefinition,
            204 => SqlSyntaxKind::ColumnList,
            205 => SqlSyntaxKind::SelectList,
            206 => SqlSyntaxKind::FromClause,
            207 => SqlSyntaxKind::JoinClause,
            208 => SqlSyntaxKind::WhereClause,
            209 => SqlSyntaxKind::GroupByClause,
            210 => SqlSyntaxKind::HavingClause,
            211 => SqlSyntaxKind::OrderByClause,
            212 => SqlSyntaxKind::OrderingTerm,
            213 => SqlSyntaxKind::LimitClause,
            214 => SqlSyntaxKind::OffsetClause,
            215 => SqlSyntaxKind::WindowDefinition,
            216 => SqlSyntaxKind::FrameClause,

            230 => SqlSyntaxKind::Literal,
            231 => SqlSyntaxKind::ColumnRef,
            232 => SqlSyntaxKind::BinaryExpr,
            233 => SqlSyntaxKind::UnaryExpr,
            234 => SqlSyntaxKind::FunctionCall,
            235 => SqlSyntaxKind::WindowFunctionCall,
            236 => SqlSyntaxKind::CaseExpr,
            237 => SqlSyntaxKind::WhenArm,
            238 => SqlSyntaxKind::ElseArm,
            239 => SqlSyntaxKind::Subquery,
            240 => SqlSyntaxKind::ParenExpr,
            241 => SqlSyntaxKind::CastExpr,
            242 => SqlSyntaxKind::BetweenExpr,
            243 => SqlSyntaxKind::InExpr,
            244 => SqlSyntaxKind::AliasExpr,
            245 => SqlSyntaxKind::Placeholder,
            246 => SqlSyntaxKind::TableRef,
            247 => SqlSyntaxKind::TableAlias,

            400 => SqlSyntaxKind::OpaqueSpan,
            402 => SqlSyntaxKind::Eof,
            _ => SqlSyntaxKind::Unknown,
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}
