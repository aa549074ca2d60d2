//! Syntax kinds for the SQL CST
//!
//! One closed enumeration covers both token kinds (trivia, keywords,
//! literals, punctuation) and node kinds (clauses, expressions). The numeric
//! values are stable because they cross the `rowan::SyntaxKind` boundary.

/// All token and node kinds in the SQL syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SqlSyntaxKind {
    // Trivia (0-9)
    Whitespace = 0,
    CommentLine = 1,
    CommentBlock = 2,

    // Words and literals (10-29)
    /// Any reserved word, case-insensitive; original casing kept in text.
    Keyword = 10,
    Ident = 11,
    /// Double-quoted identifier, quotes included in text.
    QuotedIdent = 12,
    /// Integer, decimal, or exponent numeric literal.
    NumberLit = 13,
    /// Single-quoted or dollar-quoted string, delimiters included in text.
    StringLit = 14,
    /// TRUE or FALSE in any casing.
    BoolLit = 15,
    /// A template placeholder such as `{{start_date}}`, delimiters included.
    /// The inner text is never re-lexed as SQL.
    PlaceholderToken = 16,

    // Punctuation and operators (100-129)
    Comma = 100,
    Dot = 101,
    Semicolon = 102,
    LParen = 103,
    RParen = 104,
    Plus = 105,
    Minus = 106,
    Star = 107,
    Slash = 108,
    Percent = 109,
    Eq = 110,
    /// `<>` or `!=`
    NotEq = 111,
    Lt = 112,
    LtEq = 113,
    Gt = 114,
    GtEq = 115,
    /// `::`
    CastColons = 116,
    /// `||`
    Concat = 117,

    // Statement and clause nodes (200-229)
    SourceFile = 200,
    SelectStatement = 201,
    WithClause = 202,
    CteDefinition = 203,
    /// Optional `(col, ...)` list after a CTE name.
    ColumnList = 204,
    SelectList = 205,
    FromClause = 206,
    JoinClause = 207,
    WhereClause = 208,
    GroupByClause = 209,
    HavingClause = 210,
    OrderByClause = 211,
    OrderingTerm = 212,
    LimitClause = 213,
    OffsetClause = 214,
    WindowDefinition = 215,
    FrameClause = 216,

    // Expression nodes (230-259)
    Literal = 230,
    ColumnRef = 231,
    BinaryExpr = 232,
    UnaryExpr = 233,
    FunctionCall = 234,
    WindowFunctionCall = 235,
    CaseExpr = 236,
    WhenArm = 237,
    ElseArm = 238,
    Subquery = 239,
    ParenExpr = 240,
    CastExpr = 241,
    BetweenExpr = 242,
    InExpr = 243,
    AliasExpr = 244,
    Placeholder = 245,
    TableRef = 246,
    TableAlias = 247,

    // Recovery and special (400+)
    /// Verbatim token run for anything outside the recognized grammar.
    OpaqueSpan = 400,
    /// Single unclassifiable character.
    Unknown = 401,
    Eof = 402,
}

impl SqlSyntaxKind {
    /// Whitespace or comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            SqlSyntaxKind::Whitespace | SqlSyntaxKind::CommentLine | SqlSyntaxKind::CommentBlock
        )
    }

    /// Node kinds that may occupy an expression slot.
    pub fn is_expr(self) -> bool {
        matches!(
            self,
            SqlSyntaxKind::Literal
                | SqlSyntaxKind::ColumnRef
                | SqlSyntaxKind::BinaryExpr
                | SqlSyntaxKind::UnaryExpr
                | SqlSyntaxKind::FunctionCall
                | SqlSyntaxKind::WindowFunctionCall
                | SqlSyntaxKind::CaseExpr
                | SqlSyntaxKind::Subquery
                | SqlSyntaxKind::ParenExpr
                | SqlSyntaxKind::CastExpr
                | SqlSyntaxKind::BetweenExpr
                | SqlSyntaxKind::InExpr
                | SqlSyntaxKind::AliasExpr
                | SqlSyntaxKind::Placeholder
        )
    }

    /// True for kinds that represent tokens rather than nodes.
    pub fn is_token(self) -> bool {
        (self as u16) < 200 || matches!(self, SqlSyntaxKind::Unknown | SqlSyntaxKind::Eof)
    }
}

impl From<SqlSyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SqlSyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}

/// Reserved words recognized case-insensitively by the lexer.
///
/// Drawn from the Postgres/Redshift reserved-word list. Sorted so the lexer
/// can binary-search; `keywords_are_sorted` below keeps that honest.
/// TRUE and FALSE are absent on purpose: they lex as [`SqlSyntaxKind::BoolLit`].
pub const KEYWORDS: &[&str] = &[
    "AES128", "AES256", "ALL", "ALLOWOVERWRITE", "ANALYSE", "ANALYZE",
    "AND", "ANY", "ARRAY", "AS", "ASC", "AUTHORIZATION",
    "AVG", "AZ64", "BACKUP", "BETWEEN", "BINARY", "BLANKSASNULL",
    "BOTH", "BY", "BYTEDICT", "BZIP2", "CASE", "CAST",
    "CHECK", "COLLATE", "COLUMN", "CONSTRAINT", "COUNT", "CREATE",
    "CREDENTIALS", "CROSS", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
    "CURRENT_USER_ID", "DEFAULT", "DEFERRABLE", "DEFLATE", "DEFRAG", "DELTA",
    "DELTA32K", "DESC", "DISABLE", "DISTINCT", "DO", "ELSE",
    "EMPTYASNULL", "ENABLE", "ENCODE", "ENCRYPT", "ENCRYPTION", "END",
    "EXCEPT", "EXPLICIT", "FIRST", "FOLLOWING", "FOR", "FOREIGN",
    "FREEZE", "FROM", "FULL", "GLOBALDICT256", "GLOBALDICT64K", "GRANT",
    "GROUP", "GROUPS", "GZIP", "HAVING", "IDENTITY", "IGNORE",
    "ILIKE", "IN", "INITIALLY", "INNER", "INTERSECT", "INTO",
    "IS", "ISNULL", "JOIN", "LANGUAGE", "LAST", "LEADING",
    "LEFT", "LIKE", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "LUN",
    "LUNS", "LZO", "LZOP", "MINUS", "MOSTLY13", "MOSTLY32",
    "MOSTLY8", "NATURAL", "NEW", "NOT", "NOTNULL", "NULL",
    "NULLS", "OFF", "OFFLINE", "OFFSET", "OID", "OLD",
    "ON", "ONLY", "OPEN", "OR", "ORDER", "OUTER",
    "OVER", "OVERLAPS", "PARALLEL", "PARTITION", "PERCENT", "PERMISSIONS",
    "PLACING", "PRECEDING", "PRIMARY", "RANGE", "RAW", "READRATIO",
    "RECOVER", "RECURSIVE", "REFERENCES", "REJECTLOG", "RESORT", "RESPECT",
    "RESTORE", "RIGHT", "ROW", "ROWS", "SELECT", "SESSION_USER",
    "SIMILAR", "SNAPSHOT", "SOME", "SUM", "SYSDATE", "SYSTEM",
    "TABLE", "TAG", "TDES", "TEXT255", "TEXT32K", "THEN",
    "TIMESTAMP", "TO", "TOP", "TRAILING", "TRUNCATECOLUMNS", "UNBOUNDED",
    "UNION", "UNIQUE", "USER", "USING", "VERBOSE", "WALLET",
    "WHEN", "WHERE", "WITH", "WITHOUT",
];

/// True when `word` (any casing) is a reserved word.
pub fn is_keyword(word: &str) -> bool {
    let upper = word.to_ascii_uppercase();
    KEYWORDS.binary_search(&upper.as_str()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_sorted() {
        assert!(
            KEYWORDS.windows(2).all(|w| w[0] < w[1]),
            "KEYWORDS must stay sorted for binary search"
        );
    }

    #[test]
    fn keyword_lookup_is_case_insensitive() {
        assert!(is_keyword("select"));
        assert!(is_keyword("Select"));
        assert!(is_keyword("PARTITION"));
        assert!(!is_keyword("tablesample"));
        assert!(!is_keyword("true"));
    }

    #[test]
    fn trivia_classification() {
        assert!(SqlSyntaxKind::Whitespace.is_trivia());
        assert!(SqlSyntaxKind::CommentLine.is_trivia());
        assert!(!SqlSyntaxKind::Keyword.is_trivia());
    }

    #[test]
    fn expr_classification() {
        assert!(SqlSyntaxKind::BinaryExpr.is_expr());
        assert!(SqlSyntaxKind::Placeholder.is_expr());
        assert!(!SqlSyntaxKind::WhereClause.is_expr());
        assert!(!SqlSyntaxKind::OpaqueSpan.is_expr());
    }
}
