//! Permissive recursive-descent SQL parser
//!
//! Builds a lossless CST from the trivia-preserving token stream. Every
//! token of the input ends up in the tree, so `root.text() == source` holds
//! for any input whatsoever. Constructs outside the supported grammar are
//! wrapped in `OpaqueSpan` nodes and reported as advisory diagnostics; the
//! parse itself never fails.
//!
//! Expressions use a Pratt loop over [`Precedence`]; clauses are plain
//! recursive descent. Trivia between an expression and a continuing infix
//! operator is pulled into the operator's node, trivia before a stopping
//! token is left for the enclosing clause.

use tracing::debug;

use super::builder::{Checkpoint, CstBuilder};
use super::lexer::{CstToken, lex_with_trivia};
use super::nodes::SqlSyntaxNode;
use super::precedence::{Precedence, infix_precedence};
use super::syntax_kind::SqlSyntaxKind;
use crate::config::ParseOptions;
use crate::diagnostics::ParseDiagnostic;

/// Keywords that resynchronize clause-level error recovery
const CLAUSE_SYNC: &[&str] = &[
    "FROM", "WHERE", "GROUP", "HAVING", "ORDER", "LIMIT", "OFFSET", "UNION", "INTERSECT",
    "EXCEPT", "MINUS",
];

/// Keywords usable as bare value expressions
const VALUE_KEYWORDS: &[&str] = &[
    "NULL",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "CURRENT_USER_ID",
    "SESSION_USER",
    "SYSDATE",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "USER",
];

/// Keywords that may open a join
const JOIN_STARTERS: &[&str] = &["JOIN", "INNER", "LEFT", "RIGHT", "FULL", "CROSS", "NATURAL"];

/// Parse SQL source into a lossless CST plus advisory diagnostics
pub fn parse_sql(source: &str, options: &ParseOptions) -> (SqlSyntaxNode, Vec<ParseDiagnostic>) {
    let (tokens, lex_errors) = lex_with_trivia(source, &options.placeholder);
    let mut diagnostics: Vec<ParseDiagnostic> = lex_errors
        .into_iter()
        .map(|e| ParseDiagnostic::error(e.message, e.span, source))
        .collect();

    let mut parser = Parser::new(source, &tokens);
    parser.parse_source_file();
    let (root, mut parse_diags) = parser.finish();
    diagnostics.append(&mut parse_diags);
    diagnostics.sort_by_key(|d| (d.start, d.end));
    (root, diagnostics)
}

/// Token stream parser
struct Parser<'a> {
    source: &'a str,
    tokens: &'a [CstToken],
    pos: usize,
    builder: CstBuilder,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, tokens: &'a [CstToken]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            builder: CstBuilder::new(),
            diagnostics: Vec::new(),
        }
    }

    fn finish(self) -> (SqlSyntaxNode, Vec<ParseDiagnostic>) {
        (self.builder.finish(), self.diagnostics)
    }

    // ------------------------------------------------------------------
    // Cursor helpers
    // ------------------------------------------------------------------

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn current(&self) -> Option<&CstToken> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: SqlSyntaxKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Current token is the given keyword. Call after `consume_trivia`.
    fn at_kw(&self, kw: &str) -> bool {
        self.current().is_some_and(|t| is_kw(t, kw))
    }

    fn at_any_kw(&self, kws: &[&str]) -> bool {
        kws.iter().any(|kw| self.at_kw(kw))
    }

    /// Next non-trivia token at or after the cursor, without advancing
    fn peek_meaningful(&self) -> Option<&CstToken> {
        self.tokens[self.pos..]
            .iter()
            .find(|t| !t.kind.is_trivia())
    }

    /// The nth (0-based) non-trivia token at or after the cursor
    fn peek_meaningful_nth(&self, n: usize) -> Option<&CstToken> {
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
    }

    /// Emit the current token into the tree and advance
    fn bump(&mut self) {
        if let Some(tok) = self.tokens.get(self.pos) {
            self.builder.token(tok.kind, &tok.text);
            self.pos += 1;
        }
    }

    fn consume_trivia(&mut self) {
        while self.current().is_some_and(|t| t.kind.is_trivia()) {
            self.bump();
        }
    }

    /// Consume trivia then the expected token kind, or report its absence
    fn expect(&mut self, kind: SqlSyntaxKind, what: &str) {
        self.consume_trivia();
        if self.at(kind) {
            self.bump();
        } else {
            self.push_error(format!("expected {what}"));
        }
    }

    /// Consume trivia then the expected keyword, or report its absence
    fn expect_kw(&mut self, kw: &str) {
        self.consume_trivia();
        if self.at_kw(kw) {
            self.bump();
        } else {
            self.push_error(format!("expected {kw}"));
        }
    }

    fn current_offset(&self) -> usize {
        self.current()
            .map(|t| t.span.start)
            .unwrap_or(self.source.len())
    }

    fn push_error(&mut self, message: String) {
        let offset = self.current_offset();
        let end = self.current().map(|t| t.span.end).unwrap_or(offset);
        self.diagnostics
            .push(ParseDiagnostic::error(message, offset..end, self.source));
    }

    fn push_warning(&mut self, message: String) {
        let offset = self.current_offset();
        self.diagnostics
            .push(ParseDiagnostic::warning(message, offset..offset, self.source));
    }

    /// Wrap unrecognized tokens in an `OpaqueSpan` until a sync point.
    ///
    /// Sync points are clause keywords, commas, semicolons, and the closing
    /// paren of the surrounding nesting level. Paren depth inside the span
    /// is tracked so parenthesized garbage stays in one piece.
    fn error_and_recover(&mut self, message: &str) {
        let start = self.current_offset();
        debug!(offset = start, "parser fell back to opaque span");

        self.builder.start_node(SqlSyntaxKind::OpaqueSpan);
        let before = self.pos;
        let mut depth = 0usize;
        while let Some(tok) = self.current() {
            if depth == 0 && is_sync_token(tok) {
                break;
            }
            match tok.kind {
                SqlSyntaxKind::LParen => depth += 1,
                SqlSyntaxKind::RParen => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.bump();
        }
        // Guarantee forward progress even when the cursor already sits on
        // a sync token.
        if self.pos == before && !self.at_end() {
            self.bump();
        }
        self.builder.finish_node();

        let end = self.current_offset();
        self.diagnostics.push(ParseDiagnostic::error(
            message.to_string(),
            start..end.max(start),
            self.source,
        ));
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn parse_source_file(&mut self) {
        self.builder.start_node(SqlSyntaxKind::SourceFile);
        loop {
            self.consume_trivia();
            if self.at_end() {
                break;
            }
            if self.at(SqlSyntaxKind::Semicolon) {
                self.bump();
                continue;
            }
            let before = self.pos;
            self.parse_statement();
            if self.pos == before {
                self.error_and_recover("unexpected input");
            }
        }
        self.builder.finish_node();
    }

    fn parse_statement(&mut self) {
        if self.at_kw("SELECT") || self.at_kw("WITH") {
            self.parse_select_statement();
        } else if self.at(SqlSyntaxKind::LParen)
            && self
                .peek_meaningful_nth(1)
                .is_some_and(|t| is_kw(t, "SELECT") || is_kw(t, "WITH"))
        {
            self.parse_select_statement();
        } else {
            self.error_and_recover("expected a SELECT statement");
        }
    }

    /// SELECT statement body: optional WITH, the select core, trailing
    /// clauses, and any set-operation continuation (right-nested).
    fn parse_select_statement(&mut self) {
        self.builder.start_node(SqlSyntaxKind::SelectStatement);
        self.consume_trivia();

        if self.at(SqlSyntaxKind::LParen) {
            self.parse_subquery();
        } else {
            if self.at_kw("WITH") {
                self.parse_with_clause();
                self.consume_trivia();
            }

            if self.at_kw("SELECT") {
                self.bump();
                self.consume_trivia();
                if self.at_any_kw(&["DISTINCT", "ALL"]) {
                    self.bump();
                    self.consume_trivia();
                }
                if self.at_kw("TOP") {
                    self.bump();
                    self.consume_trivia();
                    if self.at(SqlSyntaxKind::NumberLit) {
                        self.bump();
                    }
                }
                self.parse_select_list();
            } else {
                self.push_error("expected SELECT".to_string());
            }
        }

        // Trailing clauses in any order the input offers them
        loop {
            let Some(tok) = self.peek_meaningful() else {
                break;
            };
            match tok.kind {
                SqlSyntaxKind::Semicolon | SqlSyntaxKind::RParen | SqlSyntaxKind::Comma => break,
                SqlSyntaxKind::Keyword => {
                    let upper = tok.text.to_ascii_uppercase();
                    match upper.as_str() {
                        "FROM" => {
                            self.consume_trivia();
                            self.parse_from_clause();
                        }
                        "WHERE" => {
                            self.consume_trivia();
                            self.parse_where_clause();
                        }
                        "GROUP" => {
                            self.consume_trivia();
                            self.parse_group_by_clause();
                        }
                        "HAVING" => {
                            self.consume_trivia();
                            self.parse_having_clause();
                        }
                        "ORDER" => {
                            self.consume_trivia();
                            self.parse_order_by_clause();
                        }
                        "LIMIT" => {
                            self.consume_trivia();
                            self.parse_limit_clause();
                        }
                        "OFFSET" => {
                            self.consume_trivia();
                            self.parse_offset_clause();
                        }
                        "UNION" | "INTERSECT" | "EXCEPT" | "MINUS" => {
                            self.consume_trivia();
                            self.bump();
                            self.consume_trivia();
                            if self.at_any_kw(&["ALL", "DISTINCT"]) {
                                self.bump();
                                self.consume_trivia();
                            }
                            self.parse_select_statement();
                        }
                        _ => {
                            self.consume_trivia();
                            self.error_and_recover("unexpected keyword in SELECT statement");
                        }
                    }
                }
                _ => {
                    self.consume_trivia();
                    self.error_and_recover("unexpected tokens in SELECT statement");
                }
            }
        }

        self.builder.finish_node();
    }

    fn parse_with_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::WithClause);
        self.bump(); // WITH
        self.consume_trivia();
        if self.at_kw("RECURSIVE") {
            self.bump();
            self.consume_trivia();
        }
        loop {
            self.parse_cte_definition();
            let Some(tok) = self.peek_meaningful() else {
                break;
            };
            if tok.kind == SqlSyntaxKind::Comma {
                self.consume_trivia();
                self.bump();
                self.consume_trivia();
            } else {
                break;
            }
        }
        self.builder.finish_node();
    }

    fn parse_cte_definition(&mut self) {
        self.builder.start_node(SqlSyntaxKind::CteDefinition);
        self.consume_trivia();

        if matches!(
            self.current().map(|t| t.kind),
            Some(SqlSyntaxKind::Ident) | Some(SqlSyntaxKind::QuotedIdent)
        ) {
            self.bump();
        } else {
            self.push_error("expected CTE name".to_string());
        }
        self.consume_trivia();

        if self.at(SqlSyntaxKind::LParen) {
            self.parse_column_list();
            self.consume_trivia();
        }

        self.expect_kw("AS");
        self.consume_trivia();
        if self.at(SqlSyntaxKind::LParen) {
            self.bump();
            self.consume_trivia();
            self.parse_select_statement();
            self.expect(SqlSyntaxKind::RParen, "')'");
        } else {
            self.push_error("expected '(' after AS".to_string());
        }

        self.builder.finish_node();
    }

    fn parse_column_list(&mut self) {
        self.builder.start_node(SqlSyntaxKind::ColumnList);
        self.bump(); // (
        loop {
            self.consume_trivia();
            match self.current().map(|t| t.kind) {
                Some(SqlSyntaxKind::Ident) | Some(SqlSyntaxKind::QuotedIdent) => self.bump(),
                Some(SqlSyntaxKind::Comma) => {
                    self.bump();
                    continue;
                }
                Some(SqlSyntaxKind::RParen) => {
                    self.bump();
                    break;
                }
                None => {
                    self.push_error("unterminated column list".to_string());
                    break;
                }
                _ => {
                    self.error_and_recover("unexpected token in column list");
                }
            }
        }
        self.builder.finish_node();
    }

    fn parse_select_list(&mut self) {
        self.builder.start_node(SqlSyntaxKind::SelectList);
        loop {
            self.consume_trivia();
            let before = self.pos;
            if !self.parse_expr(Precedence::Lowest, true) {
                if self.peek_meaningful().is_none()
                    || self.at_any_kw(CLAUSE_SYNC)
                    || self.at(SqlSyntaxKind::Semicolon)
                    || self.at(SqlSyntaxKind::RParen)
                {
                    self.push_warning("empty select item".to_string());
                    break;
                }
                self.error_and_recover("expected expression in select list");
            }
            let Some(tok) = self.peek_meaningful() else {
                break;
            };
            if tok.kind == SqlSyntaxKind::Comma {
                self.consume_trivia();
                self.bump();
            } else {
                break;
            }
            if self.pos == before {
                break;
            }
        }
        self.builder.finish_node();
    }

    // ------------------------------------------------------------------
    // Clauses
    // ------------------------------------------------------------------

    fn parse_from_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::FromClause);
        self.bump(); // FROM
        loop {
            self.consume_trivia();
            self.parse_table_primary();
            self.parse_table_alias_opt();

            while self
                .peek_meaningful()
                .is_some_and(|t| JOIN_STARTERS.iter().any(|kw| is_kw(t, kw)))
            {
                self.consume_trivia();
                self.parse_join_clause();
            }

            let Some(tok) = self.peek_meaningful() else {
                break;
            };
            if tok.kind == SqlSyntaxKind::Comma {
                self.consume_trivia();
                self.bump();
            } else {
                break;
            }
        }
        self.builder.finish_node();
    }

    fn parse_table_primary(&mut self) {
        match self.current().map(|t| t.kind) {
            Some(SqlSyntaxKind::LParen) => {
                if self
                    .peek_meaningful_nth(1)
                    .is_some_and(|t| is_kw(t, "SELECT") || is_kw(t, "WITH"))
                {
                    self.parse_subquery();
                } else {
                    self.error_and_recover("expected subquery after '('");
                }
            }
            Some(SqlSyntaxKind::PlaceholderToken) => {
                self.builder.start_node(SqlSyntaxKind::Placeholder);
                self.bump();
                self.builder.finish_node();
            }
            Some(SqlSyntaxKind::Ident) | Some(SqlSyntaxKind::QuotedIdent) => {
                self.builder.start_node(SqlSyntaxKind::TableRef);
                self.bump();
                self.parse_qualified_name_rest();
                self.builder.finish_node();
            }
            _ => {
                self.error_and_recover("expected table reference");
            }
        }
    }

    /// `. part` continuations of a qualified name, permissive about parts
    fn parse_qualified_name_rest(&mut self) {
        while self
            .peek_meaningful()
            .is_some_and(|t| t.kind == SqlSyntaxKind::Dot)
        {
            self.consume_trivia();
            self.bump(); // .
            self.consume_trivia();
            match self.current().map(|t| t.kind) {
                Some(
                    SqlSyntaxKind::Ident
                    | SqlSyntaxKind::QuotedIdent
                    | SqlSyntaxKind::Keyword
                    | SqlSyntaxKind::Star,
                ) => self.bump(),
                _ => {
                    self.push_error("expected name after '.'".to_string());
                    break;
                }
            }
        }
    }

    fn parse_table_alias_opt(&mut self) {
        let Some(tok) = self.peek_meaningful() else {
            return;
        };
        if is_kw(tok, "AS") {
            self.consume_trivia();
            self.builder.start_node(SqlSyntaxKind::TableAlias);
            self.bump(); // AS
            self.consume_trivia();
            if matches!(
                self.current().map(|t| t.kind),
                Some(SqlSyntaxKind::Ident) | Some(SqlSyntaxKind::QuotedIdent)
            ) {
                self.bump();
            } else {
                self.push_error("expected alias name".to_string());
            }
            self.builder.finish_node();
        } else if matches!(tok.kind, SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent) {
            self.consume_trivia();
            self.builder.start_node(SqlSyntaxKind::TableAlias);
            self.bump();
            self.builder.finish_node();
        }
    }

    fn parse_join_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::JoinClause);
        while self.at_any_kw(&["NATURAL", "INNER", "LEFT", "RIGHT", "FULL", "CROSS", "OUTER"]) {
            self.bump();
            self.consume_trivia();
        }
        if self.at_kw("JOIN") {
            self.bump();
        } else {
            self.push_error("expected JOIN".to_string());
        }
        self.consume_trivia();
        self.parse_table_primary();
        self.parse_table_alias_opt();

        if self.peek_meaningful().is_some_and(|t| is_kw(t, "ON")) {
            self.consume_trivia();
            self.bump(); // ON
            self.consume_trivia();
            if !self.parse_expr(Precedence::Lowest, false) {
                self.push_error("expected join condition".to_string());
            }
        } else if self.peek_meaningful().is_some_and(|t| is_kw(t, "USING")) {
            self.consume_trivia();
            self.bump(); // USING
            self.consume_trivia();
            if self.at(SqlSyntaxKind::LParen) {
                self.parse_column_list();
            } else {
                self.push_error("expected '(' after USING".to_string());
            }
        }
        self.builder.finish_node();
    }

    fn parse_where_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::WhereClause);
        self.bump(); // WHERE
        self.consume_trivia();
        if !self.parse_expr(Precedence::Lowest, false) {
            self.push_error("expected expression after WHERE".to_string());
        }
        self.builder.finish_node();
    }

    fn parse_group_by_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::GroupByClause);
        self.bump(); // GROUP
        self.expect_kw("BY");
        self.parse_expr_list();
        self.builder.finish_node();
    }

    fn parse_having_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::HavingClause);
        self.bump(); // HAVING
        self.consume_trivia();
        if !self.parse_expr(Precedence::Lowest, false) {
            self.push_error("expected expression after HAVING".to_string());
        }
        self.builder.finish_node();
    }

    fn parse_order_by_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::OrderByClause);
        self.bump(); // ORDER
        self.expect_kw("BY");
        loop {
            self.consume_trivia();
            if !self.parse_ordering_term() {
                self.push_error("expected ordering expression".to_string());
                break;
            }
            let Some(tok) = self.peek_meaningful() else {
                break;
            };
            if tok.kind == SqlSyntaxKind::Comma {
                self.consume_trivia();
                self.bump();
            } else {
                break;
            }
        }
        self.builder.finish_node();
    }

    /// `expr [ASC|DESC] [NULLS FIRST|LAST]`
    fn parse_ordering_term(&mut self) -> bool {
        let cp = self.builder.checkpoint();
        // AscDesc as the floor keeps the direction keyword out of the
        // expression itself.
        if !self.parse_expr(Precedence::AscDesc, false) {
            return false;
        }
        self.builder.start_node_at(cp, SqlSyntaxKind::OrderingTerm);
        if self
            .peek_meaningful()
            .is_some_and(|t| is_kw(t, "ASC") || is_kw(t, "DESC"))
        {
            self.consume_trivia();
            self.bump();
        }
        if self.peek_meaningful().is_some_and(|t| is_kw(t, "NULLS")) {
            self.consume_trivia();
            self.bump(); // NULLS
            self.consume_trivia();
            if self.at_kw("FIRST") || self.at_kw("LAST") {
                self.bump();
            } else {
                self.push_error("expected FIRST or LAST".to_string());
            }
        }
        self.builder.finish_node();
        true
    }

    fn parse_limit_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::LimitClause);
        self.bump(); // LIMIT
        self.consume_trivia();
        if self.at_kw("ALL") {
            self.bump();
        } else if !self.parse_expr(Precedence::Lowest, false) {
            self.push_error("expected expression after LIMIT".to_string());
        }
        self.builder.finish_node();
    }

    fn parse_offset_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::OffsetClause);
        self.bump(); // OFFSET
        self.consume_trivia();
        if !self.parse_expr(Precedence::Lowest, false) {
            self.push_error("expected expression after OFFSET".to_string());
        }
        if self
            .peek_meaningful()
            .is_some_and(|t| is_kw(t, "ROW") || is_kw(t, "ROWS"))
        {
            self.consume_trivia();
            self.bump();
        }
        self.builder.finish_node();
    }

    /// Comma-separated expression list, used by GROUP BY and PARTITION BY
    fn parse_expr_list(&mut self) {
        loop {
            self.consume_trivia();
            if !self.parse_expr(Precedence::Lowest, false) {
                self.push_error("expected expression".to_string());
                break;
            }
            let Some(tok) = self.peek_meaningful() else {
                break;
            };
            if tok.kind == SqlSyntaxKind::Comma {
                self.consume_trivia();
                self.bump();
            } else {
                break;
            }
        }
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    /// Pratt expression parser. Returns false, emitting nothing, when the
    /// cursor does not start an expression.
    fn parse_expr(&mut self, min: Precedence, in_select: bool) -> bool {
        let cp = self.builder.checkpoint();
        if !self.parse_prefix() {
            return false;
        }

        loop {
            let Some(op) = self.peek_meaningful().cloned() else {
                break;
            };
            let prec = infix_precedence(&op, in_select);
            if prec <= min {
                break;
            }

            match op.kind {
                SqlSyntaxKind::Keyword => {
                    let upper = op.text.to_ascii_uppercase();
                    match upper.as_str() {
                        "AND" | "OR" | "LIKE" | "ILIKE" => {
                            self.parse_binary_rhs(cp, prec);
                        }
                        "IS" => {
                            self.builder.start_node_at(cp, SqlSyntaxKind::BinaryExpr);
                            self.consume_trivia();
                            self.bump(); // IS
                            self.consume_trivia();
                            if self.at_kw("NOT") {
                                self.bump();
                                self.consume_trivia();
                            }
                            if !self.parse_expr(Precedence::Is, false) {
                                self.push_error("expected expression after IS".to_string());
                            }
                            self.builder.finish_node();
                        }
                        "NOT" => {
                            // Only meaningful before BETWEEN / IN / LIKE
                            let Some(second) = self.peek_meaningful_nth(1) else {
                                break;
                            };
                            if is_kw(second, "BETWEEN") {
                                self.parse_between(cp, true);
                            } else if is_kw(second, "IN") {
                                self.parse_in(cp, true);
                            } else if is_kw(second, "LIKE") || is_kw(second, "ILIKE") {
                                self.builder.start_node_at(cp, SqlSyntaxKind::BinaryExpr);
                                self.consume_trivia();
                                self.bump(); // NOT
                                self.consume_trivia();
                                self.bump(); // LIKE
                                self.consume_trivia();
                                if !self.parse_expr(Precedence::BetweenInLike, false) {
                                    self.push_error("expected pattern after LIKE".to_string());
                                }
                                self.builder.finish_node();
                            } else {
                                break;
                            }
                        }
                        "BETWEEN" => self.parse_between(cp, false),
                        "IN" => self.parse_in(cp, false),
                        "AS" if in_select => {
                            self.builder.start_node_at(cp, SqlSyntaxKind::AliasExpr);
                            self.consume_trivia();
                            self.bump(); // AS
                            self.consume_trivia();
                            if matches!(
                                self.current().map(|t| t.kind),
                                Some(SqlSyntaxKind::Ident) | Some(SqlSyntaxKind::QuotedIdent)
                            ) {
                                self.bump();
                            } else {
                                self.push_error("expected alias name".to_string());
                            }
                            self.builder.finish_node();
                        }
                        _ => break,
                    }
                }
                SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent if in_select => {
                    // Bare identifier alias shorthand: `expr name`
                    self.builder.start_node_at(cp, SqlSyntaxKind::AliasExpr);
                    self.consume_trivia();
                    self.bump();
                    self.builder.finish_node();
                }
                SqlSyntaxKind::Eq
                | SqlSyntaxKind::NotEq
                | SqlSyntaxKind::Lt
                | SqlSyntaxKind::LtEq
                | SqlSyntaxKind::Gt
                | SqlSyntaxKind::GtEq
                | SqlSyntaxKind::Concat
                | SqlSyntaxKind::Plus
                | SqlSyntaxKind::Minus
                | SqlSyntaxKind::Star
                | SqlSyntaxKind::Slash
                | SqlSyntaxKind::Percent => {
                    self.parse_binary_rhs(cp, prec);
                }
                SqlSyntaxKind::CastColons => self.parse_cast(cp),
                SqlSyntaxKind::LParen => self.parse_call(cp),
                _ => break,
            }
        }
        true
    }

    /// Wrap the expression so far plus `op rhs` into a BinaryExpr
    fn parse_binary_rhs(&mut self, cp: Checkpoint, prec: Precedence) {
        self.builder.start_node_at(cp, SqlSyntaxKind::BinaryExpr);
        self.consume_trivia();
        self.bump(); // operator
        self.consume_trivia();
        // Left-associative; the alias shorthand never applies to a right
        // operand.
        if !self.parse_expr(prec, false) {
            self.push_error("expected right-hand operand".to_string());
        }
        self.builder.finish_node();
    }

    fn parse_between(&mut self, cp: Checkpoint, negated: bool) {
        self.builder.start_node_at(cp, SqlSyntaxKind::BetweenExpr);
        self.consume_trivia();
        if negated {
            self.bump(); // NOT
            self.consume_trivia();
        }
        self.bump(); // BETWEEN
        self.consume_trivia();
        // Bounds parse at BETWEEN's own level so the connecting AND stops
        // the lower bound.
        if !self.parse_expr(Precedence::BetweenInLike, false) {
            self.push_error("expected lower bound after BETWEEN".to_string());
        }
        self.expect_kw("AND");
        self.consume_trivia();
        if !self.parse_expr(Precedence::BetweenInLike, false) {
            self.push_error("expected upper bound after AND".to_string());
        }
        self.builder.finish_node();
    }

    fn parse_in(&mut self, cp: Checkpoint, negated: bool) {
        self.builder.start_node_at(cp, SqlSyntaxKind::InExpr);
        self.consume_trivia();
        if negated {
            self.bump(); // NOT
            self.consume_trivia();
        }
        self.bump(); // IN
        self.consume_trivia();
        match self.current().map(|t| t.kind) {
            Some(SqlSyntaxKind::LParen) => {
                if self
                    .peek_meaningful_nth(1)
                    .is_some_and(|t| is_kw(t, "SELECT") || is_kw(t, "WITH"))
                {
                    self.parse_subquery();
                } else {
                    self.bump(); // (
                    self.parse_expr_list();
                    self.expect(SqlSyntaxKind::RParen, "')'");
                }
            }
            Some(SqlSyntaxKind::PlaceholderToken) => {
                self.builder.start_node(SqlSyntaxKind::Placeholder);
                self.bump();
                self.builder.finish_node();
            }
            _ => {
                if !self.parse_expr(Precedence::BetweenInLike, false) {
                    self.push_error("expected value list after IN".to_string());
                }
            }
        }
        self.builder.finish_node();
    }

    /// `expr :: typename [( args )]`
    fn parse_cast(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, SqlSyntaxKind::CastExpr);
        self.consume_trivia();
        self.bump(); // ::
        self.consume_trivia();
        match self.current().map(|t| t.kind) {
            Some(SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent | SqlSyntaxKind::Keyword) => {
                self.bump();
            }
            _ => self.push_error("expected type name after '::'".to_string()),
        }
        // Type modifiers like varchar(80) belong to the cast, not a call
        if self
            .peek_meaningful()
            .is_some_and(|t| t.kind == SqlSyntaxKind::LParen)
        {
            self.consume_trivia();
            self.bump(); // (
            loop {
                self.consume_trivia();
                match self.current().map(|t| t.kind) {
                    Some(SqlSyntaxKind::RParen) => {
                        self.bump();
                        break;
                    }
                    None => {
                        self.push_error("unterminated type modifier list".to_string());
                        break;
                    }
                    _ => self.bump(),
                }
            }
        }
        self.builder.finish_node();
    }

    /// Call arguments, plus the OVER continuation for window functions
    fn parse_call(&mut self, cp: Checkpoint) {
        self.builder.start_node_at(cp, SqlSyntaxKind::FunctionCall);
        self.consume_trivia();
        self.bump(); // (
        self.consume_trivia();
        if self.at(SqlSyntaxKind::RParen) {
            self.bump();
        } else {
            if self.at_any_kw(&["DISTINCT", "ALL"]) {
                self.bump();
                self.consume_trivia();
            }
            loop {
                self.consume_trivia();
                if self.at(SqlSyntaxKind::RParen) {
                    break;
                }
                if !self.parse_expr(Precedence::Lowest, false) {
                    self.error_and_recover("expected function argument");
                }
                let Some(tok) = self.peek_meaningful() else {
                    break;
                };
                if tok.kind == SqlSyntaxKind::Comma {
                    self.consume_trivia();
                    self.bump();
                } else {
                    break;
                }
            }
            self.expect(SqlSyntaxKind::RParen, "')'");
        }
        self.builder.finish_node();

        if self.peek_meaningful().is_some_and(|t| is_kw(t, "OVER")) {
            self.builder
                .start_node_at(cp, SqlSyntaxKind::WindowFunctionCall);
            self.consume_trivia();
            self.bump(); // OVER
            self.consume_trivia();
            self.parse_window_definition();
            self.builder.finish_node();
        }
    }

    /// `( [PARTITION BY exprs] [ORDER BY terms] [frame] )` or a window name
    fn parse_window_definition(&mut self) {
        self.builder.start_node(SqlSyntaxKind::WindowDefinition);
        match self.current().map(|t| t.kind) {
            Some(SqlSyntaxKind::LParen) => {
                self.bump();
                self.consume_trivia();
                if self.at_kw("PARTITION") {
                    self.bump();
                    self.expect_kw("BY");
                    self.parse_expr_list();
                    self.consume_trivia();
                }
                if self.at_kw("ORDER") {
                    self.parse_order_by_clause();
                    self.consume_trivia();
                }
                if self.at_any_kw(&["ROWS", "RANGE", "GROUPS"]) {
                    self.parse_frame_clause();
                    self.consume_trivia();
                }
                self.expect(SqlSyntaxKind::RParen, "')'");
            }
            Some(SqlSyntaxKind::Ident) | Some(SqlSyntaxKind::QuotedIdent) => {
                self.bump(); // named window
            }
            _ => self.push_error("expected window definition after OVER".to_string()),
        }
        self.builder.finish_node();
    }

    fn parse_frame_clause(&mut self) {
        self.builder.start_node(SqlSyntaxKind::FrameClause);
        self.bump(); // ROWS | RANGE | GROUPS
        self.consume_trivia();
        if self.at_kw("BETWEEN") {
            self.bump();
            self.parse_frame_bound();
            self.expect_kw("AND");
            self.parse_frame_bound();
        } else {
            self.parse_frame_bound();
        }
        self.builder.finish_node();
    }

    fn parse_frame_bound(&mut self) {
        self.consume_trivia();
        if self.at_kw("UNBOUNDED") {
            self.bump();
            self.consume_trivia();
            if self.at_kw("PRECEDING") || self.at_kw("FOLLOWING") {
                self.bump();
            } else {
                self.push_error("expected PRECEDING or FOLLOWING".to_string());
            }
        } else if self.at(SqlSyntaxKind::NumberLit) || self.at(SqlSyntaxKind::PlaceholderToken) {
            self.bump();
            self.consume_trivia();
            if self.at_kw("PRECEDING") || self.at_kw("FOLLOWING") {
                self.bump();
            } else {
                self.push_error("expected PRECEDING or FOLLOWING".to_string());
            }
        } else if self.current().is_some_and(|t| {
            t.kind == SqlSyntaxKind::Ident && t.text.eq_ignore_ascii_case("current")
        }) {
            self.bump(); // CURRENT
            self.consume_trivia();
            if self.at_kw("ROW") {
                self.bump();
            } else {
                self.push_error("expected ROW after CURRENT".to_string());
            }
        } else {
            self.push_error("expected frame bound".to_string());
        }
    }

    /// Prefix position of the Pratt parser. Emits one expression node and
    /// returns true, or emits nothing and returns false.
    fn parse_prefix(&mut self) -> bool {
        let Some(tok) = self.current() else {
            return false;
        };
        match tok.kind {
            SqlSyntaxKind::NumberLit | SqlSyntaxKind::StringLit | SqlSyntaxKind::BoolLit => {
                self.builder.start_node(SqlSyntaxKind::Literal);
                self.bump();
                self.builder.finish_node();
                true
            }
            SqlSyntaxKind::PlaceholderToken => {
                self.builder.start_node(SqlSyntaxKind::Placeholder);
                self.bump();
                self.builder.finish_node();
                true
            }
            SqlSyntaxKind::Ident | SqlSyntaxKind::QuotedIdent => {
                self.builder.start_node(SqlSyntaxKind::ColumnRef);
                self.bump();
                self.parse_qualified_name_rest();
                self.builder.finish_node();
                true
            }
            SqlSyntaxKind::Star => {
                self.builder.start_node(SqlSyntaxKind::ColumnRef);
                self.bump();
                self.builder.finish_node();
                true
            }
            SqlSyntaxKind::Minus | SqlSyntaxKind::Plus => {
                self.builder.start_node(SqlSyntaxKind::UnaryExpr);
                self.bump();
                self.consume_trivia();
                if !self.parse_expr(Precedence::Prefix, false) {
                    self.push_error("expected operand after unary operator".to_string());
                }
                self.builder.finish_node();
                true
            }
            SqlSyntaxKind::LParen => {
                if self
                    .peek_meaningful_nth(1)
                    .is_some_and(|t| is_kw(t, "SELECT") || is_kw(t, "WITH"))
                {
                    self.parse_subquery();
                } else {
                    self.builder.start_node(SqlSyntaxKind::ParenExpr);
                    self.bump();
                    self.consume_trivia();
                    if !self.parse_expr(Precedence::Lowest, false) {
                        self.push_error("expected expression after '('".to_string());
                    }
                    self.expect(SqlSyntaxKind::RParen, "')'");
                    self.builder.finish_node();
                }
                true
            }
            SqlSyntaxKind::Keyword => {
                let upper = tok.text.to_ascii_uppercase();
                if upper == "CASE" {
                    self.parse_case();
                    true
                } else if upper == "NOT" {
                    self.builder.start_node(SqlSyntaxKind::UnaryExpr);
                    self.bump();
                    self.consume_trivia();
                    if !self.parse_expr(Precedence::Not, false) {
                        self.push_error("expected operand after NOT".to_string());
                    }
                    self.builder.finish_node();
                    true
                } else if VALUE_KEYWORDS.contains(&upper.as_str()) {
                    self.builder.start_node(SqlSyntaxKind::Literal);
                    self.bump();
                    self.builder.finish_node();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn parse_case(&mut self) {
        self.builder.start_node(SqlSyntaxKind::CaseExpr);
        self.bump(); // CASE
        self.consume_trivia();
        if !self.at_kw("WHEN") && !self.parse_expr(Precedence::Lowest, false) {
            self.push_error("expected WHEN or operand after CASE".to_string());
        }
        while self.peek_meaningful().is_some_and(|t| is_kw(t, "WHEN")) {
            self.consume_trivia();
            self.builder.start_node(SqlSyntaxKind::WhenArm);
            self.bump(); // WHEN
            self.consume_trivia();
            if !self.parse_expr(Precedence::Lowest, false) {
                self.push_error("expected condition after WHEN".to_string());
            }
            self.expect_kw("THEN");
            self.consume_trivia();
            if !self.parse_expr(Precedence::Lowest, false) {
                self.push_error("expected result after THEN".to_string());
            }
            self.builder.finish_node();
        }
        if self.peek_meaningful().is_some_and(|t| is_kw(t, "ELSE")) {
            self.consume_trivia();
            self.builder.start_node(SqlSyntaxKind::ElseArm);
            self.bump(); // ELSE
            self.consume_trivia();
            if !self.parse_expr(Precedence::Lowest, false) {
                self.push_error("expected result after ELSE".to_string());
            }
            self.builder.finish_node();
        }
        self.expect_kw("END");
        self.builder.finish_node();
    }

    /// `( SELECT ... )` wrapped in a Subquery node
    fn parse_subquery(&mut self) {
        self.builder.start_node(SqlSyntaxKind::Subquery);
        self.bump(); // (
        self.consume_trivia();
        self.parse_select_statement();
        self.expect(SqlSyntaxKind::RParen, "')'");
        self.builder.finish_node();
    }
}

fn is_kw(tok: &CstToken, kw: &str) -> bool {
    tok.kind == SqlSyntaxKind::Keyword && tok.text.eq_ignore_ascii_case(kw)
}

fn is_sync_token(tok: &CstToken) -> bool {
    match tok.kind {
        SqlSyntaxKind::Semicolon | SqlSyntaxKind::RParen | SqlSyntaxKind::Comma => true,
        SqlSyntaxKind::Keyword => CLAUSE_SYNC.iter().any(|kw| tok.text.eq_ignore_ascii_case(kw)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::nodes::SqlSyntaxNode;

    fn parse(source: &str) -> (SqlSyntaxNode, Vec<ParseDiagnostic>) {
        parse_sql(source, &ParseOptions::default())
    }

    fn first_descendant(root: &SqlSyntaxNode, kind: SqlSyntaxKind) -> SqlSyntaxNode {
        root.descendants()
            .find(|n| n.kind() == kind)
            .unwrap_or_else(|| panic!("no {kind:?} in {root:#?}"))
    }

    #[test]
    fn simple_select_is_lossless() {
        let src = "SELECT a, b FROM t WHERE a > 1";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(root.text().to_string(), src);
        assert_eq!(root.kind(), SqlSyntaxKind::SourceFile);
        let stmt = root.first_child().unwrap();
        assert_eq!(stmt.kind(), SqlSyntaxKind::SelectStatement);
        let kinds: Vec<_> = stmt.children().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SqlSyntaxKind::SelectList,
                SqlSyntaxKind::FromClause,
                SqlSyntaxKind::WhereClause,
            ]
        );
    }

    #[test]
    fn operator_precedence_shapes_the_tree() {
        let (root, diags) = parse("SELECT 1 + 2 * 3");
        assert!(diags.is_empty());
        let outer = first_descendant(&root, SqlSyntaxKind::BinaryExpr);
        // The outer node is the +; the * binds tighter on the right
        let inner: Vec<_> = outer
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::BinaryExpr)
            .collect();
        assert_eq!(inner.len(), 1);
        assert_eq!(inner[0].text().to_string(), "2 * 3");
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let (root, diags) = parse("SELECT 1 WHERE a OR b AND c");
        assert!(diags.is_empty());
        let where_clause = first_descendant(&root, SqlSyntaxKind::WhereClause);
        let outer = where_clause
            .children()
            .find(|n| n.kind() == SqlSyntaxKind::BinaryExpr)
            .unwrap();
        let inner: Vec<_> = outer
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::BinaryExpr)
            .collect();
        assert_eq!(inner[0].text().to_string(), "b AND c");
    }

    #[test]
    fn alias_shorthand_in_select_list() {
        let (root, diags) = parse("SELECT revenue - cost profit FROM sales");
        assert!(diags.is_empty());
        let alias = first_descendant(&root, SqlSyntaxKind::AliasExpr);
        assert_eq!(alias.text().to_string(), "revenue - cost profit");
        let binary = alias.first_child().unwrap();
        assert_eq!(binary.kind(), SqlSyntaxKind::BinaryExpr);
        assert_eq!(binary.text().to_string(), "revenue - cost");
    }

    #[test]
    fn as_alias_in_select_list() {
        let (root, diags) = parse("SELECT count(*) AS n FROM t");
        assert!(diags.is_empty());
        let alias = first_descendant(&root, SqlSyntaxKind::AliasExpr);
        assert_eq!(alias.text().to_string(), "count(*) AS n");
        assert_eq!(
            alias.first_child().unwrap().kind(),
            SqlSyntaxKind::FunctionCall
        );
    }

    #[test]
    fn with_clause_and_ctes() {
        let src = "WITH daily (d, n) AS (SELECT dt, count(*) FROM e GROUP BY dt), t AS (SELECT 1) SELECT * FROM daily";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(root.text().to_string(), src);
        let with = first_descendant(&root, SqlSyntaxKind::WithClause);
        let ctes: Vec<_> = with
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::CteDefinition)
            .collect();
        assert_eq!(ctes.len(), 2);
        assert!(
            ctes[0]
                .children()
                .any(|n| n.kind() == SqlSyntaxKind::ColumnList)
        );
    }

    #[test]
    fn window_function_with_frame() {
        let src = "SELECT sum(x) OVER (PARTITION BY g ORDER BY d ROWS BETWEEN 2 PRECEDING AND CURRENT ROW) FROM t";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(root.text().to_string(), src);
        let win = first_descendant(&root, SqlSyntaxKind::WindowFunctionCall);
        assert_eq!(
            win.first_child().unwrap().kind(),
            SqlSyntaxKind::FunctionCall
        );
        let def = first_descendant(&win, SqlSyntaxKind::WindowDefinition);
        assert!(def.children().any(|n| n.kind() == SqlSyntaxKind::OrderByClause));
        assert!(def.children().any(|n| n.kind() == SqlSyntaxKind::FrameClause));
    }

    #[test]
    fn between_stops_at_the_connecting_and() {
        let (root, diags) = parse("SELECT 1 WHERE x BETWEEN 1 AND 10 AND y = 2");
        assert!(diags.is_empty(), "{diags:?}");
        let between = first_descendant(&root, SqlSyntaxKind::BetweenExpr);
        assert_eq!(between.text().to_string(), "x BETWEEN 1 AND 10");
    }

    #[test]
    fn not_in_subquery() {
        let src = "SELECT 1 WHERE id NOT IN (SELECT id FROM banned)";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let in_expr = first_descendant(&root, SqlSyntaxKind::InExpr);
        assert!(in_expr.children().any(|n| n.kind() == SqlSyntaxKind::Subquery));
    }

    #[test]
    fn cast_with_type_modifier() {
        let (root, diags) = parse("SELECT x::varchar(80) FROM t");
        assert!(diags.is_empty(), "{diags:?}");
        let cast = first_descendant(&root, SqlSyntaxKind::CastExpr);
        assert_eq!(cast.text().to_string(), "x::varchar(80)");
    }

    #[test]
    fn case_expression() {
        let src = "SELECT CASE WHEN a > 0 THEN 'pos' WHEN a < 0 THEN 'neg' ELSE 'zero' END FROM t";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let case = first_descendant(&root, SqlSyntaxKind::CaseExpr);
        let whens: Vec<_> = case
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::WhenArm)
            .collect();
        assert_eq!(whens.len(), 2);
        assert!(case.children().any(|n| n.kind() == SqlSyntaxKind::ElseArm));
    }

    #[test]
    fn set_operations_nest() {
        let src = "SELECT a FROM t UNION ALL SELECT b FROM u";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(root.text().to_string(), src);
        let outer = root.first_child().unwrap();
        let nested: Vec<_> = outer
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::SelectStatement)
            .collect();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].text().to_string(), "SELECT b FROM u");
    }

    #[test]
    fn joins_with_on_and_using() {
        let src = "SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id JOIN c USING (id)";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let from = first_descendant(&root, SqlSyntaxKind::FromClause);
        let joins: Vec<_> = from
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::JoinClause)
            .collect();
        assert_eq!(joins.len(), 2);
        assert!(joins[1].children().any(|n| n.kind() == SqlSyntaxKind::ColumnList));
    }

    #[test]
    fn placeholders_in_value_and_table_position() {
        let src = "SELECT * FROM {{table}} WHERE dt >= {{ start }} AND id IN {{ids}}";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(root.text().to_string(), src);
        let placeholders: Vec<_> = root
            .descendants()
            .filter(|n| n.kind() == SqlSyntaxKind::Placeholder)
            .collect();
        assert_eq!(placeholders.len(), 3);
    }

    #[test]
    fn malformed_clause_becomes_opaque_span() {
        let src = "SELECT a FROM t WHERE @@@ bad ORDER BY a";
        let (root, diags) = parse(src);
        assert_eq!(root.text().to_string(), src);
        assert!(!diags.is_empty());
        let opaque = first_descendant(&root, SqlSyntaxKind::OpaqueSpan);
        assert!(opaque.text().to_string().contains("@@@"));
        // Recovery resynchronizes on the next clause keyword
        let stmt = root.first_child().unwrap();
        assert!(
            stmt.children()
                .any(|n| n.kind() == SqlSyntaxKind::OrderByClause)
        );
    }

    #[test]
    fn garbage_input_still_round_trips() {
        let src = ")))) totally not sql ((((";
        let (root, diags) = parse(src);
        assert_eq!(root.text().to_string(), src);
        assert!(!diags.is_empty());
    }

    #[test]
    fn empty_input() {
        let (root, diags) = parse("");
        assert!(diags.is_empty());
        assert_eq!(root.text().to_string(), "");
        assert_eq!(root.kind(), SqlSyntaxKind::SourceFile);
    }

    #[test]
    fn comments_survive_inside_clauses() {
        let src = "SELECT a, -- keep me\n  b\nFROM t";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        assert_eq!(root.text().to_string(), src);
    }

    #[test]
    fn order_by_with_direction_and_nulls() {
        let src = "SELECT a FROM t ORDER BY a DESC NULLS LAST, b";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let order = first_descendant(&root, SqlSyntaxKind::OrderByClause);
        let terms: Vec<_> = order
            .children()
            .filter(|n| n.kind() == SqlSyntaxKind::OrderingTerm)
            .collect();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].text().to_string(), "a DESC NULLS LAST");
    }

    #[test]
    fn limit_offset() {
        let src = "SELECT a FROM t LIMIT 10 OFFSET 20";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let stmt = root.first_child().unwrap();
        assert!(stmt.children().any(|n| n.kind() == SqlSyntaxKind::LimitClause));
        assert!(stmt.children().any(|n| n.kind() == SqlSyntaxKind::OffsetClause));
    }

    #[test]
    fn is_not_null() {
        let src = "SELECT 1 WHERE x IS NOT NULL";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let binary = first_descendant(&root, SqlSyntaxKind::BinaryExpr);
        assert_eq!(binary.text().to_string(), "x IS NOT NULL");
    }

    #[test]
    fn scalar_subquery_in_select_list() {
        let src = "SELECT (SELECT max(x) FROM t) AS m";
        let (root, diags) = parse(src);
        assert!(diags.is_empty(), "{diags:?}");
        let sub = first_descendant(&root, SqlSyntaxKind::Subquery);
        assert_eq!(sub.text().to_string(), "(SELECT max(x) FROM t)");
    }
}
