//! Trivia-preserving SQL lexer
//!
//! Unlike a conventional SQL tokenizer this lexer never discards input:
//! whitespace and comments come back as ordinary tokens, string and
//! identifier delimiters stay inside the token text, and characters outside
//! the lexical grammar surface as `Unknown` tokens. Concatenating the text
//! of every token reproduces the source byte for byte, which is what makes
//! lossless round-tripping possible.

use std::ops::Range;

use crate::config::PlaceholderSyntax;
use crate::cst::syntax_kind::{SqlSyntaxKind, is_keyword};

/// Simple span representing a range in the source
pub type CstSpan = Range<usize>;

/// A lexer error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub message: String,
    pub span: CstSpan,
}

impl LexerError {
    pub fn new(message: impl Into<String>, span: CstSpan) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A token with its syntax kind and span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CstToken {
    pub kind: SqlSyntaxKind,
    pub text: String,
    pub span: CstSpan,
}

impl CstToken {
    pub fn new(kind: SqlSyntaxKind, text: impl Into<String>, span: CstSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Result returned by the lexer
pub type CstLexResult = (Vec<CstToken>, Vec<LexerError>);

/// Lex input preserving all trivia.
///
/// Placeholders delimited by `placeholder.open`/`placeholder.close` are
/// captured as single opaque tokens; their interior is never re-lexed.
pub fn lex_with_trivia(input: &str, placeholder: &PlaceholderSyntax) -> CstLexResult {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    let len = input.len();
    let mut i = 0usize;

    while i < len {
        let start = i;

        // Placeholders win over every other rule so that `{{` is never
        // lexed as two braces.
        if input[i..].starts_with(placeholder.open.as_str()) {
            let (end, error) = lex_placeholder(input, start, placeholder);
            if let Some(err) = error {
                errors.push(err);
            }
            tokens.push(CstToken::new(
                SqlSyntaxKind::PlaceholderToken,
                &input[start..end],
                span(start, end),
            ));
            i = end;
            continue;
        }

        let Some((current, size)) = next_char(input, i) else {
            break;
        };

        match current {
            // Whitespace, newlines included, collapses into one token
            c if c.is_whitespace() => {
                let mut end = i + size;
                while let Some((next_ch, next_size)) = next_char(input, end) {
                    if next_ch.is_whitespace() && !input[end..].starts_with(placeholder.open.as_str())
                    {
                        end += next_size;
                    } else {
                        break;
                    }
                }
                tokens.push(CstToken::new(
                    SqlSyntaxKind::Whitespace,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            '-' => {
                if let Some(('-', _)) = next_char(input, i + size) {
                    // Line comment; the trailing newline stays whitespace
                    let end = match input[start..].find('\n') {
                        Some(rel) => start + rel,
                        None => len,
                    };
                    tokens.push(CstToken::new(
                        SqlSyntaxKind::CommentLine,
                        &input[start..end],
                        span(start, end),
                    ));
                    i = end;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Minus, "-", span(start, i + size)));
                    i += size;
                }
            }

            '/' => {
                if let Some(('*', _)) = next_char(input, i + size) {
                    let (end, error) = lex_block_comment(input, start);
                    if let Some(err) = error {
                        errors.push(err);
                    }
                    tokens.push(CstToken::new(
                        SqlSyntaxKind::CommentBlock,
                        &input[start..end],
                        span(start, end),
                    ));
                    i = end;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Slash, "/", span(start, i + size)));
                    i += size;
                }
            }

            '\'' => {
                let (end, error) = lex_string(input, start);
                if let Some(err) = error {
                    errors.push(err);
                }
                tokens.push(CstToken::new(
                    SqlSyntaxKind::StringLit,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            '"' => {
                let (end, error) = lex_quoted_ident(input, start);
                if let Some(err) = error {
                    errors.push(err);
                }
                tokens.push(CstToken::new(
                    SqlSyntaxKind::QuotedIdent,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            '$' => {
                if let Some((end, error)) = lex_dollar_string(input, start) {
                    if let Some(err) = error {
                        errors.push(err);
                    }
                    tokens.push(CstToken::new(
                        SqlSyntaxKind::StringLit,
                        &input[start..end],
                        span(start, end),
                    ));
                    i = end;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Unknown, "$", span(start, i + size)));
                    i += size;
                }
            }

            c if c.is_ascii_digit() => {
                let end = lex_number(input, start);
                tokens.push(CstToken::new(
                    SqlSyntaxKind::NumberLit,
                    &input[start..end],
                    span(start, end),
                ));
                i = end;
            }

            '.' => {
                // `.5` is a numeric literal; a bare dot is the qualifier
                if next_char(input, i + size).is_some_and(|(c, _)| c.is_ascii_digit()) {
                    let end = lex_number(input, start);
                    tokens.push(CstToken::new(
                        SqlSyntaxKind::NumberLit,
                        &input[start..end],
                        span(start, end),
                    ));
                    i = end;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Dot, ".", span(start, i + size)));
                    i += size;
                }
            }

            '<' => match next_char(input, i + size) {
                Some(('=', s2)) => {
                    tokens.push(CstToken::new(SqlSyntaxKind::LtEq, "<=", span(start, i + size + s2)));
                    i += size + s2;
                }
                Some(('>', s2)) => {
                    tokens.push(CstToken::new(SqlSyntaxKind::NotEq, "<>", span(start, i + size + s2)));
                    i += size + s2;
                }
                _ => {
                    tokens.push(CstToken::new(SqlSyntaxKind::Lt, "<", span(start, i + size)));
                    i += size;
                }
            },

            '>' => {
                if let Some(('=', s2)) = next_char(input, i + size) {
                    tokens.push(CstToken::new(SqlSyntaxKind::GtEq, ">=", span(start, i + size + s2)));
                    i += size + s2;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Gt, ">", span(start, i + size)));
                    i += size;
                }
            }

            '!' => {
                if let Some(('=', s2)) = next_char(input, i + size) {
                    tokens.push(CstToken::new(SqlSyntaxKind::NotEq, "!=", span(start, i + size + s2)));
                    i += size + s2;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Unknown, "!", span(start, i + size)));
                    i += size;
                }
            }

            ':' => {
                if let Some((':', s2)) = next_char(input, i + size) {
                    tokens.push(CstToken::new(
                        SqlSyntaxKind::CastColons,
                        "::",
                        span(start, i + size + s2),
                    ));
                    i += size + s2;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Unknown, ":", span(start, i + size)));
                    i += size;
                }
            }

            '|' => {
                if let Some(('|', s2)) = next_char(input, i + size) {
                    tokens.push(CstToken::new(SqlSyntaxKind::Concat, "||", span(start, i + size + s2)));
                    i += size + s2;
                } else {
                    tokens.push(CstToken::new(SqlSyntaxKind::Unknown, "|", span(start, i + size)));
                    i += size;
                }
            }

            '+' => {
                tokens.push(CstToken::new(SqlSyntaxKind::Plus, "+", span(start, i + size)));
                i += size;
            }
            '*' => {
                tokens.push(CstToken::new(SqlSyntaxKind::Star, "*", span(start, i + size)));
                i += size;
            }
            '%' => {
                tokens.push(CstToken::new(SqlSyntaxKind::Percent, "%", span(start, i + size)));
                i += size;
            }
            '=' => {
                tokens.push(CstToken::new(SqlSyntaxKind::Eq, "=", span(start, i + size)));
                i += size;
            }
            ',' => {
                tokens.push(CstToken::new(SqlSyntaxKind::Comma, ",", span(start, i + size)));
                i += size;
            }
            ';' => {
                tokens.push(CstToken::new(SqlSyntaxKind::Semicolon, ";", span(start, i + size)));
                i += size;
            }
            '(' => {
                tokens.push(CstToken::new(SqlSyntaxKind::LParen, "(", span(start, i + size)));
                i += size;
            }
            ')' => {
                tokens.push(CstToken::new(SqlSyntaxKind::RParen, ")", span(start, i + size)));
                i += size;
            }

            c if c.is_alphabetic() || c == '_' => {
                let end = read_word(input, start);
                let word = &input[start..end];
                let kind = classify_word(word, next_char(input, end).map(|(c, _)| c));
                tokens.push(CstToken::new(kind, word, span(start, end)));
                i = end;
            }

            _ => {
                tokens.push(CstToken::new(
                    SqlSyntaxKind::Unknown,
                    &input[start..start + size],
                    span(start, start + size),
                ));
                i += size;
            }
        }
    }

    (tokens, errors)
}

/// Classify a bare word as keyword, boolean literal, or identifier.
///
/// A reserved word immediately followed by `(` lexes as an identifier so
/// that `sum(x)` and `left(s, 2)` parse as calls rather than syntax.
fn classify_word(word: &str, following: Option<char>) -> SqlSyntaxKind {
    if following == Some('(') {
        return SqlSyntaxKind::Ident;
    }
    if word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("false") {
        return SqlSyntaxKind::BoolLit;
    }
    if is_keyword(word) {
        return SqlSyntaxKind::Keyword;
    }
    SqlSyntaxKind::Ident
}

/// Block comment with Postgres-style nesting
fn lex_block_comment(input: &str, start: usize) -> (usize, Option<LexerError>) {
    let len = input.len();
    let mut depth = 0usize;
    let mut i = start;
    while i < len {
        if input[i..].starts_with("/*") {
            depth += 1;
            i += 2;
        } else if input[i..].starts_with("*/") {
            depth -= 1;
            i += 2;
            if depth == 0 {
                return (i, None);
            }
        } else {
            match next_char(input, i) {
                Some((_, size)) => i += size,
                None => break,
            }
        }
    }
    (
        len,
        Some(LexerError::new("unterminated block comment", span(start, len))),
    )
}

/// Single-quoted string; `''` inside is an escaped quote
fn lex_string(input: &str, start: usize) -> (usize, Option<LexerError>) {
    let len = input.len();
    let mut i = start + 1;
    while i < len {
        match next_char(input, i) {
            Some(('\'', size)) => {
                if let Some(('\'', s2)) = next_char(input, i + size) {
                    i += size + s2;
                } else {
                    return (i + size, None);
                }
            }
            Some((_, size)) => i += size,
            None => break,
        }
    }
    (
        len,
        Some(LexerError::new("unterminated string literal", span(start, len))),
    )
}

/// Double-quoted identifier; `""` inside is an escaped quote
fn lex_quoted_ident(input: &str, start: usize) -> (usize, Option<LexerError>) {
    let len = input.len();
    let mut i = start + 1;
    while i < len {
        match next_char(input, i) {
            Some(('"', size)) => {
                if let Some(('"', s2)) = next_char(input, i + size) {
                    i += size + s2;
                } else {
                    return (i + size, None);
                }
            }
            Some((_, size)) => i += size,
            None => break,
        }
    }
    (
        len,
        Some(LexerError::new(
            "unterminated quoted identifier",
            span(start, len),
        )),
    )
}

/// Dollar-quoted string: `$tag$ ... $tag$` with an optional tag.
///
/// Returns None when the `$` does not open a dollar quote at all.
fn lex_dollar_string(input: &str, start: usize) -> Option<(usize, Option<LexerError>)> {
    let rest = &input[start + 1..];
    let tag_len = rest
        .char_indices()
        .take_while(|(idx, c)| {
            if *idx == 0 {
                c.is_alphabetic() || *c == '_'
            } else {
                c.is_alphanumeric() || *c == '_'
            }
        })
        .last()
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    if !rest[tag_len..].starts_with('$') {
        return None;
    }
    let delim = &input[start..start + 1 + tag_len + 1];
    let body_start = start + delim.len();
    match input[body_start..].find(delim) {
        Some(rel) => Some((body_start + rel + delim.len(), None)),
        None => Some((
            input.len(),
            Some(LexerError::new(
                "unterminated dollar-quoted string",
                span(start, input.len()),
            )),
        )),
    }
}

/// Numeric literal: digits, optional fraction, optional exponent
fn lex_number(input: &str, start: usize) -> usize {
    let mut i = start;
    let mut seen_dot = false;
    while let Some((c, size)) = next_char(input, i) {
        if c.is_ascii_digit() {
            i += size;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            i += size;
        } else {
            break;
        }
    }
    // Exponent part only counts when followed by digits
    if let Some((c, size)) = next_char(input, i)
        && (c == 'e' || c == 'E')
    {
        let mut j = i + size;
        if let Some((sign, s2)) = next_char(input, j)
            && (sign == '+' || sign == '-')
        {
            j += s2;
        }
        if next_char(input, j).is_some_and(|(c, _)| c.is_ascii_digit()) {
            i = j;
            while let Some((c, size)) = next_char(input, i) {
                if c.is_ascii_digit() {
                    i += size;
                } else {
                    break;
                }
            }
        }
    }
    i
}

/// Placeholder token; scans to the close delimiter
fn lex_placeholder(
    input: &str,
    start: usize,
    placeholder: &PlaceholderSyntax,
) -> (usize, Option<LexerError>) {
    let body_start = start + placeholder.open.len();
    match input[body_start..].find(placeholder.close.as_str()) {
        Some(rel) => (body_start + rel + placeholder.close.len(), None),
        None => (
            input.len(),
            Some(LexerError::new(
                "unterminated placeholder",
                span(start, input.len()),
            )),
        ),
    }
}

fn read_word(input: &str, start: usize) -> usize {
    let mut i = start;
    while let Some((c, size)) = next_char(input, i) {
        if c.is_alphanumeric() || c == '_' {
            i += size;
        } else {
            break;
        }
    }
    i
}

fn next_char(input: &str, pos: usize) -> Option<(char, usize)> {
    input[pos..].chars().next().map(|c| (c, c.len_utf8()))
}

fn span(start: usize, end: usize) -> CstSpan {
    start..end
}
