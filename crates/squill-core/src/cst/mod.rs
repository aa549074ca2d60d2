//! Concrete Syntax Tree (CST) for SQL
//!
//! A lossless syntax tree built on the Rowan library. The CST keeps every
//! byte of the source, whitespace, comments, casing, and malformed spans
//! included, enabling:
//! - Exact printing: `parse(source).text() == source` for any input
//! - Source-to-source transformations that touch only what they change
//! - Template placeholders carried as opaque leaves through parse and print
//!
//! ## Architecture
//!
//! Rowan's green/red tree pattern:
//!
//! - **Green tree**: immutable, position-independent storage. Stores the
//!   actual source text with trivia, shares identical subtrees, cheap to
//!   clone.
//! - **Red tree**: on-demand view with parent pointers and offsets, used
//!   for navigation and the typed [`ast`] layer.
//!
//! ## Trivia handling
//!
//! Trivia is stored as ordinary tokens inside the tree rather than attached
//! metadata; the [`trivia`] module provides leading/trailing views over it.

mod builder;
mod language;
mod lexer;
mod nodes;
mod parser;
mod precedence;
mod syntax_kind;

pub mod ast;
pub mod edit;
pub mod printer;
pub mod round_trip;
pub mod trivia;

pub use builder::{Checkpoint, CstBuilder};
pub use edit::{GreenElement, NodePath, insert_child, remove_children, replace};
pub use language::SqlLanguage;
pub use lexer::{CstLexResult, CstSpan, CstToken, LexerError, lex_with_trivia};
pub use nodes::*;
pub use parser::parse_sql;
pub use precedence::{Precedence, infix_precedence};
pub use round_trip::{ValidationResult, validate, validate_with_options};
pub use syntax_kind::{KEYWORDS, SqlSyntaxKind, is_keyword};
pub use trivia::{TriviaPiece, comments_in, first_meaningful_token, leading_trivia, trailing_trivia};
