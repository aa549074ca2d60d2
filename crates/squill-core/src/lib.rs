//! Squill Core
//!
//! Lossless SQL parsing, rewriting, and reprinting for the
//! Postgres/Redshift dialect. This crate provides the fundamental
//! components for turning SELECT queries (CTEs and window functions
//! included) into concrete syntax trees that keep every byte of the source,
//! editing those trees structurally, and printing them back.
//!
//! The central guarantees:
//!
//! - **Totality**: [`parse`] and [`cst::printer::print`] never fail. Any
//!   input yields a tree; any tree yields text. Malformed or out-of-subset
//!   SQL lands in opaque spans and is reported through advisory
//!   [`diagnostics`], never as an error.
//! - **Round-trip identity**: `parse(source).syntax().text() == source` for
//!   every input, comments, whitespace, casing, and template placeholders
//!   included.
//! - **Immutable trees**: edits in [`cst::edit`] produce new roots that
//!   share untouched subtrees with the original; previously held trees
//!   stay valid and printable.
//!
//! ```
//! use squill_core::{parse, cst::printer::print};
//!
//! let source = "SELECT a, b FROM t WHERE dt >= {{start_date}} -- note\n";
//! let parsed = parse(source);
//! assert_eq!(print(&parsed.syntax()), source);
//! ```

pub mod config;
pub mod cst; // Concrete Syntax Tree (lossless, Rowan-based)
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod result;

// Re-export commonly used types
pub use config::{ParseOptions, PlaceholderSyntax};
pub use cst::{
    NodePath, SqlSyntaxElement, SqlSyntaxKind, SqlSyntaxNode, SqlSyntaxToken, ValidationResult,
    insert_child, remove_children, replace, validate,
};
pub use diagnostics::{ParseDiagnostic, Severity};
pub use error::{ErrorKind, SquillError};
pub use parser::{Parse, parse, parse_with_options};
pub use result::Result;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
