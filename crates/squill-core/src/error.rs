//! Error types for SQL tree operations
//!
//! Parsing and printing never fail; malformed input is represented in the
//! tree and reported through advisory diagnostics. Errors here come from the
//! structural edit API, where an invalid request has no tree representation.

use thiserror::Error;

use crate::cst::SqlSyntaxKind;

/// Main error type for SQL tree operations
#[derive(Debug, Error)]
pub enum SquillError {
    /// A node path did not resolve to an element of the tree
    #[error("invalid node path: no element at index {index} (depth {depth})")]
    PathNotFound { index: usize, depth: usize },

    /// A replacement node is structurally incompatible with its target slot
    #[error("incompatible edit: cannot place {replacement:?} where {target:?} stands")]
    IncompatibleKind {
        target: SqlSyntaxKind,
        replacement: SqlSyntaxKind,
    },

    /// An edit addressed a token slot with a node operation or vice versa
    #[error("invalid edit: {message}")]
    InvalidEdit { message: String },

    /// A child range for removal or insertion is out of bounds
    #[error("child range {start}..{end} out of bounds for node with {len} children")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Configuration validation errors
    #[error("configuration error: {message}")]
    ConfigError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Path,
    Edit,
    Config,
}

impl SquillError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SquillError::PathNotFound { .. } => ErrorKind::Path,
            SquillError::IncompatibleKind { .. }
            | SquillError::InvalidEdit { .. }
            | SquillError::RangeOutOfBounds { .. } => ErrorKind::Edit,
            SquillError::ConfigError { .. } => ErrorKind::Config,
        }
    }

    /// Create an invalid-edit error
    pub fn invalid_edit(message: impl Into<String>) -> Self {
        SquillError::InvalidEdit {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        SquillError::ConfigError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        let err = SquillError::invalid_edit("token slot");
        assert_eq!(err.kind(), ErrorKind::Edit);
        let err = SquillError::PathNotFound { index: 3, depth: 1 };
        assert_eq!(err.kind(), ErrorKind::Path);
    }

    #[test]
    fn display_names_the_slot() {
        let err = SquillError::IncompatibleKind {
            target: SqlSyntaxKind::WhereClause,
            replacement: SqlSyntaxKind::Literal,
        };
        let text = err.to_string();
        assert!(text.contains("WhereClause"));
        assert!(text.contains("Literal"));
    }
}
