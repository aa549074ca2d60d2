//! Result type alias for SQL tree operations

use crate::error::SquillError;

/// Standard Result type for SQL tree operations
pub type Result<T> = std::result::Result<T, SquillError>;
