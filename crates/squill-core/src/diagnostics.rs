//! Advisory diagnostics emitted during parsing
//!
//! Diagnostics never block a parse. Every input produces a tree whose text
//! equals the source; diagnostics tell a caller where the parser had to fall
//! back to opaque spans or noticed malformed lexical structure.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Severity of a parse diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unusual but representable input, e.g. an empty placeholder
    Warning,
    /// Input the grammar could not shape; preserved as an opaque span
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single advisory diagnostic tied to a byte range of the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    pub severity: Severity,
    pub message: String,
    /// Byte offset range into the original source
    pub start: usize,
    pub end: usize,
    /// 1-based line of `start`
    pub line: usize,
    /// 1-based column of `start`
    pub column: usize,
}

impl ParseDiagnostic {
    pub fn error(message: impl Into<String>, span: Range<usize>, source: &str) -> Self {
        Self::new(Severity::Error, message, span, source)
    }

    pub fn warning(message: impl Into<String>, span: Range<usize>, source: &str) -> Self {
        Self::new(Severity::Warning, message, span, source)
    }

    fn new(
        severity: Severity,
        message: impl Into<String>,
        span: Range<usize>,
        source: &str,
    ) -> Self {
        let (line, column) = offset_to_line_col(source, span.start);
        Self {
            severity,
            message: message.into(),
            start: span.start,
            end: span.end,
            line,
            column,
        }
    }

    /// The byte range this diagnostic covers
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at line {}, column {}",
            self.severity, self.message, self.line, self.column
        )
    }
}

/// Convert a byte offset into a 1-based (line, column) pair
pub fn offset_to_line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut col = 1;
    for (idx, ch) in source.char_indices() {
        if idx >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Render diagnostics as a JSON array, for machine consumption
pub fn to_json(diagnostics: &[ParseDiagnostic]) -> String {
    serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_from_offset() {
        let src = "SELECT a\nFROM t\nWHERE x";
        assert_eq!(offset_to_line_col(src, 0), (1, 1));
        assert_eq!(offset_to_line_col(src, 7), (1, 8));
        assert_eq!(offset_to_line_col(src, 9), (2, 1));
        assert_eq!(offset_to_line_col(src, 16), (3, 1));
        assert_eq!(offset_to_line_col(src, 999), (3, 8));
    }

    #[test]
    fn diagnostic_display() {
        let src = "SELECT\nFROM t";
        let d = ParseDiagnostic::error("unparseable span", 7..11, src);
        assert_eq!(d.line, 2);
        assert_eq!(d.column, 1);
        assert!(d.to_string().contains("error: unparseable span at line 2"));
    }

    #[test]
    fn serializes_to_json() {
        let src = "SELECT 1";
        let d = ParseDiagnostic::warning("empty placeholder", 0..2, src);
        let json = to_json(&[d]);
        assert!(json.contains("\"severity\": \"warning\""));
        assert!(json.contains("\"line\": 1"));
    }
}
