//! Parse entry points
//!
//! The façade over the CST machinery: hand in source text, get back a
//! [`Parse`] holding the lossless tree, the original source, and any
//! advisory diagnostics. Parsing is total; diagnostics never block it.

use std::sync::Arc;

use crate::config::ParseOptions;
use crate::cst::ast::{AstNode, SourceFile};
use crate::cst::{SqlSyntaxNode, parse_sql};
use crate::diagnostics::ParseDiagnostic;

/// Outcome of parsing SQL text
#[derive(Debug, Clone)]
pub struct Parse {
    source: Arc<str>,
    root: SqlSyntaxNode,
    diagnostics: Vec<ParseDiagnostic>,
    options: ParseOptions,
}

impl Parse {
    /// The original source that was parsed
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root of the syntax tree; its text always equals the source
    pub fn syntax(&self) -> SqlSyntaxNode {
        self.root.clone()
    }

    /// Typed view of the root
    pub fn tree(&self) -> SourceFile {
        SourceFile::cast(self.root.clone())
            .unwrap_or_else(|| unreachable!("the parser always emits a SourceFile root"))
    }

    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    /// No diagnostics of any severity
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The options this parse was produced with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Parse with default options (`{{ ... }}` placeholders)
pub fn parse(source: &str) -> Parse {
    parse_with_options(source, ParseOptions::default())
}

/// Parse with explicit options
pub fn parse_with_options(source: &str, options: ParseOptions) -> Parse {
    let (root, diagnostics) = parse_sql(source, &options);
    Parse {
        source: Arc::from(source),
        root,
        diagnostics,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_total_and_lossless() {
        for source in ["SELECT 1", "not sql", "", "SELECT 'unterminated"] {
            let parsed = parse(source);
            assert_eq!(parsed.syntax().text().to_string(), source);
            assert_eq!(parsed.source(), source);
        }
    }

    #[test]
    fn clean_parse_has_no_diagnostics() {
        let parsed = parse("SELECT a FROM t");
        assert!(parsed.is_clean());
        assert_eq!(parsed.tree().statements().count(), 1);
    }

    #[test]
    fn diagnostics_carry_positions() {
        let parsed = parse("SELECT a FROM t WHERE @ x");
        assert!(!parsed.is_clean());
        let diag = &parsed.diagnostics()[0];
        assert_eq!(diag.line, 1);
        assert!(diag.column > 1);
    }
}
