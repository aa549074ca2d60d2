//! Round-trip validation
//!
//! Checks the central guarantee of the crate on a given input:
//! `print(parse(source)) == source`, byte for byte, and that re-parsing the
//! printed text yields a tree with the same shape. Useful as a harness for
//! corpora of production queries.

use crate::config::ParseOptions;
use crate::cst::printer::print;
use crate::parser::parse_with_options;

/// Result of round-trip validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Original source text
    pub original: String,
    /// Text printed back from the parsed tree
    pub printed: String,
    /// Debug rendering of the first tree, for shape comparison
    pub tree_shape: String,
    /// Debug rendering of the re-parsed tree
    pub reparsed_shape: String,
    /// Diagnostic messages from the first parse
    pub diagnostics: Vec<String>,
}

impl ValidationResult {
    /// Both identities hold: exact text and stable shape
    pub fn is_valid(&self) -> bool {
        self.original == self.printed && self.tree_shape == self.reparsed_shape
    }

    /// Human-readable list of what went wrong
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.original != self.printed {
            let at = self
                .original
                .bytes()
                .zip(self.printed.bytes())
                .position(|(a, b)| a != b)
                .unwrap_or(self.original.len().min(self.printed.len()));
            issues.push(format!("printed text diverges from source at byte {at}"));
        }
        if self.tree_shape != self.reparsed_shape {
            issues.push("re-parsing the printed text produced a different tree".to_string());
        }
        issues
    }
}

/// Validate the round-trip guarantee for one input
pub fn validate(source: &str) -> ValidationResult {
    validate_with_options(source, &ParseOptions::default())
}

/// Validate with explicit parse options
pub fn validate_with_options(source: &str, options: &ParseOptions) -> ValidationResult {
    let first = parse_with_options(source, options.clone());
    let printed = print(&first.syntax());
    let second = parse_with_options(&printed, options.clone());

    ValidationResult {
        original: source.to_string(),
        printed,
        tree_shape: format!("{:#?}", first.syntax()),
        reparsed_shape: format!("{:#?}", second.syntax()),
        diagnostics: first
            .diagnostics()
            .iter()
            .map(|d| d.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &[&str] = &[
        "SELECT 1",
        "select   a ,b\t,c from t",
        "SELECT a FROM t WHERE a = 'it''s'",
        "WITH x AS (SELECT 1) SELECT * FROM x",
        "SELECT count(*) n FROM t GROUP BY 1 HAVING count(*) > 5",
        "SELECT a FROM t ORDER BY a DESC NULLS FIRST LIMIT 10 OFFSET 5",
        "SELECT row_number() OVER (PARTITION BY g ORDER BY d) FROM t",
        "SELECT * FROM a JOIN b ON a.id = b.id LEFT JOIN c USING (id)",
        "SELECT CASE WHEN a THEN 1 ELSE 0 END FROM t",
        "SELECT a FROM t UNION ALL SELECT b FROM u",
        "SELECT {{col}} FROM {{table}} WHERE d BETWEEN {{lo}} AND {{hi}}",
        "SELECT x::decimal(10, 2), 'a' || 'b' FROM t",
        "-- leading comment\nSELECT /* inline */ a\nFROM t -- trailing",
        "SELECT a FROM t;\nSELECT b FROM u;",
        "",
        "   \n\t  ",
        "this is not sql at all",
        "SELECT FROM WHERE",
        "SELECT (unclosed FROM t",
    ];

    #[test]
    fn corpus_round_trips() {
        for source in CORPUS {
            let result = validate(source);
            assert!(
                result.is_valid(),
                "round trip failed for {source:?}: {:?}",
                result.issues()
            );
        }
    }

    #[test]
    fn divergence_is_reported_with_position() {
        let mut result = validate("SELECT 1");
        result.printed = "SELECT 2".to_string();
        assert!(!result.is_valid());
        assert!(result.issues()[0].contains("byte 7"));
    }
}
