//! Parser configuration

use serde::{Deserialize, Serialize};

use crate::error::SquillError;
use crate::result::Result;

/// Delimiters for template placeholders embedded in SQL text.
///
/// The default is the `{{ ... }}` mustache style. Everything between the
/// open and close delimiter is kept verbatim and never interpreted as SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderSyntax {
    pub open: String,
    pub close: String,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            open: "{{".to_string(),
            close: "}}".to_string(),
        }
    }
}

impl PlaceholderSyntax {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self> {
        let syntax = Self {
            open: open.into(),
            close: close.into(),
        };
        syntax.validate()?;
        Ok(syntax)
    }

    fn validate(&self) -> Result<()> {
        if self.open.is_empty() || self.close.is_empty() {
            return Err(SquillError::config(
                "placeholder delimiters must be non-empty",
            ));
        }
        if self.open.chars().next().is_some_and(|c| c.is_alphanumeric())
            || self.close.chars().next().is_some_and(|c| c.is_alphanumeric())
        {
            return Err(SquillError::config(
                "placeholder delimiters must not start with an alphanumeric character",
            ));
        }
        Ok(())
    }
}

/// Options controlling a single parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub placeholder: PlaceholderSyntax,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placeholder_is_mustache() {
        let opts = ParseOptions::default();
        assert_eq!(opts.placeholder.open, "{{");
        assert_eq!(opts.placeholder.close, "}}");
    }

    #[test]
    fn rejects_empty_delimiters() {
        assert!(PlaceholderSyntax::new("", "}}").is_err());
        assert!(PlaceholderSyntax::new("${", "").is_err());
    }

    #[test]
    fn rejects_alphanumeric_delimiters() {
        assert!(PlaceholderSyntax::new("x{", "}").is_err());
        assert!(PlaceholderSyntax::new("${", "}").is_ok());
    }

    #[test]
    fn options_round_trip_through_json() {
        let opts = ParseOptions {
            placeholder: PlaceholderSyntax::new("${", "}").unwrap(),
        };
        let json = serde_json::to_string(&opts).unwrap();
        let back: ParseOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opts);
    }
}
