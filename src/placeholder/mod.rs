//! Placeholder sub-pattern dialects
//!
//! A placeholder either has no sub-pattern (it accepts any value) or carries
//! one interpreted by the dialect the route table was configured with:
//! - `wildcard`: glob patterns with `?` and `*`
//! - `regex`: regular expressions, anchored to both ends
//!
//! Dialects are tagged variants carrying their compiled form, built once at
//! registration time.

pub mod wildcard;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Which algorithm interprets placeholder sub-patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Wildcard,
    Regex,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::Wildcard
    }
}

/// Compiled sub-pattern for one placeholder slot.
#[derive(Debug, Clone)]
pub enum PlaceholderPattern {
    /// No sub-pattern was given; every value is accepted.
    Plain,
    /// Wildcard glob, kept as source (matching needs no compilation step).
    Wildcard(String),
    /// Anchored regular expression plus its original source form.
    Regex {
        raw: String,
        compiled: regex::Regex,
    },
}

impl PlaceholderPattern {
    /// Compile an optional sub-pattern under the given dialect.
    ///
    /// Regex sub-patterns are anchored to both ends so that the whole
    /// placeholder value must satisfy them.
    pub fn compile(pattern: Option<&str>, dialect: Dialect) -> Result<Self, RouterError> {
        let Some(pattern) = pattern else {
            return Ok(Self::Plain);
        };

        match dialect {
            Dialect::Wildcard => Ok(Self::Wildcard(pattern.to_string())),
            Dialect::Regex => {
                let compiled = regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
                    RouterError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    }
                })?;
                Ok(Self::Regex {
                    raw: pattern.to_string(),
                    compiled,
                })
            }
        }
    }

    /// Whether `value` satisfies this sub-pattern.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Plain => true,
            Self::Wildcard(pattern) => wildcard::matches(pattern, value),
            Self::Regex { compiled, .. } => compiled.is_match(value),
        }
    }

    /// Original sub-pattern text, if one was given.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Plain => None,
            Self::Wildcard(pattern) => Some(pattern),
            Self::Regex { raw, .. } => Some(raw),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}
