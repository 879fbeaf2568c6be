//! Parametric path templates
//!
//! A [`Template`] is the compiled, immutable form of a path template string
//! such as `/user/${id}/doc${doc:d*}`. Parsing happens once at registration
//! ([`parser`]); matching and value extraction live in [`matcher`].

pub mod matcher;
pub mod parser;

use crate::config::TemplateConfig;
use crate::error::RouterError;
use crate::placeholder::PlaceholderPattern;

/// One named slot of a template, with its compiled sub-pattern.
#[derive(Debug, Clone)]
pub struct Placeholder {
    name: String,
    pattern: PlaceholderPattern,
}

impl Placeholder {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &PlaceholderPattern {
        &self.pattern
    }
}

/// Compiled path template, immutable after construction.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    depth: usize,
    fixed: Vec<String>,
    placeholders: Vec<Placeholder>,
}

impl Template {
    /// Parse `source` and compile its sub-patterns for the configured
    /// dialect.
    pub fn compile(source: &str, config: &TemplateConfig) -> Result<Self, RouterError> {
        let parsed = parser::parse(source, config)?;

        let mut placeholders = Vec::with_capacity(parsed.names.len());
        for (name, pattern) in parsed.names.into_iter().zip(&parsed.patterns) {
            placeholders.push(Placeholder {
                name,
                pattern: PlaceholderPattern::compile(pattern.as_deref(), config.dialect)?,
            });
        }

        Ok(Self {
            source: source.to_string(),
            depth: source.matches('/').count(),
            fixed: parsed.fixed,
            placeholders,
        })
    }

    /// Original template string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of `/` characters in the template, the fast-reject key
    /// during lookup.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// A template without placeholders only ever matches its exact source.
    pub fn is_literal(&self) -> bool {
        self.placeholders.is_empty()
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub(crate) fn fixed(&self) -> &[String] {
        &self.fixed
    }

    /// Rebuild the template surface form from its parts.
    ///
    /// Produces the canonical spelling: trimmed names and sub-patterns,
    /// original delimiter tokens.
    pub fn render(&self, config: &TemplateConfig) -> String {
        let mut out = String::with_capacity(self.source.len());
        out.push_str(&self.fixed[0]);
        for (i, placeholder) in self.placeholders.iter().enumerate() {
            out.push_str(&config.prefix);
            out.push_str(&placeholder.name);
            if let Some(pattern) = placeholder.pattern.raw() {
                out.push_str(&config.split);
                out.push_str(pattern);
            }
            out.push_str(&config.suffix);
            out.push_str(&self.fixed[i + 1]);
        }
        out
    }
}
