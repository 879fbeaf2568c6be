//! Router error types
//!
//! All failures surface at registration or configuration time.
//! Lookup never fails; a path that matches nothing is a miss, not an error.

use thiserror::Error;

/// Errors raised while configuring the router or registering actions.
#[derive(Debug, Error)]
pub enum RouterError {
    /// Template string could not be parsed: an unterminated placeholder
    /// or a placeholder with an empty name.
    #[error("malformed action template `{template}`: {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// A placeholder sub-pattern failed to compile under the regex dialect.
    #[error("invalid placeholder pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Same `(template, method)` pair registered twice while duplicate
    /// detection is enabled.
    #[error("duplicate action path `{template}` for method {}", method.as_deref().unwrap_or("*"))]
    DuplicateRoute {
        template: String,
        method: Option<String>,
    },

    /// Configuration could not be loaded or deserialized.
    #[error("configuration error")]
    Config(#[from] config::ConfigError),
}

impl RouterError {
    pub(crate) fn malformed(template: &str, reason: &str) -> Self {
        Self::MalformedTemplate {
            template: template.to_string(),
            reason: reason.to_string(),
        }
    }
}
