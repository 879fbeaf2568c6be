// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

use crate::placeholder::Dialect;

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct RouterConfig {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Template parsing and matching configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TemplateConfig {
    /// Dialect applied to patterned placeholders (`wildcard` or `regex`)
    #[serde(default)]
    pub dialect: Dialect,
    /// Fail registration when the same `(template, method)` pair is
    /// registered twice; when off, the later registration wins silently
    #[serde(default = "default_detect_duplicate_paths")]
    pub detect_duplicate_paths: bool,
    /// Placeholder opening token
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Token separating a placeholder name from its sub-pattern
    #[serde(default = "default_split")]
    pub split: String,
    /// Placeholder closing token
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            detect_duplicate_paths: default_detect_duplicate_paths(),
            prefix: default_prefix(),
            split: default_split(),
            suffix: default_suffix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Minimum level written out: `debug`, `info`, `warn` or `error`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional log file; stdout/stderr when absent
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_file: None,
        }
    }
}

fn default_detect_duplicate_paths() -> bool {
    true
}

fn default_prefix() -> String {
    "${".to_string()
}

fn default_split() -> String {
    ":".to_string()
}

fn default_suffix() -> String {
    "}".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
