// Configuration module entry point
// Loads router configuration from files and environment variables

mod types;

use crate::error::RouterError;

// Re-export public types
pub use types::{LoggingConfig, RouterConfig, TemplateConfig};

impl RouterConfig {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; missing keys fall back to defaults and any
    /// `ROUTER_`-prefixed environment variable overrides the file.
    pub fn load_from(config_path: &str) -> Result<Self, RouterError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("ROUTER").separator("__"))
            .set_default("template.dialect", "wildcard")?
            .set_default("template.detect_duplicate_paths", true)?
            .set_default("template.prefix", "${")?
            .set_default("template.split", ":")?
            .set_default("template.suffix", "}")?
            .set_default("logging.level", "info")?
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
