//! Logger module
//!
//! Registration-phase logging for the router:
//! - debug line per registered action
//! - warning when a lenient duplicate registration replaces an action
//! - error reporting for hosts that refuse to start on bad route tables
//!
//! Usable without initialization: debug lines are suppressed and the rest
//! falls back to stdout/stderr.

pub mod writer;

use chrono::Local;

use crate::config::LoggingConfig;

/// Log line severity, ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parse a configured level name; unknown names fall back to `info`.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> std::io::Result<()> {
    writer::init(Level::parse(&config.level), config.log_file.as_deref())
}

pub fn log_debug(message: &str) {
    write(Level::Debug, message);
}

pub fn log_info(message: &str) {
    write(Level::Info, message);
}

pub fn log_warning(message: &str) {
    write(Level::Warn, message);
}

pub fn log_error(message: &str) {
    write(Level::Error, message);
}

fn write(level: Level, message: &str) {
    let line = || {
        format!(
            "[{}] [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            level.tag(),
            message
        )
    };

    match writer::get() {
        Some(writer) => {
            if writer.enabled(level) {
                if level >= Level::Warn {
                    writer.write_err(&line());
                } else {
                    writer.write_out(&line());
                }
            }
        }
        None => match level {
            // Uninitialized: keep registration debug noise off stdout.
            Level::Debug => {}
            Level::Info => println!("{}", line()),
            Level::Warn | Level::Error => eprintln!("{}", line()),
        },
    }
}
