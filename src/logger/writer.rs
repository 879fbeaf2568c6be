//! Log writer module
//!
//! Provides thread-safe log writing to stdout/stderr or a log file.
//! The writer is process-wide and set once; routers themselves stay plain
//! values with no global state.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::Level;

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Write to file
    File(Mutex<File>),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Target for debug/info lines
    out: LogTarget,
    /// Target for warn/error lines
    err: LogTarget,
    /// Minimum level written out
    level: Level,
}

impl LogWriter {
    /// Create a new log writer with an optional file path.
    ///
    /// When a file is given, every level goes to it; otherwise debug/info
    /// go to stdout and warn/error to stderr.
    fn new(level: Level, log_file: Option<&str>) -> io::Result<Self> {
        let (out, err) = match log_file {
            Some(path) => (
                LogTarget::File(Mutex::new(open_log_file(path)?)),
                LogTarget::File(Mutex::new(open_log_file(path)?)),
            ),
            None => (LogTarget::Stdout, LogTarget::Stderr),
        };

        Ok(Self { out, err, level })
    }

    /// Whether lines at `level` pass the configured filter.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Write a debug/info line
    pub fn write_out(&self, message: &str) {
        write_to_target(&self.out, message);
    }

    /// Write a warn/error line
    pub fn write_err(&self, message: &str) {
        write_to_target(&self.err, message);
    }
}

/// Install the process-wide writer; a second call keeps the first writer.
pub fn init(level: Level, log_file: Option<&str>) -> io::Result<()> {
    let writer = LogWriter::new(level, log_file)?;
    let _ = LOG_WRITER.set(writer);
    Ok(())
}

pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}

fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn write_to_target(target: &LogTarget, message: &str) {
    match target {
        LogTarget::Stdout => println!("{message}"),
        LogTarget::Stderr => eprintln!("{message}"),
        LogTarget::File(file) => {
            if let Ok(mut file) = file.lock() {
                // A failed log write must not take the process down.
                let _ = writeln!(file, "{message}");
            }
        }
    }
}
