//! Core configuration types.
//! - Options tune the engine's policies and are owned by each `FileSystem`.
//! - Config wraps Options with the driver's logging settings.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{COPY_BUFFER_DEFAULT, DIR_MODE_DEFAULT};

/// Engine policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Clear the read-only flag and retry once when a delete/copy/move is denied.
    pub retry_read_only: bool,
    /// Mode for newly created directories (Unix; the umask still applies).
    pub dir_mode: u32,
    /// Buffer size used when streaming file copies.
    pub copy_buffer_size: usize,
    /// Copy timestamps and permissions from source to destination on copy.
    pub preserve_metadata: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            retry_read_only: true,
            dir_mode: DIR_MODE_DEFAULT,
            copy_buffer_size: COPY_BUFFER_DEFAULT,
            preserve_metadata: false,
        }
    }
}

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for the `pfs` driver.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub options: Options,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parse_aliases() {
        assert_eq!(LogLevel::parse("ERROR"), Some(LogLevel::Quiet));
        assert_eq!(LogLevel::parse("verbose"), Some(LogLevel::Info));
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn default_options_retry_read_only() {
        let o = Options::default();
        assert!(o.retry_read_only);
        assert_eq!(o.dir_mode, 0o777);
        assert!(!o.preserve_metadata);
    }
}
