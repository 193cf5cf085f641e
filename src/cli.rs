//! CLI definition and parsing for the `pfs` driver.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - --config wins over $PORTABLE_FS_CONFIG and the default location.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Inspect and manipulate files through the portable_fs engine.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Portable filesystem operations")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json_logs: bool,

    /// Read settings from this XML file instead of the default location.
    #[arg(long, global = true, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Resolve relative paths against this directory.
    #[arg(short = 'C', long, global = true, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub cwd: Option<String>,

    /// Do not clear read-only flags when a delete/copy/move is denied.
    #[arg(long, global = true)]
    pub no_retry: bool,

    /// Copy timestamps and permissions along with file data.
    #[arg(long, global = true)]
    pub preserve_metadata: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Exit 0 if the path exists, 1 otherwise.
    Exists { path: String },
    /// Print size, modification time and flags of a path.
    Info {
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// List directory entries, depth-first.
    Scan {
        path: String,
        #[arg(short, long)]
        recurse: bool,
        /// Stop after this many entries.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// One JSON object per line.
        #[arg(long)]
        json: bool,
    },
    /// Create a directory and any missing ancestors.
    Mkdir { path: String },
    /// Delete a file, link or whole directory tree.
    Rm { path: String },
    /// Copy a file, replacing the destination.
    Cp {
        from: String,
        to: String,
        /// Create the destination's missing folders.
        #[arg(short, long)]
        parents: bool,
    },
    /// Move or rename a file.
    Mv { from: String, to: String },
    /// Set a file's modification time (Unix seconds).
    Touch {
        path: String,
        #[arg(long, value_name = "SECS", allow_hyphen_values = true)]
        time: i64,
    },
    /// Write a file's contents to stdout.
    Cat { path: String },
    /// Print the config file location and exit.
    ConfigPath,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.no_retry {
            cfg.options.retry_read_only = false;
        }
        if self.preserve_metadata {
            cfg.options.preserve_metadata = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
