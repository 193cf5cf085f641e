//! Typed error definitions for portable_fs.
//!
//! Every failure carries the canonical path it concerns. `FsError::class()`
//! folds the variants into the three conditions callers branch on:
//! absence, permission denial and everything else (probe failures).
//!
//! Messages for probe failures are enriched with the platform error text and,
//! when the raw OS code is recognised, a short actionable hint.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("No such file or directory: {path}")]
    NotFound { path: String },

    /// A path segment that should be a directory is not one.
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Permission denied on {path}: {message}")]
    PermissionDenied {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    /// The path exists but holds something other than a directory.
    #[error("Path exists and is not a directory: {path}")]
    Occupied { path: String },

    #[error("Is a directory: {path}")]
    IsADirectory { path: String },

    #[error("{message}")]
    Probe {
        path: String,
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Could not remove {failures} entries while deleting {path}")]
    Incomplete { path: String, failures: usize },
}

/// Coarse failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Absent,
    PermissionDenied,
    Probe,
}

impl FsError {
    /// Classify an `io::Error` raised while performing `op` on `path`.
    pub fn from_io(op: &str, path: &str, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.to_string() },
            io::ErrorKind::NotADirectory => FsError::NotADirectory { path: path.to_string() },
            io::ErrorKind::IsADirectory => FsError::IsADirectory { path: path.to_string() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied {
                path: path.to_string(),
                message: build_message(op, path, &e),
                source: e,
            },
            _ => FsError::Probe {
                path: path.to_string(),
                message: build_message(op, path, &e),
                source: e,
            },
        }
    }

    /// Adapter for `.map_err(...)` in code returning `Result<_, FsError>`.
    pub fn with_op<'a>(op: &'a str, path: &'a str) -> impl FnOnce(io::Error) -> FsError + 'a {
        move |e| FsError::from_io(op, path, e)
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            FsError::NotFound { .. } | FsError::NotADirectory { .. } => ErrorClass::Absent,
            FsError::PermissionDenied { .. } => ErrorClass::PermissionDenied,
            _ => ErrorClass::Probe,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.class() == ErrorClass::Absent
    }

    /// Canonical path the error concerns.
    pub fn path(&self) -> &str {
        match self {
            FsError::NotFound { path }
            | FsError::NotADirectory { path }
            | FsError::PermissionDenied { path, .. }
            | FsError::Occupied { path }
            | FsError::IsADirectory { path }
            | FsError::Probe { path, .. }
            | FsError::Incomplete { path, .. } => path,
        }
    }
}

/// Format a human-friendly message with op/path plus platform-aware hints.
pub(crate) fn build_message(op: &str, path: &str, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path, e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" - permission denied; check ownership and the read-only bit.");
                }
                libc::ENOTDIR => {
                    msg.push_str(" - a path segment is not a directory.");
                }
                libc::ENOTEMPTY => {
                    msg.push_str(" - directory not empty; remove its contents first.");
                }
                libc::EBUSY => {
                    msg.push_str(" - resource busy; another process holds it open.");
                }
                libc::EEXIST => {
                    msg.push_str(" - already exists.");
                }
                libc::ENOSPC => {
                    msg.push_str(" - insufficient space on device.");
                }
                libc::EROFS => {
                    msg.push_str(" - read-only filesystem; cannot write here.");
                }
                libc::ELOOP => {
                    msg.push_str(" - too many symbolic link levels; possible symlink cycle.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" - filename or path too long; shorten path segments.");
                }
                libc::EMFILE => {
                    msg.push_str(" - process file descriptor limit reached.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" - access denied; check permissions and the read-only attribute."), // ERROR_ACCESS_DENIED
                32 => msg.push_str(" - sharing violation; file is in use."), // ERROR_SHARING_VIOLATION
                145 => msg.push_str(" - directory not empty."), // ERROR_DIR_NOT_EMPTY
                112 => msg.push_str(" - insufficient disk space."), // ERROR_DISK_FULL
                19 => msg.push_str(" - write protected media."), // ERROR_WRITE_PROTECT
                206 => msg.push_str(" - filename or path too long."), // ERROR_FILENAME_EXCED_RANGE
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" - permission denied; check ownership and the read-only bit.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" - path not found.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" - already exists.");
            }
            _ => {}
        }
    }

    msg
}
