//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform capability
//! interface so the engine in `fs_ops` stays platform-agnostic. Exactly one
//! implementation is compiled in and exported as [`Native`].
//!
//! Path encoding also lives here: callers always speak forward-slash paths,
//! and only this module knows what the native separator is.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::attributes::Attributes;

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::{UnixPlatform as Native, to_canonical, to_native};

#[cfg(windows)]
pub use windows::{WindowsPlatform as Native, to_canonical, to_native};

/// Native filesystem capabilities the engine is built on.
///
/// Every method is a single blocking native call (or a short fixed sequence
/// of them); none holds a handle past its own return except `read_dir`, whose
/// handle is released when the iterator is dropped.
pub trait Platform {
    /// Metadata following symbolic links.
    fn stat(&self, path: &Path) -> io::Result<Attributes>;

    /// Metadata of the entry itself; links are not followed.
    fn lstat(&self, path: &Path) -> io::Result<Attributes>;

    fn read_dir(&self, path: &Path) -> io::Result<fs::ReadDir>;

    /// Create one directory level. `mode` is ignored where it has no meaning.
    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Remove a symbolic link (never its target).
    fn remove_link(&self, path: &Path) -> io::Result<()>;

    /// Rename, replacing an existing destination where the platform allows.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Make the entry writable by its owner.
    fn clear_read_only(&self, path: &Path) -> io::Result<()>;

    /// Set the modification time (Unix seconds), leaving the access time alone.
    fn set_modified(&self, path: &Path, secs: i64) -> io::Result<()>;
}

/// Location of the running executable in canonical form.
pub fn executable_path() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let exe: PathBuf = dunce::canonicalize(&exe).unwrap_or(exe);
    Some(to_canonical(exe.as_os_str()))
}
