//! Filesystem operations.
//!
//! [`FileSystem`] is the execution context every operation runs in: it owns
//! the platform capabilities, the engine options and the working directory
//! that relative paths resolve against. Nothing here is process-global, so
//! two contexts never observe each other's working-directory changes.
//!
//! Operations are synchronous and blocking. Each one acquires and releases
//! its own native handles before returning.

mod copy;
mod data;
mod delete;
mod ensure;
mod file_move;
mod io_copy;
mod metadata;
mod query;
mod retry;
mod scan;
mod util;

pub use scan::DirectoryEntry;

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Options;
use crate::errors::FsError;
use crate::platform::{Native, Platform, to_canonical, to_native};

/// Uniform path, directory and file operations over one platform backend.
#[derive(Debug, Clone)]
pub struct FileSystem<P: Platform = Native> {
    platform: P,
    options: Options,
    cwd: Option<PathBuf>,
}

impl FileSystem<Native> {
    /// Native backend with default options, resolving relative paths against
    /// the process working directory.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(options: Options) -> Self {
        Self::with_platform(Native::default(), options)
    }
}

impl Default for FileSystem<Native> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Platform> FileSystem<P> {
    pub fn with_platform(platform: P, options: Options) -> Self {
        Self {
            platform,
            options,
            cwd: None,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Working directory of this context, if one was set with [`change_cwd`].
    ///
    /// [`change_cwd`]: FileSystem::change_cwd
    pub fn cwd(&self) -> Option<String> {
        self.cwd.as_ref().map(|p| to_canonical(p.as_os_str()))
    }

    /// Make `path` the directory relative paths resolve against.
    ///
    /// Only this context is affected; the process working directory is
    /// never touched.
    pub fn change_cwd(&mut self, path: &str) -> Result<(), FsError> {
        let native = self.native(path);
        let attrs = self
            .platform
            .stat(&native)
            .map_err(FsError::with_op("change directory", path))?;
        if !attrs.is_directory {
            return Err(FsError::NotADirectory { path: path.to_string() });
        }
        let absolute = dunce::canonicalize(&native).map_err(FsError::with_op("resolve", path))?;
        debug!(cwd = %absolute.display(), "changed working directory");
        self.cwd = Some(absolute);
        Ok(())
    }

    /// Native form of a canonical path, resolved against the context's
    /// working directory when relative. The empty path is the working
    /// directory itself.
    pub(crate) fn native(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            return self.cwd.clone().unwrap_or_else(|| PathBuf::from("."));
        }
        let native = to_native(path);
        match &self.cwd {
            Some(cwd) if native.is_relative() => cwd.join(native),
            _ => native,
        }
    }

    pub(crate) fn native_parent(path: &Path) -> &Path {
        path.parent().unwrap_or_else(|| Path::new(""))
    }
}
