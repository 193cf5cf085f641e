//! Depth-first directory traversal with early stop.
//!
//! Notes:
//! - Entries come in whatever order the platform enumerates them.
//! - With `recurse`, a directory is visited before its contents and its
//!   contents before its later siblings (pre-order).
//! - A `Break` from the visitor ends the whole walk, every level of it, and
//!   the scan still succeeds.
//! - An enumeration failure at any depth aborts the scan immediately.
//! - Links are followed when describing entries; there is no cycle detection.

use serde::Serialize;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::{debug, trace};

use super::FileSystem;
use crate::attributes::Attributes;
use crate::errors::FsError;
use crate::path_util::with_trailing_separator;
use crate::platform::{Platform, to_canonical, to_native};

/// One entry produced by [`FileSystem::scan_directory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Full path in canonical (forward-slash) form.
    pub full_path: String,
    /// Byte size; 0 for directories.
    pub size: u64,
    pub is_directory: bool,
    /// Best-effort Unix seconds (modified, else created, else accessed, else 0).
    pub modified_time: i64,
}

impl DirectoryEntry {
    fn new(full_path: String, attrs: &Attributes) -> Self {
        Self {
            full_path,
            size: if attrs.is_directory { 0 } else { attrs.size },
            is_directory: attrs.is_directory,
            modified_time: attrs.timestamp(),
        }
    }

    /// Final path component.
    pub fn name(&self) -> &str {
        self.full_path.rsplit('/').next().unwrap_or(&self.full_path)
    }
}

impl<P: Platform> FileSystem<P> {
    /// Visit every entry inside `path`, descending into subdirectories when
    /// `recurse` is set.
    ///
    /// ```no_run
    /// use std::ops::ControlFlow;
    /// let fs = portable_fs::FileSystem::new();
    /// let mut names = Vec::new();
    /// fs.scan_directory("assets", true, |e| {
    ///     names.push(e.full_path.clone());
    ///     ControlFlow::Continue(())
    /// })?;
    /// # Ok::<(), portable_fs::FsError>(())
    /// ```
    pub fn scan_directory<F>(&self, path: &str, recurse: bool, mut visit: F) -> Result<(), FsError>
    where
        F: FnMut(&DirectoryEntry) -> ControlFlow<()>,
    {
        let base = with_trailing_separator(&to_canonical(to_native(path).as_os_str()));
        let flow = self.scan_level(&base, &self.native(path), recurse, &mut visit)?;
        if flow.is_break() {
            debug!(path, "scan stopped by visitor");
        }
        Ok(())
    }

    fn scan_level<F>(
        &self,
        base: &str,
        native: &Path,
        recurse: bool,
        visit: &mut F,
    ) -> Result<ControlFlow<()>, FsError>
    where
        F: FnMut(&DirectoryEntry) -> ControlFlow<()>,
    {
        let entries = self
            .platform
            .read_dir(native)
            .map_err(FsError::with_op("open directory", base))?;

        for item in entries {
            let item = item.map_err(FsError::with_op("read directory", base))?;
            let name = item.file_name();
            let child_native = native.join(&name);
            let full_path = format!("{base}{}", to_canonical(&name));

            let attrs = self.describe(&full_path, &child_native);
            let entry = DirectoryEntry::new(full_path, &attrs);
            trace!(path = %entry.full_path, size = entry.size, dir = entry.is_directory, "scan entry");

            if visit(&entry).is_break() {
                return Ok(ControlFlow::Break(()));
            }

            if recurse && entry.is_directory {
                let child_base = with_trailing_separator(&entry.full_path);
                if self.scan_level(&child_base, &child_native, recurse, visit)?.is_break() {
                    return Ok(ControlFlow::Break(()));
                }
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Attributes of a scanned entry. A dangling link falls back to the
    /// link itself; an entry that vanished mid-scan is reported with zeroes.
    fn describe(&self, full_path: &str, native: &Path) -> Attributes {
        match self.platform.stat(native) {
            Ok(attrs) => attrs,
            Err(e) => match self.platform.lstat(native) {
                Ok(attrs) => Attributes { is_directory: false, ..attrs },
                Err(_) => {
                    debug!(path = full_path, error = %e, "entry vanished during scan");
                    Attributes::default()
                }
            },
        }
    }
}
