//! File copy with optional parent creation and read-only override.
//!
//! The data is staged in a hidden temp file next to the destination and then
//! renamed over it, so an interrupted copy never leaves a truncated
//! destination behind.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use super::{FileSystem, io_copy, metadata, util};
use crate::errors::FsError;
use crate::path_util::parent_directory;
use crate::platform::Platform;

impl<P: Platform> FileSystem<P> {
    /// Copy the file at `from` to `to`, replacing an existing destination.
    ///
    /// With `create_missing_folders` the destination's ancestor chain is
    /// created first. A destination that refuses the write because it is
    /// read-only has the flag cleared and the copy is retried once.
    pub fn copy_file(&self, from: &str, to: &str, create_missing_folders: bool) -> Result<(), FsError> {
        if create_missing_folders {
            self.ensure_directory(parent_directory(to))?;
        }

        let src = self.native(from);
        let dst = self.native(to);
        let src_attrs = self
            .platform
            .stat(&src)
            .map_err(FsError::with_op("stat copy source", from))?;
        if src_attrs.is_directory {
            return Err(FsError::IsADirectory { path: from.to_string() });
        }

        let bytes = self
            .with_read_only_retry(to, &dst, || self.copy_replace(&src, &dst))
            .map_err(FsError::with_op("copy to", to))?;

        if self.options.preserve_metadata {
            let src_meta = fs::metadata(&src).map_err(FsError::with_op("stat copy source", from))?;
            metadata::preserve_metadata(&dst, &src_meta);
        }

        info!(from, to, bytes, "copied file");
        Ok(())
    }

    /// Stage `src` into a temp sibling of `dst`, then rename it into place.
    pub(super) fn copy_replace(&self, src: &Path, dst: &Path) -> io::Result<u64> {
        let tmp = util::unique_temp_path(Self::native_parent(dst));
        let bytes = match io_copy::copy_streaming(src, &tmp, self.options.copy_buffer_size) {
            Ok(n) => n,
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                return Err(e);
            }
        };

        if let Err(e) = self.platform.rename(&tmp, dst) {
            debug!(tmp = %tmp.display(), error = %e, "rename into place failed; removing temp");
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(bytes)
    }
}
