//! Whole-file read/write and modification-time updates.

use std::fs;
use tracing::trace;

use super::FileSystem;
use crate::errors::FsError;
use crate::platform::Platform;

impl<P: Platform> FileSystem<P> {
    /// Entire contents of the file at `path`, byte for byte.
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>, FsError> {
        let data = fs::read(self.native(path)).map_err(FsError::with_op("read", path))?;
        trace!(path, bytes = data.len(), "read file");
        Ok(data)
    }

    /// Create or truncate `path` and write `data` to it.
    pub fn write_file(&self, path: &str, data: &[u8]) -> Result<(), FsError> {
        fs::write(self.native(path), data).map_err(FsError::with_op("write", path))?;
        trace!(path, bytes = data.len(), "wrote file");
        Ok(())
    }

    /// Set the modification time of a file to `secs` (Unix seconds),
    /// keeping its access time. Directories are refused.
    pub fn touch_file(&self, path: &str, secs: i64) -> Result<(), FsError> {
        let native = self.native(path);
        let attrs = self.platform.stat(&native).map_err(FsError::with_op("stat", path))?;
        if attrs.is_directory {
            return Err(FsError::IsADirectory { path: path.to_string() });
        }
        self.platform
            .set_modified(&native, secs)
            .map_err(FsError::with_op("set modification time", path))
    }
}
