//! Move/rename with read-only override and cross-device fallback.

use std::io;
use tracing::{info, warn};

use super::{FileSystem, util};
use crate::errors::FsError;
use crate::platform::Platform;

impl<P: Platform> FileSystem<P> {
    /// Move `from` to `to`, replacing an existing destination atomically
    /// where the platform allows.
    ///
    /// A read-only destination has its flag cleared and the rename is retried
    /// once. When source and destination are on different devices the move
    /// degrades to copy + delete.
    pub fn move_file(&self, from: &str, to: &str) -> Result<(), FsError> {
        let src = self.native(from);
        let dst = self.native(to);

        match self.with_read_only_retry(to, &dst, || self.platform.rename(&src, &dst)) {
            Ok(()) => {
                info!(from, to, "renamed");
                Ok(())
            }
            Err(e) if util::is_cross_device(&e) => {
                warn!(from, to, "rename crosses devices; falling back to copy + delete");
                self.with_read_only_retry(to, &dst, || self.copy_replace(&src, &dst))
                    .map_err(FsError::with_op("copy to", to))?;
                self.with_read_only_retry(from, &src, || self.platform.remove_file(&src))
                    .map_err(FsError::with_op("remove moved source", from))?;
                info!(from, to, "moved across devices");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.path_exists(from) => {
                Err(FsError::NotFound { path: from.to_string() })
            }
            Err(e) => Err(FsError::from_io("move to", to, e)),
        }
    }
}
