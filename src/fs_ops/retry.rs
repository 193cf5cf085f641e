//! Read-only override policy shared by delete, copy and move.

use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::FileSystem;
use crate::platform::Platform;

impl<P: Platform> FileSystem<P> {
    /// Run `op`; if it is denied, clear the read-only flag on `target` and
    /// run it exactly once more. The original error is kept when the flag
    /// cannot be cleared (e.g. `target` does not exist).
    pub(super) fn with_read_only_retry<T>(
        &self,
        shown: &str,
        target: &Path,
        op: impl FnMut() -> io::Result<T>,
    ) -> io::Result<T> {
        self.retry_after_clearing(shown, || vec![target.to_path_buf()], op)
    }

    /// Like [`with_read_only_retry`](Self::with_read_only_retry) for removing
    /// `native`. Removal can be refused by the entry or, on Unix, by its
    /// parent directory, so whichever of the two reports read-only is
    /// cleared. The entry itself is the fallback when neither does.
    pub(super) fn with_removal_retry(
        &self,
        shown: &str,
        native: &Path,
        op: impl FnMut() -> io::Result<()>,
    ) -> io::Result<()> {
        self.retry_after_clearing(shown, || self.removal_blockers(native), op)
    }

    fn removal_blockers(&self, native: &Path) -> Vec<PathBuf> {
        let mut blockers = Vec::with_capacity(2);
        if self.platform.lstat(native).is_ok_and(|a| a.read_only) {
            blockers.push(native.to_path_buf());
        }
        let parent = Self::native_parent(native);
        if !parent.as_os_str().is_empty() && self.platform.stat(parent).is_ok_and(|a| a.read_only) {
            blockers.push(parent.to_path_buf());
        }
        if blockers.is_empty() {
            blockers.push(native.to_path_buf());
        }
        blockers
    }

    fn retry_after_clearing<T>(
        &self,
        shown: &str,
        targets: impl FnOnce() -> Vec<PathBuf>,
        mut op: impl FnMut() -> io::Result<T>,
    ) -> io::Result<T> {
        match op() {
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied && self.options.retry_read_only => {
                let mut cleared = false;
                for target in targets() {
                    match self.platform.clear_read_only(&target) {
                        Ok(()) => {
                            debug!(path = shown, flag_on = %target.display(), "cleared read-only flag");
                            cleared = true;
                        }
                        Err(clear_err) => {
                            debug!(path = shown, flag_on = %target.display(), error = %clear_err, "could not clear read-only flag");
                        }
                    }
                }
                if cleared { op() } else { Err(e) }
            }
            other => other,
        }
    }
}
