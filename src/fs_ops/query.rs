//! Existence and metadata queries.
//!
//! Each query performs exactly one metadata probe. The boolean queries never
//! fail; `is_read_only` and `file_length` surface probe failures that are not
//! plain absence.

use tracing::trace;

use super::FileSystem;
use crate::attributes::{Attributes, FileMetadata, clamp_to_u32};
use crate::errors::FsError;
use crate::platform::Platform;

impl<P: Platform> FileSystem<P> {
    fn probe(&self, path: &str) -> Result<Attributes, FsError> {
        self.platform
            .stat(&self.native(path))
            .map_err(FsError::with_op("stat", path))
    }

    /// True iff a file or directory is present at `path`.
    pub fn path_exists(&self, path: &str) -> bool {
        self.probe(path).is_ok()
    }

    /// True iff `path` exists and is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.probe(path).map(|a| a.is_directory).unwrap_or(false)
    }

    /// True iff `path` exists and its owner cannot write it.
    ///
    /// Absence (including a non-directory path segment) is `Ok(false)`; any
    /// other probe failure is returned as an error.
    pub fn is_read_only(&self, path: &str) -> Result<bool, FsError> {
        match self.probe(path) {
            Ok(attrs) => Ok(attrs.read_only),
            Err(e) if e.is_absent() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Byte length of the file at `path`.
    ///
    /// Unlike the boolean queries this fails when the entry cannot be probed,
    /// absence included, and when it is a directory.
    pub fn file_length(&self, path: &str) -> Result<u64, FsError> {
        let attrs = self.probe(path)?;
        if attrs.is_directory {
            return Err(FsError::IsADirectory { path: path.to_string() });
        }
        trace!(path, size = attrs.size, "file length");
        Ok(attrs.size)
    }

    /// [`file_length`](FileSystem::file_length) clamped to `u32::MAX` for
    /// callers limited to 32-bit lengths.
    pub fn file_length_u32(&self, path: &str) -> Result<u32, FsError> {
        self.file_length(path).map(clamp_to_u32)
    }

    /// Size, directory flag and best-effort timestamp from a single probe.
    /// `None` when the probe fails outright.
    pub fn file_info(&self, path: &str) -> Option<FileMetadata> {
        match self.probe(path) {
            Ok(attrs) => Some(FileMetadata::from(&attrs)),
            Err(e) => {
                trace!(path, error = %e, "file info unavailable");
                None
            }
        }
    }

    /// Like [`file_info`](FileSystem::file_info) but never fails; a missing
    /// entry reports `exists == false` and zeroes.
    pub fn metadata(&self, path: &str) -> FileMetadata {
        self.file_info(path).unwrap_or_else(FileMetadata::missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::to_canonical;
    use std::fs;
    use tempfile::tempdir;

    fn canon(p: &std::path::Path) -> String {
        to_canonical(p.as_os_str())
    }

    #[test]
    fn queries_on_missing_path_are_silent() {
        let dir = tempdir().unwrap();
        let missing = canon(&dir.path().join("nope"));
        let fs_ = FileSystem::new();
        assert!(!fs_.path_exists(&missing));
        assert!(!fs_.is_directory(&missing));
        assert!(!fs_.is_read_only(&missing).unwrap());
        assert!(fs_.file_info(&missing).is_none());
        assert!(!fs_.metadata(&missing).exists);
    }

    #[test]
    fn file_length_raises_on_missing_path() {
        let dir = tempdir().unwrap();
        let missing = canon(&dir.path().join("nope"));
        let err = FileSystem::new().file_length(&missing).unwrap_err();
        assert!(matches!(err, FsError::NotFound { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn file_length_and_info_for_a_file() {
        let dir = tempdir().unwrap();
        let f = dir.path().join("data.bin");
        fs::write(&f, vec![7u8; 1234]).unwrap();
        let path = canon(&f);
        let fs_ = FileSystem::new();

        assert_eq!(fs_.file_length(&path).unwrap(), 1234);
        assert_eq!(fs_.file_length_u32(&path).unwrap(), 1234);
        let info = fs_.file_info(&path).unwrap();
        assert!(info.exists && !info.is_directory);
        assert_eq!(info.size, 1234);
        assert!(info.modified_time > 0);
    }

    #[test]
    fn directory_info_zeroes_size_and_time() {
        let dir = tempdir().unwrap();
        let path = canon(dir.path());
        let fs_ = FileSystem::new();
        assert!(fs_.is_directory(&path));
        assert!(fs_.is_directory(&format!("{path}/")));
        let info = fs_.file_info(&path).unwrap();
        assert!(info.is_directory);
        assert_eq!((info.size, info.modified_time), (0, 0));
        assert!(matches!(fs_.file_length(&path), Err(FsError::IsADirectory { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn read_only_detection_and_segment_through_file() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let f = dir.path().join("locked.txt");
        fs::write(&f, b"x").unwrap();
        fs::set_permissions(&f, fs::Permissions::from_mode(0o444)).unwrap();
        let fs_ = FileSystem::new();
        assert!(fs_.is_read_only(&canon(&f)).unwrap());

        // "locked.txt/child" fails with ENOTDIR, which counts as absence.
        let through = format!("{}/child", canon(&f));
        assert!(!fs_.is_read_only(&through).unwrap());
        assert!(fs_.file_length(&through).is_err());
    }
}
