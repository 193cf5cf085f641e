//! Top-down directory creation.

use std::io;
use tracing::debug;

use super::FileSystem;
use crate::errors::FsError;
use crate::path_util::parent_directory;
use crate::platform::Platform;

impl<P: Platform> FileSystem<P> {
    /// Make sure `path` and every ancestor of it exist as directories.
    ///
    /// Ancestors are created first, outermost to innermost. The call is
    /// idempotent: an existing directory is success. It fails with
    /// [`FsError::Occupied`] when any level exists as a non-directory and
    /// stops at the first level that cannot be created. The empty path (the
    /// working directory) needs nothing.
    pub fn ensure_directory(&self, path: &str) -> Result<(), FsError> {
        if path.is_empty() || self.is_directory(path) {
            return Ok(());
        }

        let parent = parent_directory(path);
        if !parent.is_empty() && !self.is_directory(parent) {
            self.ensure_directory(parent)?;
        }

        let native = self.native(path);
        match self.platform.create_dir(&native, self.options.dir_mode) {
            Ok(()) => {
                debug!(path, "created directory");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                // Lost a race with another creator, or something else lives here.
                if self.is_directory(path) {
                    Ok(())
                } else {
                    Err(FsError::Occupied { path: path.to_string() })
                }
            }
            Err(e) => Err(FsError::from_io("create directory", path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::to_canonical;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_full_chain_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let deep = format!("{}/a/b/c/", to_canonical(dir.path().as_os_str()));
        let fs_ = FileSystem::new();

        fs_.ensure_directory(&deep).unwrap();
        assert!(dir.path().join("a").join("b").join("c").is_dir());
        fs_.ensure_directory(&deep).unwrap();
        fs_.ensure_directory(deep.trim_end_matches('/')).unwrap();

        let count = fs::read_dir(dir.path().join("a").join("b")).unwrap().count();
        assert_eq!(count, 1, "second call must not change the tree");
    }

    #[test]
    fn file_in_the_chain_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blocker"), b"x").unwrap();
        let root = to_canonical(dir.path().as_os_str());
        let fs_ = FileSystem::new();

        let err = fs_.ensure_directory(&format!("{root}/blocker")).unwrap_err();
        assert!(matches!(err, FsError::Occupied { .. }));
        let err = fs_.ensure_directory(&format!("{root}/blocker/below")).unwrap_err();
        assert!(matches!(err, FsError::Occupied { .. }));
    }

    #[test]
    fn relative_paths_resolve_against_context_cwd() {
        let dir = tempdir().unwrap();
        let mut fs_ = FileSystem::new();
        fs_.change_cwd(&to_canonical(dir.path().as_os_str())).unwrap();

        fs_.ensure_directory("x/y").unwrap();
        assert!(dir.path().join("x").join("y").is_dir());
        fs_.ensure_directory("").unwrap();
    }
}
