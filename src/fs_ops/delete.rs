//! Bottom-up subtree removal.
//!
//! Unlike scanning, deletion is best-effort: a child that cannot be removed
//! is counted and skipped, the remaining siblings are still attempted, and the
//! directory itself is still removed at the end (which then fails if anything
//! was left behind). Links are removed, never followed.

use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::FileSystem;
use crate::attributes::Attributes;
use crate::errors::FsError;
use crate::path_util::{join_entry, trim_trailing_separators};
use crate::platform::{Platform, to_canonical};

#[derive(Debug, Clone, Copy)]
enum EntryKind {
    File,
    Dir,
    Link,
}

impl EntryKind {
    fn of(attrs: &Attributes) -> Self {
        // Link check first: a link to a directory is still just a link.
        if attrs.is_symlink {
            EntryKind::Link
        } else if attrs.is_directory {
            EntryKind::Dir
        } else {
            EntryKind::File
        }
    }
}

impl<P: Platform> FileSystem<P> {
    /// Remove `path`, and for a directory everything beneath it.
    ///
    /// Fails with the probe error when `path` cannot be examined, with the
    /// removal error for a single file or link, and with
    /// [`FsError::Incomplete`] when some part of a directory tree survived.
    ///
    /// A trailing separator does not make a link to a directory count as
    /// the directory: `"link/"` removes the link and leaves the target alone.
    pub fn delete_recursive(&self, path: &str) -> Result<(), FsError> {
        let native = self.native(trim_trailing_separators(path));
        let attrs = self
            .platform
            .lstat(&native)
            .map_err(FsError::with_op("stat", path))?;

        match EntryKind::of(&attrs) {
            EntryKind::Dir => {
                let failures = self.delete_tree(path, &native);
                if failures == 0 {
                    debug!(path, "deleted directory tree");
                    Ok(())
                } else {
                    Err(FsError::Incomplete { path: path.to_string(), failures })
                }
            }
            kind => self
                .remove_entry(&native, kind)
                .map_err(FsError::with_op("remove", path)),
        }
    }

    /// Delete the contents of `native` and then the directory itself.
    /// Returns the number of entries that could not be removed.
    fn delete_tree(&self, shown: &str, native: &Path) -> usize {
        let mut failures = 0;

        match self.platform.read_dir(native) {
            Ok(entries) => {
                for item in entries {
                    match item {
                        Ok(item) => {
                            let name = item.file_name();
                            let child_shown = join_entry(shown, &to_canonical(&name));
                            failures += self.delete_child(&child_shown, &native.join(&name));
                        }
                        Err(e) => {
                            warn!(path = shown, error = %e, "directory enumeration failed");
                            failures += 1;
                            break;
                        }
                    }
                }
            }
            Err(e) => {
                warn!(path = shown, error = %e, "cannot open directory for deletion");
                failures += 1;
            }
        }

        if let Err(e) = self.remove_entry(native, EntryKind::Dir) {
            warn!(path = shown, error = %e, "failed to remove directory");
            failures += 1;
        }
        failures
    }

    fn delete_child(&self, shown: &str, native: &Path) -> usize {
        let attrs = match self.platform.lstat(native) {
            Ok(attrs) => attrs,
            // Already gone: nothing left to delete.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!(path = shown, error = %e, "cannot stat entry for deletion");
                return 1;
            }
        };

        match EntryKind::of(&attrs) {
            EntryKind::Dir => self.delete_tree(shown, native),
            kind => match self.remove_entry(native, kind) {
                Ok(()) => 0,
                Err(e) => {
                    warn!(path = shown, error = %e, "failed to remove entry");
                    1
                }
            },
        }
    }

    fn remove_entry(&self, native: &Path, kind: EntryKind) -> io::Result<()> {
        let shown = native.display().to_string();
        match kind {
            // Clearing read-only on a link would change its target instead.
            EntryKind::Link => self.platform.remove_link(native),
            EntryKind::File => self.with_removal_retry(&shown, native, || self.platform.remove_file(native)),
            EntryKind::Dir => self.with_removal_retry(&shown, native, || self.platform.remove_dir(native)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn deletes_single_file() {
        let dir = tempdir().unwrap();
        let f = dir.path().join("f.txt");
        fs::write(&f, b"x").unwrap();
        FileSystem::new().delete_recursive(&to_canonical(f.as_os_str())).unwrap();
        assert!(!f.exists());
    }

    #[test]
    fn missing_path_reports_absence() {
        let dir = tempdir().unwrap();
        let err = FileSystem::new()
            .delete_recursive(&to_canonical(dir.path().join("gone").as_os_str()))
            .unwrap_err();
        assert!(err.is_absent());
    }

    #[cfg(unix)]
    #[test]
    fn link_to_directory_removes_only_the_link() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"keep").unwrap();
        let tree = dir.path().join("tree");
        fs::create_dir(&tree).unwrap();
        std::os::unix::fs::symlink(&target, tree.join("link")).unwrap();

        FileSystem::new().delete_recursive(&to_canonical(tree.as_os_str())).unwrap();
        assert!(!tree.exists());
        assert!(target.join("keep.txt").exists(), "link target must survive");
    }

    #[cfg(unix)]
    #[test]
    fn read_only_files_inside_tree_are_removed() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let tree = dir.path().join("tree");
        fs::create_dir(&tree).unwrap();
        let ro = tree.join("ro.txt");
        fs::write(&ro, b"x").unwrap();
        fs::set_permissions(&ro, fs::Permissions::from_mode(0o444)).unwrap();

        FileSystem::new().delete_recursive(&to_canonical(tree.as_os_str())).unwrap();
        assert!(!tree.exists());
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directory_is_cleared_for_its_children() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let tree = dir.path().join("tree");
        let sub = tree.join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("f"), b"x").unwrap();
        fs::set_permissions(&sub, fs::Permissions::from_mode(0o555)).unwrap();

        let fs_ = FileSystem::new();
        assert!(fs_.is_read_only(&to_canonical(sub.as_os_str())).unwrap());
        fs_.delete_recursive(&to_canonical(tree.as_os_str())).unwrap();
        assert!(!tree.exists());
    }
}
