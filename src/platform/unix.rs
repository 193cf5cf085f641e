//! Unix implementation of the platform capabilities.

use filetime::{FileTime, set_file_mtime};
use std::ffi::OsStr;
use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::fs::{DirBuilderExt, MetadataExt, PermissionsExt};
use std::path::{Path, PathBuf};

use super::Platform;
use crate::attributes::{Attributes, Timestamps};

/// Owner write permission (S_IWUSR).
const OWNER_WRITE: u32 = 0o200;

#[derive(Debug, Clone, Copy, Default)]
pub struct UnixPlatform;

/// Canonical paths already use the native separator.
pub fn to_native(path: &str) -> PathBuf {
    PathBuf::from(path)
}

/// Render a native path or entry name for callers.
/// Non-UTF-8 bytes are replaced (lossy); see DESIGN.md.
pub fn to_canonical(native: &OsStr) -> String {
    native.to_string_lossy().into_owned()
}

fn translate(meta: &fs::Metadata) -> Attributes {
    Attributes {
        size: meta.size(),
        is_directory: meta.is_dir(),
        is_symlink: meta.file_type().is_symlink(),
        read_only: meta.mode() & OWNER_WRITE == 0,
        times: Timestamps {
            modified: meta.mtime(),
            // st_ctime is the inode change time; it is the closest Unix has.
            created: meta.ctime(),
            accessed: meta.atime(),
        },
    }
}

impl Platform for UnixPlatform {
    fn stat(&self, path: &Path) -> io::Result<Attributes> {
        fs::metadata(path).map(|m| translate(&m))
    }

    fn lstat(&self, path: &Path) -> io::Result<Attributes> {
        fs::symlink_metadata(path).map(|m| translate(&m))
    }

    fn read_dir(&self, path: &Path) -> io::Result<fs::ReadDir> {
        fs::read_dir(path)
    }

    fn create_dir(&self, path: &Path, mode: u32) -> io::Result<()> {
        DirBuilder::new().mode(mode).create(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn remove_link(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn clear_read_only(&self, path: &Path) -> io::Result<()> {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(perms.mode() | OWNER_WRITE);
        fs::set_permissions(path, perms)
    }

    fn set_modified(&self, path: &Path, secs: i64) -> io::Result<()> {
        set_file_mtime(path, FileTime::from_unix_time(secs, 0))
    }
}
