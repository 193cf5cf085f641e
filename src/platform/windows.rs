//! Windows implementation of the platform capabilities.
//!
//! Notes:
//! - Times arrive as FILETIME ticks and go through the shared translator.
//! - Read-only is the FILE_ATTRIBUTE_READONLY flag, not an ACL check.
//! - Directory symlinks and junctions must be removed with RemoveDirectory.

use filetime::{FileTime, set_file_mtime};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::os::windows::fs::MetadataExt;
use std::path::{Path, PathBuf};
use windows_sys::Win32::Storage::FileSystem::{FILE_ATTRIBUTE_DIRECTORY, FILE_ATTRIBUTE_READONLY};

use super::Platform;
use crate::attributes::{Attributes, Timestamps, filetime_to_unix_secs};

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPlatform;

/// Convert a canonical path to native separators.
pub fn to_native(path: &str) -> PathBuf {
    PathBuf::from(path.replace('/', "\\"))
}

/// Render a native path or entry name with forward slashes.
pub fn to_canonical(native: &OsStr) -> String {
    native.to_string_lossy().replace('\\', "/")
}

fn translate(meta: &fs::Metadata) -> Attributes {
    let attrs = meta.file_attributes();
    Attributes {
        size: meta.file_size(),
        is_directory: attrs & FILE_ATTRIBUTE_DIRECTORY != 0 && !meta.file_type().is_symlink(),
        is_symlink: meta.file_type().is_symlink(),
        read_only: attrs & FILE_ATTRIBUTE_READONLY != 0,
        times: Timestamps {
            modified: filetime_to_unix_secs(meta.last_write_time()),
            created: filetime_to_unix_secs(meta.creation_time()),
            accessed: filetime_to_unix_secs(meta.last_access_time()),
        },
    }
}

impl Platform for WindowsPlatform {
    fn stat(&self, path: &Path) -> io::Result<Attributes> {
        fs::metadata(path).map(|m| translate(&m))
    }

    fn lstat(&self, path: &Path) -> io::Result<Attributes> {
        fs::symlink_metadata(path).map(|m| translate(&m))
    }

    fn read_dir(&self, path: &Path) -> io::Result<fs::ReadDir> {
        fs::read_dir(path)
    }

    fn create_dir(&self, path: &Path, _mode: u32) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn remove_link(&self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(_) => fs::remove_dir(path),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        // MoveFileExW with MOVEFILE_REPLACE_EXISTING under the hood.
        fs::rename(from, to)
    }

    #[allow(clippy::permissions_set_readonly_false)]
    fn clear_read_only(&self, path: &Path) -> io::Result<()> {
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_readonly(false);
        fs::set_permissions(path, perms)
    }

    fn set_modified(&self, path: &Path, secs: i64) -> io::Result<()> {
        set_file_mtime(path, FileTime::from_unix_time(secs, 0))
    }
}
