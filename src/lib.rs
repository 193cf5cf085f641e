//! Core library for `portable_fs`.
//!
//! A uniform set of path, directory and file operations over the native
//! filesystem: existence and attribute queries, recursive directory creation,
//! traversal and deletion, copy/move, and whole-file read/write.
//!
//! All paths cross this boundary as `&str` in forward-slash form and come back
//! the same way; conversion to native separators happens inside
//! [`platform`]. Operations run against a [`FileSystem`] context, which also
//! carries the working directory relative paths resolve against.
//!
//! ```no_run
//! use portable_fs::FileSystem;
//! use std::ops::ControlFlow;
//!
//! let fs = FileSystem::new();
//! fs.ensure_directory("build/cache/")?;
//! fs.copy_file("asset.png", "build/cache/asset.png", false)?;
//! fs.scan_directory("build", true, |entry| {
//!     println!("{} {}", entry.full_path, entry.size);
//!     ControlFlow::Continue(())
//! })?;
//! fs.delete_recursive("build")?;
//! # Ok::<(), portable_fs::FsError>(())
//! ```

pub mod attributes;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod path_util;
pub mod platform;
pub mod shutdown;

pub use attributes::FileMetadata;
pub use config::{Config, LogLevel, Options};
pub use errors::{ErrorClass, FsError};
pub use fs_ops::{DirectoryEntry, FileSystem};
pub use path_util::parent_directory;
pub use platform::{Native, Platform, executable_path};
