//! Config module.
//! Provides the engine options, the driver-facing configuration, default
//! paths, and XML loading.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel, Options};
pub use xml::{load_config_from_env, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PORTABLE_FS_CONFIG";

/// Defaults shared across submodules.
pub const DIR_MODE_DEFAULT: u32 = 0o777;
pub const COPY_BUFFER_DEFAULT: usize = 1024 * 1024;
