//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Unknown fields are rejected so typos surface instead of being ignored.
//!
//! Example:
//! ```xml
//! <config>
//!   <retry_read_only>true</retry_read_only>
//!   <dir_mode>0755</dir_mode>
//!   <copy_buffer_size>65536</copy_buffer_size>
//!   <preserve_metadata>false</preserve_metadata>
//!   <log_level>info</log_level>
//!   <log_file>/var/log/pfs.log</log_file>
//! </config>
//! ```

use anyhow::{Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    retry_read_only: Option<bool>,
    /// Octal, with or without a `0`/`0o` prefix.
    #[serde(default, deserialize_with = "de_octal_trimmed_opt")]
    dir_mode: Option<u32>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    copy_buffer_size: Option<usize>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    preserve_metadata: Option<bool>,
    log_level: Option<String>,
    log_file: Option<String>,
}

fn de_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de_trimmed(deserializer)?.and_then(|s| s.parse::<bool>().ok()))
}

fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de_trimmed(deserializer)?.and_then(|s| s.parse::<usize>().ok()))
}

fn de_octal_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de_trimmed(deserializer)?.and_then(|s| {
        let digits = s.strip_prefix("0o").unwrap_or(&s);
        u32::from_str_radix(digits, 8).ok()
    }))
}

// Map XmlConfig -> Config; absent fields keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(v) = parsed.retry_read_only {
        cfg.options.retry_read_only = v;
    }
    if let Some(mode) = parsed.dir_mode {
        cfg.options.dir_mode = mode & 0o7777;
    }
    if let Some(size) = parsed.copy_buffer_size.filter(|&n| n > 0) {
        cfg.options.copy_buffer_size = size;
    }
    if let Some(v) = parsed.preserve_metadata {
        cfg.options.preserve_metadata = v;
    }
    if let Some(level) = parsed.log_level.as_deref().and_then(|s| s.trim().parse::<LogLevel>().ok()) {
        cfg.log_level = level;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the config named by `$PORTABLE_FS_CONFIG` or found at the default
/// location. Ok(None) when no file exists there.
pub fn load_config_from_env() -> Result<Option<Config>> {
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }
    debug!(path = %path.display(), "loading config");
    load_config_from_xml_path(&path).map(Some)
}
