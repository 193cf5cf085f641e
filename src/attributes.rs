//! Attribute translation.
//! Normalizes native metadata (split size fields, tick-based timestamps, mode
//! bits / attribute flags) into one semantic model.
//!
//! Notes:
//! - All times are whole seconds since the Unix epoch; sub-second precision is dropped.
//! - A zero timestamp means "unavailable" and triggers the fallback chain.

use serde::Serialize;

/// Seconds between 1601-01-01 (FILETIME epoch) and 1970-01-01.
pub const FILETIME_UNIX_OFFSET_SECS: i64 = 11_644_473_600;

/// FILETIME ticks are 100 ns.
pub const FILETIME_TICKS_PER_SEC: u64 = 10_000_000;

/// Convert a FILETIME tick count to Unix seconds (truncating).
/// Zero ticks is the platform's "no time recorded" and maps to 0.
pub fn filetime_to_unix_secs(ticks: u64) -> i64 {
    if ticks == 0 {
        return 0;
    }
    (ticks / FILETIME_TICKS_PER_SEC) as i64 - FILETIME_UNIX_OFFSET_SECS
}

/// Inverse of [`filetime_to_unix_secs`], used when setting times.
pub fn unix_secs_to_filetime(secs: i64) -> u64 {
    let shifted = secs.saturating_add(FILETIME_UNIX_OFFSET_SECS).max(0) as u64;
    shifted.saturating_mul(FILETIME_TICKS_PER_SEC)
}

/// Combine a high/low 32-bit size pair into a byte count.
pub fn size_from_parts(high: u32, low: u32) -> u64 {
    (u64::from(high) << 32) | u64::from(low)
}

/// Clamp a byte count for callers limited to 32-bit lengths.
pub fn clamp_to_u32(size: u64) -> u32 {
    u32::try_from(size).unwrap_or(u32::MAX)
}

/// The three native timestamps, already in Unix seconds (0 = unavailable).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub modified: i64,
    pub created: i64,
    pub accessed: i64,
}

impl Timestamps {
    /// Modification time, else creation time, else access time, else 0.
    pub fn best(&self) -> i64 {
        [self.modified, self.created, self.accessed]
            .into_iter()
            .find(|&t| t != 0)
            .unwrap_or(0)
    }
}

/// Translated view of one native metadata record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    pub size: u64,
    pub is_directory: bool,
    pub is_symlink: bool,
    pub read_only: bool,
    pub times: Timestamps,
}

impl Attributes {
    /// Best-effort timestamp per the fallback chain.
    pub fn timestamp(&self) -> i64 {
        self.times.best()
    }
}

/// Result of a metadata query. Computed fresh on every call; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub exists: bool,
    pub is_directory: bool,
    /// Byte size; 0 for directories.
    pub size: u64,
    /// Unix seconds; 0 for directories or when unavailable.
    pub modified_time: i64,
    pub read_only: bool,
}

impl FileMetadata {
    pub(crate) fn missing() -> Self {
        Self::default()
    }
}

impl From<&Attributes> for FileMetadata {
    fn from(attrs: &Attributes) -> Self {
        let (size, modified_time) = if attrs.is_directory {
            (0, 0)
        } else {
            (attrs.size, attrs.timestamp())
        };
        Self {
            exists: true,
            is_directory: attrs.is_directory,
            size,
            modified_time,
            read_only: attrs.read_only,
        }
    }
}
