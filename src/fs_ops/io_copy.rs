//! Streaming copy into a freshly created file.
//!
//! - Writes to a newly created destination (create_new; never clobbers).
//! - Buffered I/O sized by `Options::copy_buffer_size`.
//! - The destination is flushed and synced before returning so the caller
//!   can rename it into place.
//!
//! Snapshot semantics: the source is read once from start to EOF; bytes
//! appended concurrently are not included.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Copy `src` -> `dst`; returns the number of bytes written.
pub(super) fn copy_streaming(src: &Path, dst: &Path, buf_size: usize) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dst_f = OpenOptions::new().write(true).create_new(true).open(dst)?;

    let mut reader = BufReader::with_capacity(buf_size, src_f);
    let mut writer = BufWriter::with_capacity(buf_size, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(bytes)
}
