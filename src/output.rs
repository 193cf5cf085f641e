//! User-facing output for the `pfs` driver.
//!
//! Results go to stdout uncolored so they can be piped; status lines carry a
//! colored tag when the stream is a TTY.

use owo_colors::OwoColorize;

use crate::attributes::FileMetadata;
use crate::fs_ops::DirectoryEntry;

fn stdout_is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if stdout_is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Plain line, no prefix. Used for primary results scripts consume.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// One scan entry as `<d|f> <size> <mtime> <path>`.
pub fn format_entry(entry: &DirectoryEntry) -> String {
    let kind = if entry.is_directory { 'd' } else { 'f' };
    format!("{} {:>12} {:>12} {}", kind, entry.size, entry.modified_time, entry.full_path)
}

/// Multi-line human summary of a metadata query.
pub fn format_metadata(path: &str, meta: &FileMetadata) -> String {
    let modified = chrono::DateTime::from_timestamp(meta.modified_time, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| meta.modified_time.to_string());
    format!(
        "path:      {}\nkind:      {}\nsize:      {}\nmodified:  {}\nread-only: {}",
        path,
        if meta.is_directory { "directory" } else { "file" },
        meta.size,
        modified,
        meta.read_only
    )
}
