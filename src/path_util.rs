//! Pure string helpers over canonical (forward-slash) paths. No I/O.

/// Separator used by every path crossing the library boundary.
pub const SEPARATOR: char = '/';

/// Parent directory of `path`, including the trailing separator.
///
/// A trailing separator on `path` itself is skipped, so `"a/b/"` and `"a/b"`
/// both yield `"a/"`. Returns `""` when there is no separator to cut at.
pub fn parent_directory(path: &str) -> &str {
    let search = match path.strip_suffix(SEPARATOR) {
        Some(trimmed) => trimmed,
        None => path,
    };
    match search.rfind(SEPARATOR) {
        Some(i) => &path[..=i],
        None => "",
    }
}

/// `path` without trailing separators. A bare root (`"/"`, `"C:/"`) keeps
/// its separator so it still names the root.
pub fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    if trimmed.len() == path.len() {
        return path;
    }
    if trimmed.is_empty() || is_drive_prefix(trimmed) {
        &path[..=trimmed.len()]
    } else {
        trimmed
    }
}

fn is_drive_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 2 && b[0].is_ascii_alphabetic() && b[1] == b':'
}

/// Return `path` guaranteed to end in a separator. The empty path (the
/// working directory) stays empty so joined names remain relative.
pub fn with_trailing_separator(path: &str) -> String {
    let mut base = path.to_string();
    if !base.is_empty() && !base.ends_with(SEPARATOR) {
        base.push(SEPARATOR);
    }
    base
}

/// Join a directory and an entry name, tolerating a trailing separator on `dir`.
pub fn join_entry(dir: &str, name: &str) -> String {
    let mut full = with_trailing_separator(dir);
    full.push_str(name);
    full
}
