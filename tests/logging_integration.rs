use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use portable_fs::FileSystem;
use portable_fs::platform::to_canonical;
use tempfile::tempdir;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// Appends written bytes into a shared in-memory buffer.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn captured<F: FnOnce()>(level: &str, f: F) -> String {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_target(false)
        .with_ansi(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new(level)).with(layer);

    // Scoped so the global subscriber is never set.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, f);

    let bytes = buf.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn each_created_directory_is_logged_at_debug() {
    let dir = tempdir().unwrap();
    let deep = format!("{}/one/two", to_canonical(dir.path().as_os_str()));

    let text = captured("debug", || FileSystem::new().ensure_directory(&deep).unwrap());
    assert_eq!(text.matches("created directory").count(), 2, "{text}");
}

#[test]
fn copy_is_reported_at_info_only() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("s");
    std::fs::write(&src, b"abc").unwrap();
    let dst = dir.path().join("d");
    let (src, dst) = (to_canonical(src.as_os_str()), to_canonical(dst.as_os_str()));

    let text = captured("warn", || FileSystem::new().copy_file(&src, &dst, false).unwrap());
    assert!(text.is_empty(), "{text}");
    let text = captured("info", || FileSystem::new().copy_file(&src, &dst, false).unwrap());
    assert!(text.contains("copied file"), "{text}");
    assert!(text.contains("bytes=3"), "{text}");
}
