#![allow(dead_code)]

use attribute_util::logging::subscriber_with_writer;

use std::fs;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use zip::write::FileOptions;
use zip::ZipWriter;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

// === Log Capture ===

/// Collects every formatted log record written through it.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .map(String::from)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Routes this thread's log records into a [`LogCapture`] until the guard drops.
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let guard = tracing::subscriber::set_default(subscriber_with_writer(
        Level::TRACE,
        capture.clone(),
    ));
    (capture, guard)
}

// === Archive Helpers ===

/// An entry of a test archive. A `None` body makes a directory entry.
pub type ZipEntry<'a> = (&'a str, Option<&'a [u8]>);

/// Builds an in-memory ZIP archive.
pub fn build_zip(entries: &[ZipEntry<'_>]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        match body {
            Some(body) => {
                writer
                    .start_file(*name, FileOptions::default())
                    .expect("Failed to start zip entry");
                writer.write_all(body).expect("Failed to write zip entry");
            }
            None => writer
                .add_directory(*name, FileOptions::default())
                .expect("Failed to add zip directory"),
        }
    }
    writer
        .finish()
        .expect("Failed to finish zip archive")
        .into_inner()
}

/// Writes an archive built by [`build_zip`] to `dir/name`.
pub fn create_zip_file(dir: &Path, name: &str, entries: &[ZipEntry<'_>]) -> PathBuf {
    create_temp_file(dir, name, &build_zip(entries))
}

// === HTTP Helpers ===

/// Serves one request on a local socket, sending `pieces` with `delay`
/// between them, and returns the URL to fetch.
///
/// When `announce` is false no `Content-Length` is sent and the body ends
/// when the connection closes.
pub async fn spawn_slow_server(pieces: Vec<Vec<u8>>, delay: Duration, announce: bool) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("Failed to read request");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let total: usize = pieces.iter().map(Vec::len).sum();
        let head = if announce {
            format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                total
            )
        } else {
            "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n"
                .to_string()
        };
        socket.write_all(head.as_bytes()).await.expect("Failed to write head");

        for piece in pieces {
            socket.write_all(&piece).await.expect("Failed to write body");
            socket.flush().await.expect("Failed to flush body");
            tokio::time::sleep(delay).await;
        }
        let _ = socket.shutdown().await;
    });

    format!("http://{}/slow.bin", addr)
}
