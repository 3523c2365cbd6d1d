use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::sync::Arc;
use parking_lot::Mutex;
use tokio::io::AsyncRead;
use crate::error::{DownloadError, Result};
use crate::remote_file::{Fetcher, RemoteFile};

/// Serves scripted byte streams; any url it was not given fails to connect.
#[derive(Default)]
pub struct ScriptedFetcher {
    files: Mutex<HashMap<String, RemoteFile>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(self, url: &str, total_length: Option<u64>, reader: impl AsyncRead + Send + 'static) -> Self {
        self.files.lock().insert(url.to_string(), RemoteFile::new(total_length, reader));
        self
    }

    pub fn serve_bytes(self, url: &str, bytes: Vec<u8>) -> Self {
        let total_length = Some(bytes.len() as u64);
        self.serve(url, total_length, Cursor::new(bytes))
    }
}

#[async_trait::async_trait]
impl Fetcher for ScriptedFetcher {
    async fn open(&self, url: &str) -> Result<RemoteFile> {
        self.files
            .lock()
            .remove(url)
            .ok_or_else(|| DownloadError::Request(format!("connection refused: {}", url)))
    }
}

#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A sink whose every write fails.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe"))
    }
}
