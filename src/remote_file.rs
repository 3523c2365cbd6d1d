use std::io;
use std::pin::Pin;
use futures::TryStreamExt;
use reqwest::Client;
use reqwest::header::{HeaderMap, CONTENT_LENGTH};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::io::StreamReader;
use crate::error::{DownloadError, Result};

type ByteReader = Pin<Box<dyn AsyncRead + Send>>;

/// An opened remote resource: a byte stream plus the size the server announced.
pub struct RemoteFile {
    pub total_length: Option<u64>,
    reader: ByteReader,
}

impl RemoteFile {
    pub fn new(total_length: Option<u64>, reader: impl AsyncRead + Send + 'static) -> RemoteFile {
        RemoteFile {
            total_length,
            reader: Box::pin(reader),
        }
    }

    /// Fills `buffer` unless the stream ends first. Returns 0 only at end of stream.
    pub async fn read_chunk(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buffer.len() {
            let len = self.reader.read(&mut buffer[filled..]).await?;
            if len == 0 {
                break;
            }
            filled += len;
        }
        Ok(filled)
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn open(&self, url: &str) -> Result<RemoteFile>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<HttpFetcher> {
        let client = Client::builder()
            .build()
            .map_err(|e| DownloadError::Request(e.to_string()))?;
        Ok(HttpFetcher::with_client(client))
    }

    pub fn with_client(client: Client) -> HttpFetcher {
        HttpFetcher {
            client
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn open(&self, url: &str) -> Result<RemoteFile> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let total_length = content_length(response.headers());
        let body = response
            .bytes_stream()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e));
        Ok(RemoteFile::new(total_length, StreamReader::new(body)))
    }
}

pub fn content_length(head_map: &HeaderMap) -> Option<u64> {
    head_map
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
