use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Response(u16),
    #[error("failed to read response body: {0}")]
    ResponseChunk(#[from] std::io::Error),
    #[error("{0} channel closed while a task was still sending")]
    ChannelClosed(&'static str),
}

pub type Result<T> = core::result::Result<T, DownloadError>;

impl From<reqwest::Error> for DownloadError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => DownloadError::Response(status.as_u16()),
            None => DownloadError::Request(e.to_string()),
        }
    }
}
