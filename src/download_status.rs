use std::fmt::{Display, Formatter};
use crate::error::DownloadError;

pub const SUCCESS_MARKER: &str = "✅";
pub const FAILURE_MARKER: &str = "❎";

/// Terminal outcome of one download, sent exactly once per url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadStatus {
    pub url: String,
    pub success: bool,
    pub error_message: Option<String>,
}

impl DownloadStatus {
    pub fn succeeded(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            success: true,
            error_message: None,
        }
    }

    pub fn failed(url: impl Into<String>, error: &DownloadError) -> Self {
        Self {
            url: url.into(),
            success: false,
            error_message: Some(error.to_string()),
        }
    }
}

impl Display for DownloadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.error_message {
            Some(message) if !self.success => write!(f, "{} - {} {}", self.url, FAILURE_MARKER, message),
            _ if !self.success => write!(f, "{} - {}", self.url, FAILURE_MARKER),
            _ => write!(f, "{} - {}", self.url, SUCCESS_MARKER),
        }
    }
}
