use std::time::Duration;
use crate::error::{DownloadError, Result};

pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_millis(200);
pub const DEFAULT_CHANNEL_CAPACITY: usize = 5;

#[derive(Debug, Clone)]
pub struct DownloadConfiguration {
    pub chunk_size: usize,
    pub progress_interval: Duration,
    pub progress_capacity: usize,
    pub status_capacity: usize,
}

pub struct DownloadConfigurationBuilder {
    config: DownloadConfiguration,
}

impl DownloadConfigurationBuilder {
    fn new(config: DownloadConfiguration) -> Self {
        Self {
            config
        }
    }

    pub fn set_chunk_size(mut self, chunk_size: usize) -> DownloadConfigurationBuilder {
        self.config.chunk_size = chunk_size;
        self
    }

    pub fn set_progress_interval(mut self, interval: Duration) -> DownloadConfigurationBuilder {
        self.config.progress_interval = interval;
        self
    }

    pub fn set_progress_capacity(mut self, capacity: usize) -> DownloadConfigurationBuilder {
        self.config.progress_capacity = capacity;
        self
    }

    pub fn set_status_capacity(mut self, capacity: usize) -> DownloadConfigurationBuilder {
        self.config.status_capacity = capacity;
        self
    }

    pub fn build(self) -> Result<DownloadConfiguration> {
        self.validate()
    }

    fn validate(self) -> Result<DownloadConfiguration> {
        if self.config.chunk_size == 0 {
            return Err(DownloadError::InvalidConfiguration("chunk size must be positive"));
        }

        if self.config.progress_interval.is_zero() {
            return Err(DownloadError::InvalidConfiguration("progress interval must be positive"));
        }

        // tokio's bounded mpsc panics on a zero capacity
        if self.config.progress_capacity == 0 || self.config.status_capacity == 0 {
            return Err(DownloadError::InvalidConfiguration("channel capacity must be positive"));
        }

        Ok(self.config)
    }
}

impl DownloadConfiguration {
    pub fn new() -> DownloadConfigurationBuilder {
        DownloadConfigurationBuilder::new(DownloadConfiguration::default())
    }
}

impl Default for DownloadConfiguration {
    fn default() -> Self {
        DownloadConfiguration {
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            progress_capacity: DEFAULT_CHANNEL_CAPACITY,
            status_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
