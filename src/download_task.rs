use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tracing::{debug, error, info, warn};
use crate::download_configuration::DownloadConfiguration;
use crate::download_progress::{file_name_from_url, DownloadProgress};
use crate::download_sender::DownloadSender;
use crate::download_status::DownloadStatus;
use crate::error::{DownloadError, Result};
use crate::progress_throttle::ProgressThrottle;
use crate::remote_file::Fetcher;

/// Downloads one url and reports on the shared channels.
///
/// Every run sends zero or more progress events, then exactly one status,
/// then exactly one done signal. The progress and status senders are dropped
/// before done is sent, so once the coordinator has counted a task's done
/// signal that task can no longer produce on either channel.
pub struct DownloadTask {
    url: String,
    fetcher: Arc<dyn Fetcher>,
    config: Arc<DownloadConfiguration>,
}

impl DownloadTask {
    pub fn new(url: String, fetcher: Arc<dyn Fetcher>, config: Arc<DownloadConfiguration>) -> DownloadTask {
        DownloadTask {
            url,
            fetcher,
            config,
        }
    }

    pub async fn run(self, sender: DownloadSender) {
        let DownloadSender { progress_sender, status_sender, done_sender } = sender;
        let file_name = file_name_from_url(&self.url);

        let status = match self.download(file_name, &progress_sender).await {
            Ok(downloaded_size) => {
                info!(url = %self.url, downloaded_size, "download complete");
                DownloadStatus::succeeded(&self.url)
            }
            Err(e @ DownloadError::ChannelClosed(_)) => {
                error!(url = %self.url, error = %e, "progress channel closed under a running task");
                DownloadStatus::failed(&self.url, &e)
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "download failed");
                DownloadStatus::failed(&self.url, &e)
            }
        };
        drop(progress_sender);

        if status_sender.send(status).await.is_err() {
            error!(url = %self.url, "status channel closed before the task reported");
        }
        drop(status_sender);

        if done_sender.send(()).is_err() {
            error!(url = %self.url, "done channel closed before the task finished");
        }
    }

    async fn download(&self, file_name: &str, progress_sender: &Sender<DownloadProgress>) -> Result<u64> {
        let mut remote_file = self.fetcher.open(&self.url).await?;
        let total_length = remote_file.total_length;
        debug!(url = %self.url, ?total_length, "stream opened");

        let mut buffer = vec![0u8; self.config.chunk_size];
        let mut downloaded_size = 0u64;
        let mut throttle = ProgressThrottle::new(self.config.progress_interval);
        loop {
            let len = remote_file.read_chunk(&mut buffer).await?;
            if len == 0 {
                break;
            }
            downloaded_size += len as u64;
            if throttle.ready() {
                send_progress(progress_sender, DownloadProgress::new(file_name, downloaded_size, total_length)).await?;
            }
        }

        send_progress(progress_sender, DownloadProgress::new(file_name, downloaded_size, total_length)).await?;
        Ok(downloaded_size)
    }
}

async fn send_progress(sender: &Sender<DownloadProgress>, progress: DownloadProgress) -> Result<()> {
    sender.send(progress).await.map_err(|_| DownloadError::ChannelClosed("progress"))
}
