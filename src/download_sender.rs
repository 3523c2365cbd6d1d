use tokio::sync::mpsc::{Sender, UnboundedSender};
use crate::download_progress::DownloadProgress;
use crate::download_status::DownloadStatus;

/// Producer side of the three shared channels. Each task owns one clone.
#[derive(Clone)]
pub struct DownloadSender {
    pub progress_sender: Sender<DownloadProgress>,
    pub status_sender: Sender<DownloadStatus>,
    pub done_sender: UnboundedSender<()>,
}
