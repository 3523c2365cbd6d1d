use tokio::sync::mpsc::{Receiver, UnboundedReceiver};
use crate::download_progress::DownloadProgress;
use crate::download_status::DownloadStatus;

pub struct DownloadReceiver {
    pub progress_receiver: Receiver<DownloadProgress>,
    pub status_receiver: Receiver<DownloadStatus>,
    pub done_receiver: UnboundedReceiver<()>,
}
