use tokio::sync::mpsc::{channel, unbounded_channel};
use crate::download_configuration::DownloadConfiguration;
use crate::download_receiver::DownloadReceiver;
use crate::download_sender::DownloadSender;

/// Creates the progress, status and done channels for one run.
pub fn new(config: &DownloadConfiguration) -> (DownloadSender, DownloadReceiver) {
    let (progress_sender, progress_receiver) = channel(config.progress_capacity);
    let (status_sender, status_receiver) = channel(config.status_capacity);
    let (done_sender, done_receiver) = unbounded_channel();
    let sender = DownloadSender {
        progress_sender,
        status_sender,
        done_sender,
    };
    let receiver = DownloadReceiver {
        progress_receiver,
        status_receiver,
        done_receiver,
    };
    (sender, receiver)
}
