use tokio::sync::mpsc::{Sender, UnboundedReceiver};
use tracing::{debug, error, info, warn};
use crate::download_progress::DownloadProgress;
use crate::download_sender::DownloadSender;
use crate::download_status::DownloadStatus;

/// How many times each shared channel was closed during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChannelClosures {
    pub progress: usize,
    pub status: usize,
    pub done: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorReport {
    pub task_count: usize,
    pub done_received: usize,
    pub closures: ChannelClosures,
}

/// Holds the last root senders of the progress and status channels.
/// Dropping them is what closes those channels once every task has let go of
/// its own clones.
pub struct ChannelCloser {
    progress_sender: Option<Sender<DownloadProgress>>,
    status_sender: Option<Sender<DownloadStatus>>,
    closures: ChannelClosures,
}

impl ChannelCloser {
    /// Takes over the root sender. The done sender is released here: only the
    /// tasks' clones keep that channel open.
    pub fn new(sender: DownloadSender) -> ChannelCloser {
        let DownloadSender { progress_sender, status_sender, done_sender: _ } = sender;
        ChannelCloser {
            progress_sender: Some(progress_sender),
            status_sender: Some(status_sender),
            closures: ChannelClosures::default(),
        }
    }

    pub fn close_status(&mut self) {
        self.closures.status += 1;
        if self.status_sender.take().is_none() {
            error!("status channel closed twice");
        }
    }

    pub fn close_progress(&mut self) {
        self.closures.progress += 1;
        if self.progress_sender.take().is_none() {
            error!("progress channel closed twice");
        }
    }

    pub fn closures(&self) -> ChannelClosures {
        self.closures
    }
}

/// Counts done signals and closes all shared channels after the last one.
pub struct DownloadCoordinator {
    task_count: usize,
    closer: ChannelCloser,
    done_receiver: UnboundedReceiver<()>,
}

impl DownloadCoordinator {
    pub fn new(task_count: usize, closer: ChannelCloser, done_receiver: UnboundedReceiver<()>) -> DownloadCoordinator {
        DownloadCoordinator {
            task_count,
            closer,
            done_receiver,
        }
    }

    pub async fn run(mut self) -> CoordinatorReport {
        let mut remaining = self.task_count;
        let mut done_received = 0;

        while remaining > 0 {
            match self.done_receiver.recv().await {
                Some(()) => {
                    remaining -= 1;
                    done_received += 1;
                    debug!(remaining, "task finished");
                }
                None => {
                    warn!(remaining, "every task is gone but some never signalled done");
                    break;
                }
            }
        }

        self.closer.close_status();
        self.closer.close_progress();
        self.done_receiver.close();
        let mut closures = self.closer.closures();
        closures.done += 1;

        if self.done_receiver.try_recv().is_ok() {
            error!("done signal arrived after the last task was counted");
        }

        info!(task_count = self.task_count, done_received, "all downloads finished, channels closed");
        CoordinatorReport {
            task_count: self.task_count,
            done_received,
            closures,
        }
    }
}
