use std::fmt::Arguments;
use std::io::Write;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, trace, warn};
use crate::download_progress::DownloadProgress;
use crate::download_status::DownloadStatus;

/// Writes rendered lines, giving up on output after the first failure.
/// The reporters keep draining their channels either way so producers never
/// stay blocked on a full channel.
struct ConsoleSink<W: Write> {
    name: &'static str,
    writer: W,
    failed: bool,
}

impl<W: Write> ConsoleSink<W> {
    fn new(name: &'static str, writer: W) -> Self {
        Self {
            name,
            writer,
            failed: false,
        }
    }

    fn write(&mut self, args: Arguments<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = self.writer.write_fmt(args).and_then(|_| self.writer.flush()) {
            warn!(sink = self.name, error = %e, "output failed, discarding further lines");
            self.failed = true;
        }
    }
}

pub struct ProgressReporter<W: Write> {
    sink: ConsoleSink<W>,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            sink: ConsoleSink::new("progress", writer),
        }
    }

    /// Renders every event until the channel is closed and empty.
    /// Returns how many events were received.
    pub async fn run(mut self, mut receiver: Receiver<DownloadProgress>) -> usize {
        let mut received = 0;
        while let Some(progress) = receiver.recv().await {
            trace!(file_name = %progress.file_name, percent = ?progress.completed_percent, "progress");
            self.sink.write(format_args!("\r{}", progress));
            received += 1;
        }
        debug!(received, "progress channel drained");
        received
    }
}

pub struct StatusReporter<W: Write> {
    sink: ConsoleSink<W>,
}

impl<W: Write> StatusReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            sink: ConsoleSink::new("status", writer),
        }
    }

    /// Renders one line per status until the channel is closed and empty.
    pub async fn run(mut self, mut receiver: Receiver<DownloadStatus>) -> Vec<DownloadStatus> {
        let mut statuses = Vec::new();
        while let Some(status) = receiver.recv().await {
            self.sink.write(format_args!("\n{}\n", status));
            statuses.push(status);
        }
        debug!(received = statuses.len(), "status channel drained");
        statuses
    }
}
