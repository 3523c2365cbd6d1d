use std::io::Write;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info};
use crate::download_configuration::DownloadConfiguration;
use crate::download_coordinator::{ChannelCloser, CoordinatorReport, DownloadCoordinator};
use crate::download_receiver::DownloadReceiver;
use crate::download_reporter::{ProgressReporter, StatusReporter};
use crate::download_status::DownloadStatus;
use crate::download_task::DownloadTask;
use crate::download_tracker;
use crate::error::Result;
use crate::remote_file::{Fetcher, HttpFetcher};

enum UnitOutcome {
    Task,
    Progress(usize),
    Status(Vec<DownloadStatus>),
    Coordinator(CoordinatorReport),
}

#[derive(Debug, Default)]
pub struct DownloadSummary {
    pub statuses: Vec<DownloadStatus>,
    pub progress_events: usize,
    pub coordinator: Option<CoordinatorReport>,
    pub panicked_units: usize,
}

impl DownloadSummary {
    pub fn succeeded(&self) -> usize {
        self.statuses.iter().filter(|status| status.success).count()
    }

    pub fn failed(&self) -> usize {
        self.statuses.len() - self.succeeded()
    }
}

/// Runs one download task per url alongside the two reporters and the
/// coordinator, and returns once every one of them has finished.
pub struct DownloadService {
    config: Arc<DownloadConfiguration>,
    fetcher: Arc<dyn Fetcher>,
}

impl DownloadService {
    pub fn new(config: DownloadConfiguration) -> Result<DownloadService> {
        Ok(DownloadService::with_fetcher(config, Arc::new(HttpFetcher::new()?)))
    }

    pub fn with_fetcher(config: DownloadConfiguration, fetcher: Arc<dyn Fetcher>) -> DownloadService {
        DownloadService {
            config: Arc::new(config),
            fetcher,
        }
    }

    pub async fn run<P, S>(&self, urls: Vec<String>, progress_output: P, status_output: S) -> DownloadSummary
    where
        P: Write + Send + 'static,
        S: Write + Send + 'static,
    {
        let task_count = urls.len();
        let (sender, receiver) = download_tracker::new(&self.config);
        let DownloadReceiver { progress_receiver, status_receiver, done_receiver } = receiver;
        let mut units = JoinSet::new();

        units.spawn(async move {
            UnitOutcome::Progress(ProgressReporter::new(progress_output).run(progress_receiver).await)
        });
        units.spawn(async move {
            UnitOutcome::Status(StatusReporter::new(status_output).run(status_receiver).await)
        });

        for url in urls {
            debug!(url = %url, "spawning download task");
            let task = DownloadTask::new(url, self.fetcher.clone(), self.config.clone());
            let sender = sender.clone();
            units.spawn(async move {
                task.run(sender).await;
                UnitOutcome::Task
            });
        }

        // the coordinator gets the root sender only after every task holds its clone
        let coordinator = DownloadCoordinator::new(task_count, ChannelCloser::new(sender), done_receiver);
        units.spawn(async move {
            UnitOutcome::Coordinator(coordinator.run().await)
        });

        let mut summary = DownloadSummary::default();
        while let Some(result) = units.join_next().await {
            match result {
                Ok(UnitOutcome::Task) => {}
                Ok(UnitOutcome::Progress(received)) => summary.progress_events = received,
                Ok(UnitOutcome::Status(statuses)) => summary.statuses = statuses,
                Ok(UnitOutcome::Coordinator(report)) => summary.coordinator = Some(report),
                Err(e) => {
                    error!(error = %e, "download unit aborted");
                    summary.panicked_units += 1;
                }
            }
        }

        info!(
            total = task_count,
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "download run finished"
        );
        summary
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use std::sync::Arc;
    use crate::download_configuration::DownloadConfiguration;
    use crate::download_coordinator::ChannelClosures;
    use crate::download_service::DownloadService;
    use crate::test_helpers::{ScriptedFetcher, SharedBuffer};

    #[tokio::test]
    async fn test_download_service_isolates_failures() {
        let fetcher = ScriptedFetcher::new().serve_bytes("https://host/a.bin", vec![1u8; 200]);
        let service = DownloadService::with_fetcher(DownloadConfiguration::default(), Arc::new(fetcher));
        let progress = SharedBuffer::default();
        let status = SharedBuffer::default();

        let urls = vec!["https://host/a.bin".to_string(), "https://unreachable/b.bin".to_string()];
        let summary = service.run(urls, progress.clone(), status.clone()).await;

        assert_eq!(summary.statuses.len(), 2);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        let failed = summary.statuses.iter().find(|s| !s.success).unwrap();
        assert_eq!(failed.url, "https://unreachable/b.bin");
        assert!(!failed.error_message.as_ref().unwrap().is_empty());

        assert!(progress.contents().contains("a.bin = 100.000000"));
        assert!(!progress.contents().contains("b.bin"));
        assert!(status.contents().contains("https://host/a.bin - ✅"));
        assert!(status.contents().contains("https://unreachable/b.bin - ❎ request failed: connection refused"));

        let report = summary.coordinator.unwrap();
        assert_eq!(report.done_received, 2);
        assert_eq!(report.closures, ChannelClosures { progress: 1, status: 1, done: 1 });
        assert_eq!(summary.panicked_units, 0);
    }

    #[tokio::test]
    async fn test_download_service_without_urls() {
        let service = DownloadService::with_fetcher(DownloadConfiguration::default(), Arc::new(ScriptedFetcher::new()));
        let summary = service.run(Vec::new(), SharedBuffer::default(), SharedBuffer::default()).await;

        assert!(summary.statuses.is_empty());
        assert_eq!(summary.progress_events, 0);
        assert_eq!(summary.coordinator.unwrap().done_received, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_download_service_many_tasks_through_small_channels() {
        let urls: Vec<String> = (0..64).map(|i| format!("https://host/file{}.bin", i)).collect();
        let mut fetcher = ScriptedFetcher::new();
        for (i, url) in urls.iter().enumerate() {
            if i % 4 != 0 {
                fetcher = fetcher.serve_bytes(url, vec![0u8; 20_000 + i]);
            }
        }
        let config = DownloadConfiguration::new()
            .set_chunk_size(1024)
            .set_progress_capacity(1)
            .set_status_capacity(1)
            .build()
            .unwrap();
        let service = DownloadService::with_fetcher(config, Arc::new(fetcher));

        let summary = service.run(urls.clone(), SharedBuffer::default(), SharedBuffer::default()).await;

        assert_eq!(summary.statuses.len(), urls.len());
        let seen: HashSet<&str> = summary.statuses.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(seen.len(), urls.len());
        assert_eq!(summary.failed(), 16);
        assert!(summary.progress_events >= 48);
        let report = summary.coordinator.unwrap();
        assert_eq!(report.done_received, 64);
        assert_eq!(report.closures, ChannelClosures { progress: 1, status: 1, done: 1 });
    }
}
