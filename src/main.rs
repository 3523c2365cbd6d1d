use std::io::Write;
use std::time::Duration;
use anyhow::Result;
use clap::Parser;
use fanout_downloader::download_configuration::DownloadConfiguration;
use fanout_downloader::download_service::DownloadService;
use tracing::debug;

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v; logs go to stderr so stdout only carries results
    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "arguments parsed");

    let config = DownloadConfiguration::new()
        .set_progress_interval(Duration::from_millis(args.interval_ms))
        .set_chunk_size(args.chunk_size)
        .build()?;
    let service = DownloadService::new(config)?;
    let summary = service.run(args.urls, std::io::stdout(), std::io::stdout()).await;
    debug!(succeeded = summary.succeeded(), failed = summary.failed(), "done");

    // per-url failures were already reported; they do not change the exit code
    let mut stdout = std::io::stdout();
    writeln!(stdout, "\n")?;
    stdout.flush()?;
    Ok(())
}
