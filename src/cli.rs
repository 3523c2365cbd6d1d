use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "fanout", version, about = "Download urls concurrently with live progress")]
pub struct Args {
    /// Urls to download
    pub urls: Vec<String>,

    /// Minimum milliseconds between progress updates for one file
    #[arg(long = "interval", value_name = "MS", default_value_t = 200)]
    pub interval_ms: u64,

    /// Bytes read per chunk
    #[arg(long, value_name = "BYTES", default_value_t = 8 * 1024)]
    pub chunk_size: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
