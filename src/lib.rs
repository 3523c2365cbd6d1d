//! # fanout-downloader
//!
//! Downloads a set of urls concurrently and reports on them as they go.
//!
//! Features:
//! - One task per url, fanned in through bounded progress and status channels
//! - Progress throttled per file, with a final report for every download
//! - Failures isolated to the url that caused them
//! - Channels closed exactly once, after the last task signals done

mod download_task;
mod progress_throttle;
mod download_tracker;
mod download_sender;
mod download_receiver;
#[cfg(test)]
mod test_helpers;
pub mod error;
pub mod remote_file;
pub mod download_status;
pub mod download_progress;
pub mod download_configuration;
pub mod download_reporter;
pub mod download_coordinator;
pub mod download_service;
