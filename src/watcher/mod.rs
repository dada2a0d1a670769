//! Watcher module containing the download completion detector.
//!
//! This module provides the [`DownloadWatcher`] struct, its builder and its
//! configuration. A watcher polls a directory for an expected file, times out
//! if it never appears, and measures the file once it does.
//!
//! # Overview
//!
//! - `watcher` - The polling loop and the measurement
//! - `builder` - WatcherBuilder for poll cadence, grace delay and spinner
//! - `config` - Configuration structure and default durations
//!
//! # Examples
//!
//! ```rust,no_run
//! use download_kpi::download::DownloadRequest;
//! use download_kpi::watcher::WatcherBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let watcher = WatcherBuilder::hidden().build();
//! let outcome = watcher
//!     .watch(&DownloadRequest::new("/tmp", "SpeedTest_16MB.dat"))
//!     .await?;
//! println!("{} bytes in {:?}", outcome.file_size(), outcome.elapsed());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod watcher;

pub use builder::WatcherBuilder;
pub use config::{WatcherConfig, DEFAULT_DELETE_GRACE, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
pub use watcher::DownloadWatcher;
