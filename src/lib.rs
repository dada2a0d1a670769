//! Download KPI measures the effective bandwidth of a file download started
//! by some external action, such as a click in a browser automation session.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use download_kpi::{Error, KpiBuilder};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let kpi = KpiBuilder::new()
//!     .directory(PathBuf::from("/tmp/"))
//!     .delete_after(true)
//!     .build();
//!
//! let click = || async {
//!     // Click the download link here.
//!     Ok::<(), Error>(())
//! };
//! kpi.measure_and_assert(click, "SpeedTest_16MB.dat", 5.0).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - Requests, outcomes and the bandwidth arithmetic
//! - [`watcher`] - The `DownloadWatcher` polling loop and its builder
//! - [`kpi`] - `DownloadKpi`: trigger, measure, report, assert
//! - [`trigger`] - The seam for the action that starts a download
//! - [`report`] - Message templates and the report callback
//! - [`progress`] - Waiting spinner
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod download;
pub mod error;
pub mod kpi;
pub mod progress;
pub mod report;
pub mod trigger;
pub mod watcher;

pub use download::{assert_bandwidth, calculate_mbps, truncate_mbps};
pub use download::{DownloadOutcome, DownloadRequest};
pub use error::{Error, Result};
pub use kpi::{DownloadKpi, KpiBuilder};
pub use progress::ProgressBarOpts;
pub use report::{bandwidth_message, threshold_message, timeout_message, ReportCallback};
pub use trigger::DownloadTrigger;
pub use watcher::{DownloadWatcher, WatcherBuilder};
