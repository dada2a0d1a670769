//! Download module containing the data handled by a watch operation.
//!
//! This module provides the request describing which file to wait for, the
//! outcome produced once it has been measured, and the bandwidth arithmetic
//! applied to that outcome.
//!
//! # Overview
//!
//! - [`request`] - What to wait for, where, and for how long
//! - [`outcome`] - Size, elapsed time and bandwidth of a measured file
//! - [`bandwidth`] - Mbps derivation and threshold assertion
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::download::{calculate_mbps, DownloadRequest};
//! use std::time::Duration;
//!
//! let request = DownloadRequest::new("/tmp", "report.pdf")
//!     .with_timeout(Duration::from_secs(30));
//! assert_eq!(request.file_name(), "report.pdf");
//!
//! let mbps = calculate_mbps(1024 * 1024, Duration::from_secs(2));
//! assert_eq!(mbps, 4.0);
//! ```

pub mod bandwidth;
pub mod outcome;
pub mod request;

pub use bandwidth::{assert_bandwidth, calculate_mbps, truncate_mbps};
pub use outcome::DownloadOutcome;
pub use request::DownloadRequest;
