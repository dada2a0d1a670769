//! Error handling for the download KPI library.
//!
//! Every failure a measurement can hit is surfaced as a variant of [`Error`].
//! The `Display` output of [`Error::Timeout`] and [`Error::Threshold`] is the
//! exact message text other tooling parses, so it must not be reworded.

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors that can happen while measuring a download.
#[derive(Error, Debug)]
pub enum Error {
    /// The expected file did not appear before the deadline.
    ///
    /// The deadline may be hit up to one poll interval early, see
    /// [`DownloadWatcher::watch`](crate::watcher::DownloadWatcher::watch).
    #[error("Download timeout of {} milliseconds has expired.", .timeout.as_millis())]
    Timeout {
        /// Name of the file that was awaited.
        file_name: String,
        /// Nominal timeout of the request.
        timeout: Duration,
    },

    /// The measured bandwidth is strictly below the required minimum.
    #[error("Download bandwidth of {file_name} is under threshold of {threshold_mbps} Mbps.")]
    Threshold {
        /// Name of the measured file.
        file_name: String,
        /// Measured bandwidth, truncated to three decimals.
        bandwidth_mbps: f64,
        /// Required minimum.
        threshold_mbps: f64,
    },

    /// I/O Error.
    ///
    /// Raised when probing or reading the target file fails for any reason
    /// other than the file not existing yet.
    #[error("I/O error on {path:?}")]
    IOError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The action expected to start the download failed.
    #[error("Download trigger failed: {0}")]
    Trigger(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::IOError {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for operations that can fail with a download KPI error.
pub type Result<T> = std::result::Result<T, Error>;
