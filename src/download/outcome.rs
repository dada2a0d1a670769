//! Result of a successful watch.
//!
//! A [`DownloadOutcome`] is produced once per watch and only for a file that
//! existed when its size was read.

use std::time::Duration;

/// Represents a measured download.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadOutcome {
    /// Measured file name.
    file_name: String,
    /// Bandwidth in Mbps, truncated to three decimals.
    bandwidth_mbps: f64,
    /// File size in bytes, read once before any deletion.
    file_size: u64,
    /// Time from the start of the watch to the bandwidth computation.
    elapsed: Duration,
    /// Whether the file was removed after measurement.
    deleted: bool,
}

impl DownloadOutcome {
    /// Create a new [`DownloadOutcome`].
    pub fn new(
        file_name: impl Into<String>,
        bandwidth_mbps: f64,
        file_size: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            bandwidth_mbps,
            file_size,
            elapsed,
            deleted: false,
        }
    }

    /// Record whether the file was deleted.
    pub fn with_deleted(self, deleted: bool) -> Self {
        Self { deleted, ..self }
    }

    /// Get the measured file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the bandwidth in Mbps.
    pub fn bandwidth_mbps(&self) -> f64 {
        self.bandwidth_mbps
    }

    /// Get the file size in bytes.
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Get the elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get whether the file was deleted.
    ///
    /// `false` either when deletion was not requested or when it failed.
    #[must_use]
    pub fn deleted(&self) -> bool {
        self.deleted
    }
}
