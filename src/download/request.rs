//! Description of a single watch operation.
//!
//! A [`DownloadRequest`] names the file a triggered download is expected to
//! produce and bounds how long to wait for it.
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::download::DownloadRequest;
//! use std::time::Duration;
//!
//! let request = DownloadRequest::new("/tmp", "SpeedTest_16MB.dat")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_delete_after(true);
//!
//! assert_eq!(request.path(), std::path::Path::new("/tmp/SpeedTest_16MB.dat"));
//! assert!(request.delete_after());
//! ```

use crate::watcher::config::DEFAULT_TIMEOUT;

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Represents a file expected to appear after a download is triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Directory the browser saves downloads into.
    directory: PathBuf,
    /// Full file name, extension included.
    file_name: String,
    /// Upper bound on the wait.
    timeout: Duration,
    /// Remove the file once it has been measured.
    delete_after: bool,
}

impl DownloadRequest {
    /// Creates a request with the default timeout that keeps the file.
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_name: file_name.into(),
            timeout: DEFAULT_TIMEOUT,
            delete_after: false,
        }
    }

    /// Set the timeout of the watch.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Set whether the file is deleted after it has been measured.
    pub fn with_delete_after(self, delete_after: bool) -> Self {
        Self {
            delete_after,
            ..self
        }
    }

    /// Get the download directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Get the expected file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Get the timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the deletion flag.
    pub fn delete_after(&self) -> bool {
        self.delete_after
    }

    /// Absolute target path, `directory/file_name`.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}
