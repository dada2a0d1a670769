//! Builder pattern implementation for creating [`DownloadKpi`] instances.
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::kpi::KpiBuilder;
//! use std::time::Duration;
//!
//! let kpi = KpiBuilder::new()
//!     .directory("/tmp/".into())
//!     .timeout(Duration::from_secs(60))
//!     .delete_after(true)
//!     .on_report(|outcome, message| {
//!         println!("{} ({} bytes)", message, outcome.file_size());
//!     })
//!     .build();
//!
//! assert_eq!(kpi.timeout(), Duration::from_secs(60));
//! ```

use super::{config::KpiConfig, kpi::DownloadKpi};
use crate::download::DownloadOutcome;
use crate::watcher::{DownloadWatcher, WatcherBuilder};

use std::{path::PathBuf, sync::Arc, time::Duration};

/// A builder used to create a [`DownloadKpi`].
#[derive(Default)]
pub struct KpiBuilder {
    config: KpiConfig,
}

impl KpiBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        KpiBuilder::default()
    }

    /// Convenience function to hide the waiting spinner.
    pub fn hidden() -> Self {
        KpiBuilder::default().watcher(WatcherBuilder::hidden().build())
    }

    /// Sets the directory the browser saves downloads into.
    pub fn directory(mut self, directory: PathBuf) -> Self {
        self.config.directory = directory;
        self
    }

    /// Set the timeout of every measurement started from a file name.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set whether measured files are deleted.
    pub fn delete_after(mut self, delete_after: bool) -> Self {
        self.config.delete_after = delete_after;
        self
    }

    /// Set the watcher performing the measurement.
    pub fn watcher(mut self, watcher: DownloadWatcher) -> Self {
        self.config.watcher = watcher;
        self
    }

    /// Set callback receiving every measured outcome and its bandwidth message.
    ///
    /// The callback runs before any threshold assertion, so a failing
    /// measurement is still reported.
    pub fn on_report<F>(mut self, callback: F) -> Self
    where
        F: Fn(&DownloadOutcome, &str) + Send + Sync + 'static,
    {
        self.config.on_report = Some(Arc::new(Box::new(callback)));
        self
    }

    /// Create the [`DownloadKpi`] with the specified options.
    pub fn build(self) -> DownloadKpi {
        DownloadKpi::new(self.config)
    }
}
