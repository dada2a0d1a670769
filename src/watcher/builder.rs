//! Builder pattern implementation for creating [`DownloadWatcher`] instances.
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::watcher::WatcherBuilder;
//! use std::time::Duration;
//!
//! let watcher = WatcherBuilder::new()
//!     .poll_interval(Duration::from_millis(250))
//!     .delete_grace(Duration::from_millis(500))
//!     .build();
//!
//! assert_eq!(watcher.poll_interval(), Duration::from_millis(250));
//! ```
//!
//! ## Hidden Spinner
//!
//! ```rust
//! use download_kpi::watcher::WatcherBuilder;
//!
//! let watcher = WatcherBuilder::hidden().build();
//! ```

use super::{config::WatcherConfig, watcher::DownloadWatcher};
use crate::progress::ProgressBarOpts;

use std::time::Duration;

/// A builder used to create a [`DownloadWatcher`].
#[derive(Debug, Default)]
pub struct WatcherBuilder {
    config: WatcherConfig,
}

impl WatcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        WatcherBuilder::default()
    }

    /// Convenience function to hide the waiting spinner.
    pub fn hidden() -> Self {
        let mut builder = WatcherBuilder::default();
        builder.config.style_options = ProgressBarOpts::hidden();
        builder
    }

    /// Set the time between two existence checks.
    ///
    /// The early timeout edge moves with it: a watch gives up once less than
    /// one interval remains.
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.config.poll_interval = poll_interval;
        self
    }

    /// Set the pause between detection and deletion.
    pub fn delete_grace(mut self, delete_grace: Duration) -> Self {
        self.config.delete_grace = delete_grace;
        self
    }

    /// Set the waiting spinner options.
    pub fn style_options(mut self, style_options: ProgressBarOpts) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Create the [`DownloadWatcher`] with the specified options.
    pub fn build(self) -> DownloadWatcher {
        DownloadWatcher::new(self.config)
    }
}
