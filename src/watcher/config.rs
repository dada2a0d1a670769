//! Configuration structures and defaults for the watcher.
//!
//! ```rust
//! use download_kpi::watcher::config::{WatcherConfig, DEFAULT_DELETE_GRACE, DEFAULT_POLL_INTERVAL};
//!
//! let config = WatcherConfig::default();
//! assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
//! assert_eq!(config.delete_grace, DEFAULT_DELETE_GRACE);
//! ```

use crate::progress::ProgressBarOpts;

use std::time::Duration;

/// Cadence between two existence checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Pause before deleting a detected file, so the browser can finish
/// renaming it from its temporary extension.
pub const DEFAULT_DELETE_GRACE: Duration = Duration::from_millis(2000);

/// Timeout used when a request does not set one (6 minutes).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(360_000);

/// Configuration structure for the watcher
#[derive(Clone, Debug)]
pub struct WatcherConfig {
    /// Time between two existence checks.
    pub poll_interval: Duration,
    /// Pause between detection and deletion.
    pub delete_grace: Duration,
    /// Waiting spinner options.
    pub style_options: ProgressBarOpts,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            delete_grace: DEFAULT_DELETE_GRACE,
            style_options: ProgressBarOpts::default(),
        }
    }
}
