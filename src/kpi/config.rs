//! Configuration structures and defaults for the KPI runner.
//!
//! ```rust
//! use download_kpi::kpi::config::KpiConfig;
//! use std::time::Duration;
//!
//! let config = KpiConfig::default();
//! assert_eq!(config.timeout, Duration::from_millis(360_000));
//! assert!(!config.delete_after);
//! ```

use crate::report::ReportCallback;
use crate::watcher::{DownloadWatcher, DEFAULT_TIMEOUT};

use std::env::current_dir;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Configuration structure for [`DownloadKpi`](super::DownloadKpi).
#[derive(Clone)]
pub struct KpiConfig {
    /// Directory the browser saves downloads into.
    pub directory: PathBuf,
    /// Timeout applied to requests built from a bare file name.
    pub timeout: Duration,
    /// Delete measured files.
    pub delete_after: bool,
    /// Watcher performing the measurement.
    pub watcher: DownloadWatcher,
    /// Sink for every bandwidth message.
    pub on_report: Option<Arc<ReportCallback>>,
}

impl std::fmt::Debug for KpiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KpiConfig")
            .field("directory", &self.directory)
            .field("timeout", &self.timeout)
            .field("delete_after", &self.delete_after)
            .field("watcher", &self.watcher)
            .field("on_report", &self.on_report.is_some())
            .finish()
    }
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            directory: current_dir().unwrap_or_default(),
            timeout: DEFAULT_TIMEOUT,
            delete_after: false,
            watcher: DownloadWatcher::default(),
            on_report: None,
        }
    }
}
