//! Trigger, measure, report and optionally assert a download.
//!
//! # Examples
//!
//! ```rust,no_run
//! use download_kpi::kpi::KpiBuilder;
//! use download_kpi::Error;
//!
//! # async fn example() -> Result<(), Error> {
//! let kpi = KpiBuilder::new().directory("/tmp/".into()).build();
//!
//! let click = || async {
//!     // Click the download link here.
//!     Ok::<(), Error>(())
//! };
//! let outcome = kpi.measure_and_assert(click, "SpeedTest_16MB.dat", 5.0).await?;
//! println!("{} Mbps", outcome.bandwidth_mbps());
//! # Ok(())
//! # }
//! ```

use super::config::KpiConfig;
use crate::download::{assert_bandwidth, DownloadOutcome, DownloadRequest};
use crate::error::Result;
use crate::report::bandwidth_message;
use crate::trigger::DownloadTrigger;

use std::fmt;
use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Measures the bandwidth of triggered downloads.
#[derive(Clone)]
pub struct DownloadKpi {
    config: KpiConfig,
}

impl Debug for DownloadKpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadKpi")
            .field("config", &self.config)
            .finish()
    }
}

impl DownloadKpi {
    /// Creates a new DownloadKpi with the given configuration.
    pub(crate) fn new(config: KpiConfig) -> Self {
        Self { config }
    }

    /// Gets the download directory.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Gets the default timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets whether measured files are deleted.
    pub fn delete_after(&self) -> bool {
        self.config.delete_after
    }

    /// Build a request for `file_name` from the configured defaults.
    pub fn request(&self, file_name: &str) -> DownloadRequest {
        DownloadRequest::new(&self.config.directory, file_name)
            .with_timeout(self.config.timeout)
            .with_delete_after(self.config.delete_after)
    }

    /// Trigger a download of `file_name` and report its bandwidth.
    pub async fn measure<T: DownloadTrigger>(
        &self,
        trigger: T,
        file_name: &str,
    ) -> Result<DownloadOutcome> {
        self.measure_request(trigger, &self.request(file_name)).await
    }

    /// Like [`measure`](Self::measure), then fail with
    /// [`Error::Threshold`](crate::Error::Threshold) when the bandwidth is
    /// strictly below `threshold_mbps`.
    pub async fn measure_and_assert<T: DownloadTrigger>(
        &self,
        trigger: T,
        file_name: &str,
        threshold_mbps: f64,
    ) -> Result<DownloadOutcome> {
        self.measure_request_and_assert(trigger, &self.request(file_name), threshold_mbps)
            .await
    }

    /// Trigger a download and report the bandwidth of `request`.
    pub async fn measure_request<T: DownloadTrigger>(
        &self,
        mut trigger: T,
        request: &DownloadRequest,
    ) -> Result<DownloadOutcome> {
        debug!("Triggering download of {}", request.file_name());
        trigger.trigger().await?;

        let outcome = self.config.watcher.watch(request).await?;
        self.report(&outcome);
        Ok(outcome)
    }

    /// Trigger, report, then assert the bandwidth of `request`.
    pub async fn measure_request_and_assert<T: DownloadTrigger>(
        &self,
        trigger: T,
        request: &DownloadRequest,
        threshold_mbps: f64,
    ) -> Result<DownloadOutcome> {
        let outcome = self.measure_request(trigger, request).await?;
        assert_bandwidth(&outcome, threshold_mbps)?;
        Ok(outcome)
    }

    fn report(&self, outcome: &DownloadOutcome) {
        let message = bandwidth_message(outcome.file_name(), outcome.bandwidth_mbps());
        info!("{}", message);

        if let Some(ref callback) = self.config.on_report {
            callback(outcome, &message);
        }
    }
}
