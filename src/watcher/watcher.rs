//! Core watcher implementation with the polling loop.
//!
//! [`DownloadWatcher::watch`] waits for a file to appear, reads its size once,
//! optionally deletes it after a grace delay, and derives the bandwidth from
//! the time elapsed since the watch started.
//!
//! # Examples
//!
//! ```rust,no_run
//! use download_kpi::download::DownloadRequest;
//! use download_kpi::watcher::WatcherBuilder;
//! use std::time::Duration;
//!
//! # async fn example() -> download_kpi::Result<()> {
//! let watcher = WatcherBuilder::new().build();
//! let request = DownloadRequest::new("/tmp", "SpeedTest_16MB.dat")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_delete_after(true);
//!
//! let outcome = watcher.watch(&request).await?;
//! println!("{} Mbps", outcome.bandwidth_mbps());
//! # Ok(())
//! # }
//! ```

use super::config::WatcherConfig;
use crate::download::{calculate_mbps, DownloadOutcome, DownloadRequest};
use crate::error::{Error, Result};
use crate::progress::ProgressDisplay;

use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

/// State of a watch after one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WatchState {
    /// File absent, deadline not reached.
    Waiting,
    /// File present with the given size in bytes.
    Found(u64),
    /// File absent and less than one poll interval left.
    TimedOut,
}

/// Waits for downloaded files and measures them.
///
/// A watcher can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use download_kpi::watcher::WatcherBuilder;
///
/// let w = WatcherBuilder::new().build();
/// # }
/// ```
#[derive(Clone, Default)]
pub struct DownloadWatcher {
    config: WatcherConfig,
}

impl Debug for DownloadWatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DownloadWatcher")
            .field("config", &self.config)
            .finish()
    }
}

impl DownloadWatcher {
    /// Creates a new DownloadWatcher with the given configuration.
    pub(crate) fn new(config: WatcherConfig) -> Self {
        Self { config }
    }

    /// Gets the time between two existence checks.
    pub fn poll_interval(&self) -> Duration {
        self.config.poll_interval
    }

    /// Gets the pause between detection and deletion.
    pub fn delete_grace(&self) -> Duration {
        self.config.delete_grace
    }

    /// Waits for the requested file and measures it.
    ///
    /// The timeout is an upper bound rather than an exact deadline: once the
    /// file is still absent and less than one poll interval remains, the
    /// watch fails with [`Error::Timeout`] without sleeping again. Elapsed
    /// time runs from the start of the watch, so it covers the whole wait
    /// and, when deletion is requested, the grace delay too.
    ///
    /// A failed deletion does not fail the watch; it is logged and
    /// reported through [`DownloadOutcome::deleted`].
    pub async fn watch(&self, request: &DownloadRequest) -> Result<DownloadOutcome> {
        let path = request.path();
        let display =
            ProgressDisplay::new(self.config.style_options.clone(), request.file_name());
        debug!("Waiting for {:?} (timeout {:?})", path, request.timeout());

        let start = Instant::now();
        let file_size = loop {
            let elapsed = elapsed_millis(start);
            match self.poll(&path, elapsed, request.timeout()).await? {
                WatchState::Found(size) => break size,
                WatchState::TimedOut => {
                    debug!("Gave up on {:?} after {:?}", path, elapsed);
                    display.finish(format!("Timed out waiting for {}", request.file_name()));
                    return Err(Error::Timeout {
                        file_name: request.file_name().to_string(),
                        timeout: request.timeout(),
                    });
                }
                WatchState::Waiting => {
                    debug!("{:?} not there yet after {:?}", path, elapsed);
                    display.poll();
                    sleep(self.config.poll_interval).await;
                }
            }
        };
        debug!("Found {:?} ({} bytes)", path, file_size);

        let deleted = request.delete_after() && self.delete(&path).await;

        let elapsed = elapsed_millis(start);
        let bandwidth_mbps = calculate_mbps(file_size, elapsed);
        display.finish(format!("{} downloaded", request.file_name()));

        Ok(
            DownloadOutcome::new(request.file_name(), bandwidth_mbps, file_size, elapsed)
                .with_deleted(deleted),
        )
    }

    /// Check the target once and decide what the loop does next.
    pub(crate) async fn poll(
        &self,
        path: &Path,
        elapsed: Duration,
        timeout: Duration,
    ) -> Result<WatchState> {
        if let Some(size) = current_size(path).await? {
            return Ok(WatchState::Found(size));
        }

        if elapsed >= timeout || elapsed > timeout.saturating_sub(self.config.poll_interval) {
            return Ok(WatchState::TimedOut);
        }

        Ok(WatchState::Waiting)
    }

    /// Remove the file after the grace delay. Returns whether it is gone.
    async fn delete(&self, path: &Path) -> bool {
        sleep(self.config.delete_grace).await;

        match fs::remove_file(path).await {
            Ok(()) => {
                debug!("Deleted {:?}", path);
                true
            }
            Err(e) => {
                warn!("Failed to delete {:?}: {}", path, e);
                false
            }
        }
    }
}

/// Size of the file at `path`, or `None` if it does not exist yet.
async fn current_size(path: &Path) -> Result<Option<u64>> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(Some(metadata.len())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Time since `start`, truncated to whole milliseconds.
fn elapsed_millis(start: Instant) -> Duration {
    let millis = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(millis)
}
