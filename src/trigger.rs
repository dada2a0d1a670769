//! The action that starts a download.
//!
//! Clicking a link in a browser session, calling an API, or spawning a
//! process are all triggers. The watch only starts once the trigger has
//! returned, so the measured time includes the whole negotiation.
//!
//! Any `FnMut() -> Future<Output = Result<()>>` closure is a trigger:
//!
//! ```rust
//! use download_kpi::trigger::DownloadTrigger;
//!
//! # async fn example() -> download_kpi::Result<()> {
//! let mut clicked = false;
//! let mut trigger = || {
//!     clicked = true;
//!     async { Ok::<(), download_kpi::Error>(()) }
//! };
//! trigger.trigger().await?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;

use std::future::Future;

/// Starts the download that a watch will then measure.
pub trait DownloadTrigger {
    /// Perform the action. An error aborts the measurement before polling.
    fn trigger(&mut self) -> impl Future<Output = Result<()>> + Send;
}

impl<F, Fut> DownloadTrigger for F
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = Result<()>> + Send,
{
    fn trigger(&mut self) -> impl Future<Output = Result<()>> + Send {
        self()
    }
}
