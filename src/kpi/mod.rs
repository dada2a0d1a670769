//! KPI module tying a trigger, a watcher and a report sink together.
//!
//! [`DownloadKpi`] runs the whole measurement: it invokes the trigger, waits
//! for the file through its [`DownloadWatcher`](crate::watcher::DownloadWatcher),
//! logs and reports the bandwidth message, and for the assertive variants
//! compares the bandwidth against a threshold.
//!
//! - `kpi` - DownloadKpi and its measurement operations
//! - `builder` - KpiBuilder for directory, timeout, deletion and report sink
//! - `config` - Configuration structure and defaults
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::kpi::KpiBuilder;
//!
//! let kpi = KpiBuilder::hidden().directory("/tmp/".into()).build();
//! let request = kpi.request("SpeedTest_16MB.dat");
//! assert_eq!(request.path(), std::path::Path::new("/tmp/SpeedTest_16MB.dat"));
//! ```

pub mod builder;
pub mod config;
pub mod kpi;

pub use builder::KpiBuilder;
pub use config::KpiConfig;
pub use kpi::DownloadKpi;
