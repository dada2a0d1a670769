//! Report messages and the reporting sink.
//!
//! The three message templates below are parsed by external tooling, keep
//! their wording and placeholder order intact.
//!
//! ```rust
//! use download_kpi::report::{bandwidth_message, threshold_message, timeout_message};
//! use std::time::Duration;
//!
//! assert_eq!(
//!     bandwidth_message("SpeedTest_16MB.dat", 12.8),
//!     "Download bandwidth of SpeedTest_16MB.dat : 12.8 Mbps."
//! );
//! assert_eq!(
//!     threshold_message("SpeedTest_16MB.dat", 5.0),
//!     "Download bandwidth of SpeedTest_16MB.dat is under threshold of 5 Mbps."
//! );
//! assert_eq!(
//!     timeout_message(Duration::from_secs(60)),
//!     "Download timeout of 60000 milliseconds has expired."
//! );
//! ```

use crate::download::DownloadOutcome;

use std::time::Duration;

/// Callback receiving every measured outcome together with its bandwidth message.
///
/// This is where a test report attachment or a metrics sink plugs in.
pub type ReportCallback = Box<dyn Fn(&DownloadOutcome, &str) + Send + Sync>;

/// `Download bandwidth of <file> : <mbps> Mbps.`
///
/// The figure always carries a decimal part, `4.0` rather than `4`.
pub fn bandwidth_message(file_name: &str, bandwidth_mbps: f64) -> String {
    format!("Download bandwidth of {} : {:?} Mbps.", file_name, bandwidth_mbps)
}

/// `Download bandwidth of <file> is under threshold of <threshold> Mbps.`
pub fn threshold_message(file_name: &str, threshold_mbps: f64) -> String {
    format!(
        "Download bandwidth of {} is under threshold of {} Mbps.",
        file_name, threshold_mbps
    )
}

/// `Download timeout of <ms> milliseconds has expired.`
pub fn timeout_message(timeout: Duration) -> String {
    format!(
        "Download timeout of {} milliseconds has expired.",
        timeout.as_millis()
    )
}
