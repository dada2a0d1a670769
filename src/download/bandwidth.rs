//! Bandwidth derivation and threshold checks.
//!
//! Sizes are scaled with binary megabytes (1024 × 1024) while time uses
//! decimal seconds, so a 16 MiB file read in 10 s is 12.8 Mbps. Results are
//! truncated, never rounded, to three decimals.
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::download::{assert_bandwidth, calculate_mbps, DownloadOutcome};
//! use std::time::Duration;
//!
//! let elapsed = Duration::from_millis(10_000);
//! let mbps = calculate_mbps(16 * 1024 * 1024, elapsed);
//! assert_eq!(mbps, 12.8);
//!
//! let outcome = DownloadOutcome::new("SpeedTest_16MB.dat", mbps, 16 * 1024 * 1024, elapsed);
//! assert!(assert_bandwidth(&outcome, 10.0).is_ok());
//! assert!(assert_bandwidth(&outcome, 20.0).is_err());
//! ```

use super::outcome::DownloadOutcome;
use crate::error::{Error, Result};

use std::time::Duration;

const BITS_PER_BYTE: f64 = 8.0;
const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;
const MILLIS_PER_SECOND: f64 = 1000.0;

/// Compute the bandwidth in Mbps of `size_bytes` transferred over `elapsed`.
///
/// Elapsed time has millisecond resolution; anything under one millisecond
/// counts as one so the figure stays finite.
pub fn calculate_mbps(size_bytes: u64, elapsed: Duration) -> f64 {
    let millis = elapsed.as_millis().max(1) as f64;
    let megabits = BITS_PER_BYTE * size_bytes as f64 / BYTES_PER_MEGABYTE;
    truncate_mbps(megabits / (millis / MILLIS_PER_SECOND))
}

/// Truncate a bandwidth figure to three digits after the decimal point.
pub fn truncate_mbps(mbps: f64) -> f64 {
    (mbps * 1000.0).floor() / 1000.0
}

/// Fail with [`Error::Threshold`] when the outcome is strictly under `threshold_mbps`.
///
/// Equality passes.
pub fn assert_bandwidth(outcome: &DownloadOutcome, threshold_mbps: f64) -> Result<()> {
    if outcome.bandwidth_mbps() < threshold_mbps {
        return Err(Error::Threshold {
            file_name: outcome.file_name().to_string(),
            bandwidth_mbps: outcome.bandwidth_mbps(),
            threshold_mbps,
        });
    }
    Ok(())
}
