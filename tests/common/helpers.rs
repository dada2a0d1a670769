use download_kpi::progress::ProgressBarOpts;
use download_kpi::{DownloadKpi, DownloadWatcher, Error, KpiBuilder, WatcherBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;

// Common test constants
pub const MIB: usize = 1024 * 1024;
pub const TEST_FILE_NAME: &str = "SpeedTest_1MB.dat";
pub const BROWSER_TEMP_SUFFIX: &str = ".crdownload";

/// Installs a tracing subscriber honoring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that no file exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(!path.exists(), "File should not exist at path: {:?}", path);
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected_size: u64) {
    let metadata = fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(
        metadata.len(),
        expected_size,
        "File size mismatch at path: {:?}",
        path
    );
}

// === Simulated Downloads ===

/// Writes `content` to `path` once `delay` has passed on the tokio clock
pub fn spawn_delayed_write(path: PathBuf, delay: Duration, content: Vec<u8>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        fs::write(&path, content).expect("Failed to write delayed file");
    })
}

/// Simulates a browser download: a temporary file grows chunk by chunk and is
/// renamed to its final name once complete
pub fn spawn_browser_download(
    path: PathBuf,
    chunks: usize,
    chunk_size: usize,
    chunk_delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut temp = path.clone().into_os_string();
        temp.push(BROWSER_TEMP_SUFFIX);
        let temp = PathBuf::from(temp);

        let mut written = Vec::with_capacity(chunks * chunk_size);
        for _ in 0..chunks {
            tokio::time::sleep(chunk_delay).await;
            written.extend(create_test_content(chunk_size));
            fs::write(&temp, &written).expect("Failed to write partial download");
        }
        fs::rename(&temp, &path).expect("Failed to finalize download");
    })
}

/// Trigger that does nothing
pub async fn noop_trigger() -> Result<(), Error> {
    Ok(())
}

// === Builder Helpers ===

/// Creates a watcher without a visible spinner
pub fn create_test_watcher() -> DownloadWatcher {
    WatcherBuilder::hidden().build()
}

/// Creates a watcher with custom poll cadence and grace delay
pub fn create_fast_watcher(poll_interval: Duration, delete_grace: Duration) -> DownloadWatcher {
    WatcherBuilder::new()
        .style_options(ProgressBarOpts::hidden())
        .poll_interval(poll_interval)
        .delete_grace(delete_grace)
        .build()
}

/// Creates a KPI runner bound to `dir` with a hidden spinner
pub fn create_test_kpi_builder(dir: &Path) -> KpiBuilder {
    KpiBuilder::hidden().directory(dir.to_path_buf())
}

/// Creates a KPI runner bound to `dir` with a timeout and deletion flag
pub fn create_test_kpi(dir: &Path, timeout: Duration, delete_after: bool) -> DownloadKpi {
    create_test_kpi_builder(dir)
        .timeout(timeout)
        .delete_after(delete_after)
        .build()
}
