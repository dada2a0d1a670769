//! Tests for the watcher module functionality.
//!
//! Timing tests run on a paused tokio clock so the one second poll interval
//! and the two second grace delay are exercised without real waits.

use download_kpi::{calculate_mbps, DownloadRequest, Error, WatcherBuilder};
use std::time::Duration;
use tokio::time::Instant;

mod common;
use common::helpers::*;

#[test]
fn test_watcher_defaults() {
    let watcher = WatcherBuilder::new().build();

    assert_eq!(watcher.poll_interval(), Duration::from_millis(1000));
    assert_eq!(watcher.delete_grace(), Duration::from_millis(2000));
}

#[test]
fn test_watcher_builder_configuration() {
    let watcher = create_fast_watcher(Duration::from_millis(100), Duration::from_millis(50));

    assert_eq!(watcher.poll_interval(), Duration::from_millis(100));
    assert_eq!(watcher.delete_grace(), Duration::from_millis(50));
}

#[test]
fn test_watcher_clone() {
    let watcher = create_fast_watcher(Duration::from_millis(100), Duration::from_millis(50));
    let cloned = watcher.clone();

    assert_eq!(watcher.poll_interval(), cloned.poll_interval());
    assert_eq!(watcher.delete_grace(), cloned.delete_grace());
}

#[tokio::test(start_paused = true)]
async fn test_existing_file_is_kept() {
    let temp_dir = create_temp_dir();
    let path = create_temp_file(temp_dir.path(), TEST_FILE_NAME, &create_test_content(MIB));

    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME);
    let outcome = create_test_watcher().watch(&request).await.unwrap();

    assert_eq!(outcome.file_name(), TEST_FILE_NAME);
    assert_eq!(outcome.file_size(), MIB as u64);
    assert_eq!(outcome.elapsed(), Duration::ZERO);
    assert!(outcome.bandwidth_mbps().is_finite());
    assert!(!outcome.deleted());
    assert_file_exists(&path);
    assert_file_size(&path, MIB as u64);
}

#[tokio::test(start_paused = true)]
async fn test_delete_after_waits_grace_then_removes() {
    let temp_dir = create_temp_dir();
    let path = create_temp_file(temp_dir.path(), TEST_FILE_NAME, &create_test_content(MIB));

    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME).with_delete_after(true);
    let outcome = create_test_watcher().watch(&request).await.unwrap();

    // Size is read before deletion; elapsed includes the grace delay.
    assert_eq!(outcome.file_size(), MIB as u64);
    assert_eq!(outcome.elapsed(), Duration::from_millis(2000));
    assert_eq!(outcome.bandwidth_mbps(), 4.0);
    assert!(outcome.deleted());
    assert_file_missing(&path);
}

#[tokio::test(start_paused = true)]
async fn test_file_appearing_later_is_detected() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join(TEST_FILE_NAME);
    let appears_at = Duration::from_millis(2500);
    let writer = spawn_delayed_write(path.clone(), appears_at, create_test_content(2 * MIB));

    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME)
        .with_timeout(Duration::from_millis(10_000));
    let outcome = create_test_watcher().watch(&request).await.unwrap();
    writer.await.unwrap();

    assert!(outcome.elapsed() >= appears_at);
    // Detected on the first poll after it appeared.
    assert_eq!(outcome.elapsed(), Duration::from_millis(3000));
    assert_eq!(outcome.file_size(), 2 * MIB as u64);
    assert_eq!(outcome.bandwidth_mbps(), calculate_mbps(2 * MIB as u64, outcome.elapsed()));
    assert_eq!(outcome.bandwidth_mbps(), 5.333);
}

#[tokio::test(start_paused = true)]
async fn test_missing_file_times_out() {
    let temp_dir = create_temp_dir();
    let timeout = Duration::from_millis(5000);
    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME).with_timeout(timeout);

    let start = Instant::now();
    let err = create_test_watcher().watch(&request).await.unwrap_err();
    let waited = start.elapsed();

    assert!(waited >= Duration::from_millis(4000), "gave up too early: {:?}", waited);
    assert!(waited <= timeout, "waited past the timeout: {:?}", waited);
    match err {
        Error::Timeout {
            file_name,
            timeout: reported,
        } => {
            assert_eq!(file_name, TEST_FILE_NAME);
            assert_eq!(reported, timeout);
        }
        other => panic!("Expected Timeout error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_timeout_message() {
    let temp_dir = create_temp_dir();
    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME)
        .with_timeout(Duration::from_millis(3000));

    let err = create_test_watcher().watch(&request).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Download timeout of 3000 milliseconds has expired."
    );
}

#[tokio::test(start_paused = true)]
async fn test_file_arriving_after_early_exit_is_missed() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join(TEST_FILE_NAME);
    // Inside the last poll interval: the watch has already given up.
    let _writer = spawn_delayed_write(path, Duration::from_millis(4500), vec![1, 2, 3]);

    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME)
        .with_timeout(Duration::from_millis(4500));
    let err = create_test_watcher().watch(&request).await.unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_independent_watches_do_not_interfere() {
    let temp_dir = create_temp_dir();
    create_temp_file(temp_dir.path(), "first.bin", &create_test_content(1024));
    let second = create_temp_file(temp_dir.path(), "second.bin", &create_test_content(4096));
    let watcher = create_test_watcher();

    let first_outcome = watcher
        .watch(&DownloadRequest::new(temp_dir.path(), "first.bin").with_delete_after(true))
        .await
        .unwrap();
    let second_outcome = watcher
        .watch(&DownloadRequest::new(temp_dir.path(), "second.bin"))
        .await
        .unwrap();

    assert_eq!(first_outcome.file_name(), "first.bin");
    assert_eq!(first_outcome.file_size(), 1024);
    assert!(first_outcome.deleted());
    assert_eq!(second_outcome.file_name(), "second.bin");
    assert_eq!(second_outcome.file_size(), 4096);
    assert_eq!(second_outcome.elapsed(), Duration::ZERO);
    assert!(!second_outcome.deleted());
    assert_file_size(&second, 4096);
}

#[tokio::test(start_paused = true)]
async fn test_file_removed_during_grace_is_not_fatal() {
    let temp_dir = create_temp_dir();
    let path = create_temp_file(temp_dir.path(), TEST_FILE_NAME, &create_test_content(MIB));
    let remover = {
        let path = path.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(1000)).await;
            std::fs::remove_file(&path).expect("Failed to remove file");
        })
    };

    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME).with_delete_after(true);
    let outcome = create_test_watcher().watch(&request).await.unwrap();
    remover.await.unwrap();

    assert_eq!(outcome.file_size(), MIB as u64);
    assert_eq!(outcome.bandwidth_mbps(), 4.0);
    assert!(!outcome.deleted());
    assert_file_missing(&path);
}

#[tokio::test(start_paused = true)]
async fn test_custom_poll_interval() {
    let temp_dir = create_temp_dir();
    let path = temp_dir.path().join(TEST_FILE_NAME);
    let _writer = spawn_delayed_write(path, Duration::from_millis(600), create_test_content(MIB));

    let watcher = create_fast_watcher(Duration::from_millis(250), Duration::from_millis(100));
    let request = DownloadRequest::new(temp_dir.path(), TEST_FILE_NAME)
        .with_timeout(Duration::from_millis(2000))
        .with_delete_after(true);
    let outcome = watcher.watch(&request).await.unwrap();

    // Found at 750 ms, deleted after a 100 ms grace.
    assert_eq!(outcome.elapsed(), Duration::from_millis(850));
    assert!(outcome.deleted());
}

#[tokio::test(start_paused = true)]
async fn test_missing_directory_keeps_waiting() {
    let temp_dir = create_temp_dir();
    let request = DownloadRequest::new(temp_dir.path().join("not-yet-created"), TEST_FILE_NAME)
        .with_timeout(Duration::from_millis(2000));

    let err = create_test_watcher().watch(&request).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_path_is_an_io_error() {
    let temp_dir = create_temp_dir();
    create_temp_file(temp_dir.path(), "plain.txt", b"not a directory");

    let request = DownloadRequest::new(temp_dir.path().join("plain.txt"), TEST_FILE_NAME)
        .with_timeout(Duration::from_millis(2000));
    let err = create_test_watcher().watch(&request).await.unwrap_err();

    assert!(matches!(err, Error::IOError { .. }), "unexpected error: {:?}", err);
}
