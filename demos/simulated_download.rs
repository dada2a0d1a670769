//! Example measuring a simulated browser download
//!
//! Run with `RUST_LOG=debug cargo run --example simulated_download`.

use color_eyre::Result;
use download_kpi::{Error, KpiBuilder};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const FILE_NAME: &str = "SpeedTest_8MB.dat";
const CHUNK: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let directory = std::env::temp_dir().join("download_kpi_demo");
    std::fs::create_dir_all(&directory)?;

    let kpi = KpiBuilder::new()
        .directory(directory.clone())
        .timeout(Duration::from_secs(30))
        .delete_after(true)
        .on_report(|outcome, message| {
            println!("{} ({} bytes in {:?})", message, outcome.file_size(), outcome.elapsed());
        })
        .build();

    // Stands in for clicking a download link: the "browser" writes a
    // temporary file, then renames it once complete.
    let target = directory.join(FILE_NAME);
    let click = move || {
        let target = target.clone();
        tokio::spawn(async move {
            if let Err(e) = write_like_a_browser(target, 8).await {
                eprintln!("Simulated download failed: {}", e);
            }
        });
        async { Ok::<(), Error>(()) }
    };

    let outcome = kpi.measure_and_assert(click, FILE_NAME, 1.0).await?;
    println!("\nMeasured {} Mbps.", outcome.bandwidth_mbps());

    Ok(())
}

async fn write_like_a_browser(target: PathBuf, chunks: usize) -> std::io::Result<()> {
    let partial = target.with_extension("dat.crdownload");
    let mut content = Vec::with_capacity(chunks * CHUNK);
    for _ in 0..chunks {
        tokio::time::sleep(Duration::from_millis(400)).await;
        content.extend(std::iter::repeat(0u8).take(CHUNK));
        tokio::fs::write(&partial, &content).await?;
    }
    tokio::fs::rename(&partial, &target).await
}
