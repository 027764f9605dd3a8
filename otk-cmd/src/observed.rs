//! Observed-tide pipeline driver: fetch, extract, merge into the store.

use crate::config::PipelineConfig;
use chrono::Local;
use log::info;
use otk_kaiho::observed::{extract_observed, fetch_gauge_page};
use otk_store::observed::save_observed;

/// Run the observed pipeline once.
///
/// Any fetch or extraction failure prints a diagnostic and ends the run
/// without writing a file. Filesystem and serialization errors from the
/// store propagate to the caller.
pub async fn run_observed(config: &PipelineConfig) -> anyhow::Result<()> {
    crate::banner("observed tide fetch");

    let client = reqwest::Client::builder()
        .timeout(config.station.gauge_timeout)
        .build()?;

    let Some(page) = fetch_gauge_page(&client, &config.station).await else {
        println!("no response from the gauge page; nothing stored");
        return Ok(());
    };
    info!("fetched gauge page ({} bytes)", page.len());

    let records = match extract_observed(&page) {
        Ok(records) if !records.is_empty() => records,
        Ok(_) => {
            println!("gauge page held no readings; nothing stored");
            return Ok(());
        }
        Err(e) => {
            println!("could not extract observed readings: {}", e);
            return Ok(());
        }
    };
    println!("extracted {} readings", records.len());

    let today = Local::now().date_naive();
    let summary = save_observed(&config.observed_dir, &config.station.slug, records, today)?;

    println!("done");
    println!("   store total: {} records", summary.total);
    println!("   latest window: {} records", summary.recent);
    crate::banner_close();
    Ok(())
}
