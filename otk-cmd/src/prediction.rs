//! Prediction pipeline driver: fetch 7 consecutive dates, persist once.

use crate::config::PipelineConfig;
use chrono::Local;
use log::info;
use otk_kaiho::date_range::DateRange;
use otk_kaiho::prediction::{extract_forecast, fetch_forecast_page};
use otk_kaiho::record::TideRecord;
use otk_store::prediction::save_forecast;

/// Run the prediction pipeline once.
///
/// Each date in the forecast window is fetched and extracted
/// independently; a failed date is reported and skipped. The store is
/// written once at the end, over the concatenation of the successful
/// dates. If every date failed, nothing is written.
pub async fn run_prediction(config: &PipelineConfig) -> anyhow::Result<()> {
    crate::banner("7-day tide forecast fetch");

    let client = reqwest::Client::builder()
        .timeout(config.station.prediction_timeout)
        .build()?;

    let start = Local::now().date_naive();
    let mut forecast: Vec<TideRecord> = Vec::new();
    let mut fetched_days = 0u32;

    for date in DateRange::next_days(start, config.days_to_fetch) {
        println!("fetching forecast for {}...", date);
        let Some(page) = fetch_forecast_page(&client, &config.station, date).await else {
            println!("   no forecast for {}", date);
            continue;
        };
        match extract_forecast(&page, date) {
            Ok(records) => {
                println!("   {} hourly levels", records.len());
                forecast.extend(records);
                fetched_days += 1;
            }
            Err(e) => println!("   skipping {}: {}", date, e),
        }
    }

    if forecast.is_empty() {
        println!("no forecast data could be fetched; nothing stored");
        return Ok(());
    }
    info!(
        "collected {} forecast records over {} days",
        forecast.len(),
        fetched_days
    );

    let path = save_forecast(
        &config.prediction_dir,
        &config.station.slug,
        &forecast,
        start,
    )?;

    println!("done");
    println!(
        "   {} records over {} days written to {}",
        forecast.len(),
        fetched_days,
        path.display()
    );
    crate::banner_close();
    Ok(())
}
