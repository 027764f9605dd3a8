//! Fetch and extract 5-minute observed tide readings from the kaiho
//! realtime gauge page.
//!
//! The page is HTML, but the readings sit in a plain-text block headed
//! by "観測データ：５分毎瞬間値" and a `year date time cm` column row,
//! so extraction is a regex scan rather than a DOM walk.

use crate::error::ExtractError;
use crate::record::{TideRecord, MISSING_SENTINEL};
use regex::Regex;

#[cfg(feature = "api")]
use crate::station::StationConfig;
#[cfg(feature = "api")]
use log::warn;

/// Fetch the raw gauge page for a station.
///
/// Returns `None` on any transport failure (connect, timeout, body
/// decode); the error never propagates past this boundary. The response
/// status is not validated, the page body is returned verbatim. The
/// caller supplies a client already configured with the gauge timeout.
#[cfg(feature = "api")]
pub async fn fetch_gauge_page(client: &reqwest::Client, station: &StationConfig) -> Option<String> {
    let url = station.gauge_page_url();
    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("gauge page request failed: {}", e);
            return None;
        }
    };
    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!("gauge page body could not be decoded: {}", e);
            None
        }
    }
}

/// Pull the 5-minute observed readings out of the raw gauge page text.
///
/// The observed section runs from the "観測データ：５分毎瞬間値" heading
/// (full- or half-width colon and five) past the `year date time cm`
/// header row, and ends at the next markup tag or end of text. Rows are
/// whitespace-separated `year month day hour minute value` tuples; a
/// value of 9999 marks a missing reading and is skipped. Records are
/// emitted in order of appearance.
pub fn extract_observed(content: &str) -> Result<Vec<TideRecord>, ExtractError> {
    let section_re =
        Regex::new(r"(?s)観測データ[：:]\s*[５5]分毎瞬間値.*?year\s+date\s+time\s+cm([^<]*)")
            .expect("section regex is valid");
    let section = match section_re.captures(content) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => return Err(ExtractError::SectionNotFound),
    };

    let row_re = Regex::new(r"(\d{4})\s+(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})\s+(\d{1,2})\s+(-?\d+)")
        .expect("row regex is valid");

    let mut records = Vec::new();
    for caps in row_re.captures_iter(section) {
        let tide: i32 = match caps[6].parse() {
            Ok(v) => v,
            Err(_) => continue,
        };
        if tide == MISSING_SENTINEL {
            continue;
        }
        let datetime = format!(
            "{}-{:0>2}-{:0>2}T{:0>2}:{:0>2}:00",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
        );
        records.push(TideRecord::observed(datetime, tide));
    }
    Ok(records)
}
