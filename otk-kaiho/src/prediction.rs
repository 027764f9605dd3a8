//! Fetch and extract hourly tide forecasts from the kaiho prediction CGI.
//!
//! The CGI renders one day per request. The hourly levels sit in a
//! layout table whose `bgcolor` attribute is the only stable selector
//! the page offers.

use crate::error::ExtractError;
use crate::record::TideRecord;
use chrono::NaiveDate;
use scraper::{Html, Selector};

#[cfg(feature = "api")]
use crate::station::StationConfig;
#[cfg(feature = "api")]
use log::warn;

/// Hours covered by one forecast page.
pub const HOURS_PER_DAY: usize = 24;

/// Fetch the forecast page for one calendar date.
///
/// Issues a single GET with the station's `area`/`back` parameters plus
/// the target date. HTTP error statuses and transport failures are
/// logged with the offending date and surface as `None`; the caller
/// skips the date and continues. The body is decoded per the response
/// charset header (the CGI declares its own encoding).
#[cfg(feature = "api")]
pub async fn fetch_forecast_page(
    client: &reqwest::Client,
    station: &StationConfig,
    date: NaiveDate,
) -> Option<String> {
    let response = match client
        .get(&station.prediction_url)
        .query(&[
            ("area", station.area_code.clone()),
            ("back", station.back.clone()),
            ("year", date.format("%Y").to_string()),
            ("month", date.format("%m").to_string()),
            ("day", date.format("%d").to_string()),
        ])
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            warn!("forecast request for {} failed: {}", date, e);
            return None;
        }
    };
    let response = match response.error_for_status() {
        Ok(r) => r,
        Err(e) => {
            warn!("forecast request for {} rejected: {}", date, e);
            return None;
        }
    };
    match response.text().await {
        Ok(body) => Some(body),
        Err(e) => {
            warn!("forecast body for {} could not be decoded: {}", date, e);
            None
        }
    }
}

/// Extract the 24 hourly levels for `date` from a forecast page.
///
/// The levels live in the table with `bgcolor="#e3ffe3"`, laid out as
/// four rows: hour labels 00-11, levels 00-11, hour labels 12-23,
/// levels 12-23. The first cell of every row is a row label and is
/// skipped. Levels may carry internal spaces, which are stripped before
/// parsing.
pub fn extract_forecast(html: &str, date: NaiveDate) -> Result<Vec<TideRecord>, ExtractError> {
    let table_sel =
        Selector::parse(r##"table[bgcolor="#e3ffe3"]"##).expect("table selector is valid");
    let row_sel = Selector::parse("tr").expect("row selector is valid");
    let cell_sel = Selector::parse("td").expect("cell selector is valid");

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or(ExtractError::TableNotFound)?;

    let rows: Vec<_> = table.select(&row_sel).collect();
    if rows.len() < 4 {
        return Err(ExtractError::MalformedTable);
    }

    let mut hours: Vec<String> = Vec::with_capacity(HOURS_PER_DAY);
    let mut levels: Vec<String> = Vec::with_capacity(HOURS_PER_DAY);
    for (i, row) in rows.iter().take(4).enumerate() {
        let cells = row
            .select(&cell_sel)
            .skip(1)
            .map(|td| td.text().collect::<String>().trim().to_string());
        if i % 2 == 0 {
            hours.extend(cells);
        } else {
            levels.extend(cells);
        }
    }
    if hours.len() != HOURS_PER_DAY || levels.len() != HOURS_PER_DAY {
        return Err(ExtractError::MalformedTable);
    }

    let day = date.format("%Y-%m-%d").to_string();
    let mut records = Vec::with_capacity(HOURS_PER_DAY);
    for (hour, level) in hours.iter().zip(&levels) {
        let level: i32 = level
            .replace(' ', "")
            .parse()
            .map_err(|_| ExtractError::MalformedTable)?;
        records.push(TideRecord::prediction(
            format!("{}T{:0>2}:00:00", day, hour),
            level,
        ));
    }
    Ok(records)
}
