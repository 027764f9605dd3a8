use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Raw gauge value that marks a missing 5-minute reading.
///
/// The kaiho gauge page prints `9999` where the instrument produced no
/// data; such rows are dropped during extraction and never stored.
pub const MISSING_SENTINEL: i32 = 9999;

/// Whether a record came from the live gauge or the forecast service.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Observed,
    Prediction,
}

/// A single tide-height sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TideRecord {
    /// Local timestamp, minute resolution for observed data and hour
    /// resolution for predictions
    pub datetime: String,
    /// Height in centimeters; negative below the station datum
    pub tide: i32,
    #[serde(rename = "type")]
    pub kind: RecordKind,
}

impl TideRecord {
    pub fn observed(datetime: String, tide: i32) -> TideRecord {
        TideRecord {
            datetime,
            tide,
            kind: RecordKind::Observed,
        }
    }

    pub fn prediction(datetime: String, tide: i32) -> TideRecord {
        TideRecord {
            datetime,
            tide,
            kind: RecordKind::Prediction,
        }
    }
}

impl Ord for TideRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime.cmp(&other.datetime)
    }
}

impl Eq for TideRecord {}

impl PartialEq for TideRecord {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime
    }
}

impl PartialOrd for TideRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
