//! JSON store layer for tide records.
//!
//! Stores are flat JSON arrays of records keyed by timestamp, written
//! pretty-printed for the visualization layer to consume directly. The
//! observed store accumulates across runs (merge by `datetime`, last
//! write wins); the prediction store is replaced wholesale every run.
//!
//! Runs are assumed single-writer: the read-merge-write in
//! [`observed::save_observed`] is not locked against a concurrent
//! invocation.

use anyhow::Context;
use otk_kaiho::record::TideRecord;
use std::fs;
use std::path::Path;

/// Load a store file as a record array.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<TideRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read store file {}", path.display()))?;
    let records = serde_json::from_str(&text)
        .with_context(|| format!("store file {} is not a record array", path.display()))?;
    Ok(records)
}

/// Write a record array as pretty-printed UTF-8 JSON.
///
/// `serde_json` leaves non-ASCII characters unescaped, so any Japanese
/// text in future fields survives literally.
pub fn write_records(path: &Path, records: &[TideRecord]) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .with_context(|| format!("could not write store file {}", path.display()))?;
    Ok(())
}

/// Pure merge/window operations shared by the stores.
pub mod merge {
    use chrono::NaiveDate;
    use otk_kaiho::record::TideRecord;
    use std::collections::BTreeMap;

    /// Merge two batches keyed by `datetime`.
    ///
    /// Later entries win on duplicate timestamps, so `new` overrides
    /// `existing`. Output is sorted ascending; the zero-padded ISO
    /// timestamps make the lexicographic key order chronological.
    pub fn merge_by_datetime(existing: Vec<TideRecord>, new: Vec<TideRecord>) -> Vec<TideRecord> {
        let mut keyed: BTreeMap<String, TideRecord> = BTreeMap::new();
        for record in existing.into_iter().chain(new) {
            keyed.insert(record.datetime.clone(), record);
        }
        keyed.into_values().collect()
    }

    /// Trailing window over a sorted store: records on or after local
    /// midnight of `day`, capped to the chronologically last `limit`.
    ///
    /// The floor is a string comparison against `day + "T00:00:00"`,
    /// which assumes store timestamps and `day` share the station's
    /// zone; callers pass the run date explicitly.
    pub fn recent_window(sorted: &[TideRecord], day: NaiveDate, limit: usize) -> Vec<TideRecord> {
        let floor = format!("{}T00:00:00", day.format("%Y-%m-%d"));
        let qualifying: Vec<&TideRecord> = sorted
            .iter()
            .filter(|r| r.datetime.as_str() >= floor.as_str())
            .collect();
        let skip = qualifying.len().saturating_sub(limit);
        qualifying[skip..].iter().map(|r| (*r).clone()).collect()
    }

    #[cfg(test)]
    mod tests {
        use super::{merge_by_datetime, recent_window};
        use chrono::NaiveDate;
        use otk_kaiho::record::TideRecord;

        fn observed(datetime: &str, tide: i32) -> TideRecord {
            TideRecord::observed(datetime.to_string(), tide)
        }

        #[test]
        fn test_new_overrides_existing_on_same_timestamp() {
            let existing = vec![observed("2025-11-02T08:30:00", 150)];
            let new = vec![observed("2025-11-02T08:30:00", 160)];
            let merged = merge_by_datetime(existing, new);
            assert_eq!(merged.len(), 1);
            assert_eq!(merged[0].tide, 160);
        }

        #[test]
        fn test_merge_sorts_ascending() {
            let existing = vec![observed("2025-11-02T09:00:00", 140)];
            let new = vec![
                observed("2025-11-02T08:30:00", 150),
                observed("2025-11-02T08:35:00", 151),
            ];
            let merged = merge_by_datetime(existing, new);
            let times: Vec<&str> = merged.iter().map(|r| r.datetime.as_str()).collect();
            assert_eq!(
                times,
                vec![
                    "2025-11-02T08:30:00",
                    "2025-11-02T08:35:00",
                    "2025-11-02T09:00:00"
                ]
            );
        }

        #[test]
        fn test_merge_is_idempotent() {
            let batch = vec![
                observed("2025-11-02T08:30:00", 150),
                observed("2025-11-02T08:35:00", 151),
            ];
            let once = merge_by_datetime(Vec::new(), batch.clone());
            let twice = merge_by_datetime(once.clone(), batch);
            assert_eq!(once.len(), twice.len());
            for (a, b) in once.iter().zip(&twice) {
                assert_eq!(a.datetime, b.datetime);
                assert_eq!(a.tide, b.tide);
            }
        }

        #[test]
        fn test_window_drops_yesterday() {
            let day = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
            let sorted = vec![
                observed("2025-11-01T23:55:00", 90),
                observed("2025-11-02T00:00:00", 91),
                observed("2025-11-02T00:05:00", 92),
            ];
            let window = recent_window(&sorted, day, 288);
            assert_eq!(window.len(), 2);
            assert_eq!(window[0].datetime, "2025-11-02T00:00:00");
        }

        #[test]
        fn test_window_caps_at_limit_keeping_latest() {
            let day = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
            // 300 qualifying minute slots, more than the 288 cap
            let sorted: Vec<TideRecord> = (0..300)
                .map(|i| {
                    let datetime = format!("2025-11-02T{:02}:{:02}:00", i / 60, i % 60);
                    observed(&datetime, i)
                })
                .collect();
            let window = recent_window(&sorted, day, 288);
            assert_eq!(window.len(), 288);
            // the first 12 slots fall off the front
            assert_eq!(window[0].datetime, sorted[12].datetime);
            assert_eq!(window[287].datetime, sorted[299].datetime);
        }
    }
}

/// Cumulative per-day store for observed readings.
pub mod observed {
    use super::merge;
    use chrono::NaiveDate;
    use log::info;
    use otk_kaiho::record::TideRecord;
    use std::fs;
    use std::path::Path;

    /// Window size for `latest.json`: 24 hours of 5-minute slots.
    pub const LATEST_WINDOW: usize = 288;

    /// Record counts reported back to the driver after a save.
    #[derive(Debug, Clone, Copy)]
    pub struct StoreSummary {
        /// Records in the per-day store after the merge
        pub total: usize,
        /// Records written to `latest.json`
        pub recent: usize,
    }

    /// Merge a batch of freshly extracted readings into the per-day store.
    ///
    /// The store file is `<slug>_observed_<today>.json` under `dir`
    /// (created with parents if missing). Existing records are loaded
    /// and merged with the batch, new winning on duplicate timestamps,
    /// and the sorted result is written back. `latest.json` is then
    /// recomputed as the today-or-later trailing window and overwritten
    /// unconditionally.
    ///
    /// `today` names both the store file and the window floor; drivers
    /// pass the local run date, tests pass a fixed one.
    pub fn save_observed(
        dir: &Path,
        slug: &str,
        new_records: Vec<TideRecord>,
        today: NaiveDate,
    ) -> anyhow::Result<StoreSummary> {
        fs::create_dir_all(dir)?;

        let day = today.format("%Y-%m-%d").to_string();
        let store_path = dir.join(format!("{}_observed_{}.json", slug, day));

        let existing = if store_path.exists() {
            super::load_records(&store_path)?
        } else {
            Vec::new()
        };

        let merged = merge::merge_by_datetime(existing, new_records);
        super::write_records(&store_path, &merged)?;

        let recent = merge::recent_window(&merged, today, LATEST_WINDOW);
        super::write_records(&dir.join("latest.json"), &recent)?;

        info!(
            "observed store {} now holds {} records ({} in latest window)",
            store_path.display(),
            merged.len(),
            recent.len()
        );
        Ok(StoreSummary {
            total: merged.len(),
            recent: recent.len(),
        })
    }

}

/// Wholesale-replaced store for the 7-day forecast.
pub mod prediction {
    use chrono::NaiveDate;
    use log::info;
    use otk_kaiho::record::TideRecord;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Overwrite the forecast store with a freshly fetched batch.
    ///
    /// Records are written in their natural fetch order, verbatim, to
    /// both `<slug>_prediction_<today>.json` and `latest.json`. There is
    /// no merge: stale forecasts are discarded, not accumulated.
    pub fn save_forecast(
        dir: &Path,
        slug: &str,
        records: &[TideRecord],
        today: NaiveDate,
    ) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(dir)?;

        let day = today.format("%Y-%m-%d").to_string();
        let store_path = dir.join(format!("{}_prediction_{}.json", slug, day));
        super::write_records(&store_path, records)?;
        super::write_records(&dir.join("latest.json"), records)?;

        info!(
            "forecast store {} rewritten with {} records",
            store_path.display(),
            records.len()
        );
        Ok(store_path)
    }

    #[cfg(test)]
    mod tests {
        use super::save_forecast;
        use chrono::NaiveDate;
        use otk_kaiho::record::TideRecord;

        fn prediction(datetime: &str, tide: i32) -> TideRecord {
            TideRecord::prediction(datetime.to_string(), tide)
        }

        #[test]
        fn test_writes_both_files_verbatim() {
            let dir = tempfile::tempdir().unwrap();
            let day = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
            // deliberately not sorted; the fetch order is preserved
            let records = vec![
                prediction("2025-11-03T00:00:00", 120),
                prediction("2025-11-02T00:00:00", 110),
            ];
            let path = save_forecast(dir.path(), "oita", &records, day).unwrap();
            assert_eq!(path, dir.path().join("oita_prediction_2025-11-02.json"));

            let stored = crate::load_records(&path).unwrap();
            assert_eq!(stored.len(), 2);
            assert_eq!(stored[0].datetime, "2025-11-03T00:00:00");

            let latest = crate::load_records(&dir.path().join("latest.json")).unwrap();
            assert_eq!(latest.len(), 2);
        }

        #[test]
        fn test_second_run_replaces_wholesale() {
            let dir = tempfile::tempdir().unwrap();
            let day = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
            save_forecast(
                dir.path(),
                "oita",
                &[
                    prediction("2025-11-02T00:00:00", 110),
                    prediction("2025-11-02T01:00:00", 112),
                ],
                day,
            )
            .unwrap();
            save_forecast(
                dir.path(),
                "oita",
                &[prediction("2025-11-02T00:00:00", 999)],
                day,
            )
            .unwrap();

            let stored =
                crate::load_records(&dir.path().join("oita_prediction_2025-11-02.json")).unwrap();
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].tide, 999);
        }
    }
}
