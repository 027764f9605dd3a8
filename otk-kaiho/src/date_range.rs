use chrono::{NaiveDate, TimeDelta};
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Range covering `days` consecutive dates starting at `start`.
    ///
    /// Used for the forecast window: today plus the following days.
    /// `days == 0` yields an empty range.
    pub fn next_days(start: NaiveDate, days: u32) -> DateRange {
        if days == 0 {
            // end before start: iterator is immediately exhausted
            return DateRange(start, start - TimeDelta::try_days(1).unwrap());
        }
        let end = start + TimeDelta::try_days(days as i64 - 1).unwrap();
        DateRange(start, end)
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::try_days(1).unwrap();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
