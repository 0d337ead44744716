//! Day and month boundaries. The reference calendar is UTC.

use std::ops::Range;

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

use crate::scan::ScanRecord;

pub fn day_of(timestamp: DateTime<Utc>) -> NaiveDate {
    timestamp.date_naive()
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Half-open `[start of month, start of next month)` for the month containing `date`.
pub fn month_range(date: NaiveDate) -> Range<DateTime<Utc>> {
    let first = month_start(date);
    let next = first
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    start_of_day(first)..start_of_day(next)
}

/// Records of the month containing `any_date_in_month`, keeping input order.
pub fn filter_month(records: &[ScanRecord], any_date_in_month: NaiveDate) -> Vec<ScanRecord> {
    let range = month_range(any_date_in_month);
    records
        .iter()
        .filter(|record| range.contains(&record.timestamp()))
        .cloned()
        .collect()
}
