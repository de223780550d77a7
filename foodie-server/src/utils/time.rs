//! Business time zone helpers
//!
//! Repositories take plain `i64` Unix millis; the conversion from calendar
//! boundaries happens here.

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

/// Local midnight of `date` in Unix millis
///
/// If midnight falls in a DST gap, falls back to UTC midnight.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(chrono::NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Local midnight of the first day of `date`'s month
pub fn month_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let first = date.with_day(1).unwrap_or(date);
    day_start_millis(first, tz)
}

/// `(start of today, start of this month)` in the business time zone
pub fn today_bounds(tz: Tz) -> (i64, i64) {
    let today = chrono::Utc::now().with_timezone(&tz).date_naive();
    (day_start_millis(today, tz), month_start_millis(today, tz))
}
