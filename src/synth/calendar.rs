//! Date arithmetic relative to the fixed base date 2020-01-01
//!
//! Year and month steps are calendar steps (clamped to the end of the target
//! month), day steps are exact. All results are midnight timestamps.

use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// 2020-01-01, the origin of every generated date
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("2020-01-01 is a valid date")
}

#[inline]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// base + `years` years + `days` days
pub fn years_after(years: u32, days: u64) -> NaiveDateTime {
    midnight(base_date() + Months::new(years * 12) + Days::new(days))
}

/// base - `years` years + `days` days
pub fn years_before(years: u32, days: u64) -> NaiveDateTime {
    midnight(base_date() - Months::new(years * 12) + Days::new(days))
}

/// base - `months` months
pub fn months_before(months: u32) -> NaiveDateTime {
    midnight(base_date() - Months::new(months))
}

/// base + `days` days
pub fn days_after(days: u64) -> NaiveDateTime {
    midnight(base_date() + Days::new(days))
}

/// ISO 8601 with seven fractional digits (`2020-01-02T00:00:00.0000000`),
/// parseable back into the same instant.
pub fn round_trip_string(ts: NaiveDateTime) -> String {
    format!(
        "{}.{:07}",
        ts.format("%Y-%m-%dT%H:%M:%S"),
        ts.nanosecond() / 100
    )
}
