//! Calendar helpers shared by the classifier, counter and calculator.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::ScheduleConfig;

/// Returns the weekday index used by schedules: 0 = Sunday .. 6 = Saturday.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::weekday_index;
/// use chrono::NaiveDate;
///
/// // 2026-01-18 is a Sunday, 2026-01-17 a Saturday
/// assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 1, 18).unwrap()), 0);
/// assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()), 6);
/// ```
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Returns `true` on Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The first day of a month, or [`EngineError::InvalidDate`].
pub fn first_of_month(year: i32, month: u32) -> EngineResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidDate { year, month })
}

/// The number of days in a month.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2026, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2028, 2).unwrap(), 29);
/// assert!(days_in_month(2026, 13).is_err());
/// ```
pub fn days_in_month(year: i32, month: u32) -> EngineResult<u32> {
    let first = first_of_month(year, month)?;
    let next = first
        .checked_add_months(chrono::Months::new(1))
        .ok_or(EngineError::InvalidDate { year, month })?;
    Ok((next - first).num_days() as u32)
}

/// Iterates over every date of a month in order.
pub fn month_days(year: i32, month: u32) -> EngineResult<impl Iterator<Item = NaiveDate>> {
    let first = first_of_month(year, month)?;
    Ok(first.iter_days().take_while(move |d| d.month() == month))
}

/// Builds the shift start and end instants on the given date.
pub fn shift_instants(date: NaiveDate, schedule: &ScheduleConfig) -> (NaiveDateTime, NaiveDateTime) {
    (
        date.and_time(schedule.shift_start),
        date.and_time(schedule.shift_end),
    )
}

/// Days until the next Saturday; 0 when the date is already a weekend day.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::days_until_weekend;
/// use chrono::NaiveDate;
///
/// // 2026-01-12 is a Monday
/// assert_eq!(days_until_weekend(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()), 5);
/// ```
pub fn days_until_weekend(date: NaiveDate) -> u32 {
    if is_weekend(date) {
        return 0;
    }
    u32::from(6 - weekday_index(date))
}

/// Whole seconds between two instants, rounding partial seconds up.
pub(crate) fn whole_seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let diff = to - from;
    let secs = diff.num_seconds();
    if diff > Duration::seconds(secs) {
        secs + 1
    } else {
        secs
    }
}
