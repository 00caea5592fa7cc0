//! Lookahead search for upcoming rest days.
//!
//! This module answers "when is my next day off?" with a bounded forward scan
//! and produces the list of rest days shown in the forward calendar view.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CalendarExceptionStore, DayClassification, ScheduleConfig};

use super::day_classification::classify;

/// How many days ahead the finder looks by default.
pub const DEFAULT_HORIZON_DAYS: u32 = 90;

/// The kind of an upcoming day off.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RestDayKind {
    /// A statutory holiday.
    Statutory {
        /// The holiday's name.
        name: String,
    },
    /// A weekend day outside the user's workdays.
    Weekend,
    /// Any other weekday outside the user's workdays.
    ScheduledRest,
}

impl RestDayKind {
    fn from_classification(classification: DayClassification) -> Option<Self> {
        match classification {
            DayClassification::StatutoryHoliday { name } => Some(RestDayKind::Statutory { name }),
            DayClassification::WeekendRest => Some(RestDayKind::Weekend),
            DayClassification::ScheduledRest => Some(RestDayKind::ScheduledRest),
            DayClassification::Workday | DayClassification::MakeupWorkday => None,
        }
    }
}

/// An upcoming day off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestDay {
    /// The date of the day off.
    pub date: NaiveDate,
    /// Days from the search origin to `date`.
    pub days_until: u32,
    /// What kind of day off it is.
    #[serde(flatten)]
    pub kind: RestDayKind,
}

impl RestDay {
    /// The display name: the holiday's name, "Weekend" or "Rest day".
    pub fn name(&self) -> &str {
        match &self.kind {
            RestDayKind::Statutory { name } => name,
            RestDayKind::Weekend => "Weekend",
            RestDayKind::ScheduledRest => "Rest day",
        }
    }

    /// Returns `true` for statutory holidays.
    pub fn is_statutory_holiday(&self) -> bool {
        matches!(self.kind, RestDayKind::Statutory { .. })
    }
}

fn rest_day_at(
    today: NaiveDate,
    offset: u32,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
) -> Option<RestDay> {
    let date = today.checked_add_signed(Duration::days(i64::from(offset)))?;
    RestDayKind::from_classification(classify(date, schedule, exceptions)).map(|kind| RestDay {
        date,
        days_until: offset,
        kind,
    })
}

/// Finds the nearest upcoming day off within `horizon_days` after `today`.
///
/// Scans `today + 1 ..= today + horizon_days`, tracking the first statutory
/// holiday and the first ordinary rest day separately, and stops as soon as both
/// are known. Makeup workdays are never returned. The nearer of the two wins;
/// a statutory holiday wins a tie.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::{next_rest_day, DEFAULT_HORIZON_DAYS};
/// use earnings_ticker::models::{CalendarExceptionStore, ScheduleConfig};
/// use chrono::NaiveDate;
///
/// // From Monday 2026-01-12 the next day off is Saturday, five days later
/// let today = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let next = next_rest_day(
///     today,
///     &ScheduleConfig::default(),
///     &CalendarExceptionStore::empty(),
///     DEFAULT_HORIZON_DAYS,
/// )
/// .unwrap();
/// assert_eq!(next.days_until, 5);
/// assert_eq!(next.name(), "Weekend");
/// ```
pub fn next_rest_day(
    today: NaiveDate,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
    horizon_days: u32,
) -> Option<RestDay> {
    let mut holiday: Option<RestDay> = None;
    let mut rest: Option<RestDay> = None;

    for offset in 1..=horizon_days {
        if holiday.is_some() && rest.is_some() {
            break;
        }
        let Some(day) = rest_day_at(today, offset, schedule, exceptions) else {
            continue;
        };
        let slot = if day.is_statutory_holiday() {
            &mut holiday
        } else {
            &mut rest
        };
        if slot.is_none() {
            *slot = Some(day);
        }
    }

    match (holiday, rest) {
        (Some(h), Some(r)) => Some(if h.days_until <= r.days_until { h } else { r }),
        (h, r) => h.or(r),
    }
}

/// Lists every day off in the `horizon_days` days starting with `today`.
///
/// The same classification walk as [`next_rest_day`] without early exit, for a
/// forward calendar view. Today is included with `days_until == 0`.
pub fn upcoming_rest_days(
    today: NaiveDate,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
    horizon_days: u32,
) -> Vec<RestDay> {
    (0..horizon_days)
        .filter_map(|offset| rest_day_at(today, offset, schedule, exceptions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CalendarExceptionRecord;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn weekday_schedule() -> ScheduleConfig {
        ScheduleConfig {
            monthly_salary: Decimal::new(10000, 0),
            ..ScheduleConfig::default()
        }
    }

    fn find(today: &str, exceptions: &CalendarExceptionStore) -> Option<RestDay> {
        next_rest_day(
            make_date(today),
            &weekday_schedule(),
            exceptions,
            DEFAULT_HORIZON_DAYS,
        )
    }

    #[test]
    fn test_next_weekend_from_monday() {
        let next = find("2026-01-12", &CalendarExceptionStore::empty()).unwrap();
        assert_eq!(next.date, make_date("2026-01-17"));
        assert_eq!(next.days_until, 5);
        assert_eq!(next.kind, RestDayKind::Weekend);
    }

    #[test]
    fn test_today_is_never_returned() {
        // Saturday: the next day off is tomorrow, not today
        let next = find("2026-01-17", &CalendarExceptionStore::empty()).unwrap();
        assert_eq!(next.date, make_date("2026-01-18"));
        assert_eq!(next.days_until, 1);
    }

    #[test]
    fn test_nearer_holiday_beats_weekend() {
        // Monday 2026-09-28; Thursday 2026-10-01 is National Day
        let exceptions = CalendarExceptionStore::from_records(vec![
            CalendarExceptionRecord::statutory_holiday(make_date("2026-10-01"), "国庆节"),
        ]);
        let next = find("2026-09-28", &exceptions).unwrap();
        assert_eq!(next.name(), "国庆节");
        assert_eq!(next.days_until, 3);
        assert!(next.is_statutory_holiday());
    }

    #[test]
    fn test_nearer_weekend_beats_later_holiday() {
        let exceptions = CalendarExceptionStore::from_records(vec![
            CalendarExceptionRecord::statutory_holiday(make_date("2026-10-01"), "国庆节"),
        ]);
        // Monday 2026-09-21: weekend on the 26th comes first
        let next = find("2026-09-21", &exceptions).unwrap();
        assert_eq!(next.kind, RestDayKind::Weekend);
        assert_eq!(next.days_until, 5);
    }

    #[test]
    fn test_makeup_workdays_are_skipped() {
        // Both weekend days are worked; the next rest day is the following Saturday
        let exceptions = CalendarExceptionStore::from_records(vec![
            CalendarExceptionRecord::makeup_workday(make_date("2026-01-17")),
            CalendarExceptionRecord::makeup_workday(make_date("2026-01-18")),
        ]);
        let next = find("2026-01-12", &exceptions).unwrap();
        assert_eq!(next.date, make_date("2026-01-24"));
    }

    #[test]
    fn test_scheduled_rest_name() {
        let schedule = ScheduleConfig {
            work_weekdays: [1, 2, 3, 4].into_iter().collect(),
            ..weekday_schedule()
        };
        let next = next_rest_day(
            make_date("2026-01-12"),
            &schedule,
            &CalendarExceptionStore::empty(),
            DEFAULT_HORIZON_DAYS,
        )
        .unwrap();
        assert_eq!(next.kind, RestDayKind::ScheduledRest);
        assert_eq!(next.name(), "Rest day");
        assert_eq!(next.days_until, 4);
    }

    #[test]
    fn test_nothing_within_horizon() {
        let schedule = ScheduleConfig {
            work_weekdays: (0..=6).collect(),
            ..weekday_schedule()
        };
        let next = next_rest_day(
            make_date("2026-01-12"),
            &schedule,
            &CalendarExceptionStore::empty(),
            DEFAULT_HORIZON_DAYS,
        );
        assert!(next.is_none());
    }

    #[test]
    fn test_holiday_found_when_no_ordinary_rest_exists() {
        let schedule = ScheduleConfig {
            work_weekdays: (0..=6).collect(),
            ..weekday_schedule()
        };
        let exceptions = CalendarExceptionStore::from_records(vec![
            CalendarExceptionRecord::statutory_holiday(make_date("2026-02-17"), "春节"),
        ]);
        let next = next_rest_day(make_date("2026-01-12"), &schedule, &exceptions, 90).unwrap();
        assert_eq!(next.name(), "春节");
        assert_eq!(next.days_until, 36);
    }

    #[test]
    fn test_horizon_bounds_the_search() {
        let next = next_rest_day(
            make_date("2026-01-12"),
            &weekday_schedule(),
            &CalendarExceptionStore::empty(),
            4,
        );
        assert!(next.is_none());

        let next = next_rest_day(
            make_date("2026-01-12"),
            &weekday_schedule(),
            &CalendarExceptionStore::empty(),
            5,
        );
        assert_eq!(next.map(|d| d.days_until), Some(5));
    }

    #[test]
    fn test_zero_horizon_finds_nothing() {
        let next = next_rest_day(
            make_date("2026-01-17"),
            &weekday_schedule(),
            &CalendarExceptionStore::empty(),
            0,
        );
        assert!(next.is_none());
    }

    #[test]
    fn test_upcoming_rest_days_includes_today() {
        let days = upcoming_rest_days(
            make_date("2026-01-17"),
            &weekday_schedule(),
            &CalendarExceptionStore::empty(),
            14,
        );
        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                make_date("2026-01-17"),
                make_date("2026-01-18"),
                make_date("2026-01-24"),
                make_date("2026-01-25"),
            ]
        );
        assert_eq!(days[0].days_until, 0);
    }

    #[test]
    fn test_upcoming_rest_days_lists_holidays_and_skips_makeup_days() {
        let exceptions = CalendarExceptionStore::from_records(vec![
            CalendarExceptionRecord::makeup_workday(make_date("2026-09-27")),
            CalendarExceptionRecord::statutory_holiday(make_date("2026-10-01"), "国庆节"),
        ]);
        let days = upcoming_rest_days(
            make_date("2026-09-26"),
            &weekday_schedule(),
            &exceptions,
            7,
        );
        let names: Vec<_> = days.iter().map(|d| (d.date, d.name().to_string())).collect();
        assert_eq!(
            names,
            vec![
                (make_date("2026-09-26"), "Weekend".to_string()),
                (make_date("2026-10-01"), "国庆节".to_string()),
            ]
        );
    }

    #[test]
    fn test_rest_day_serialization_is_flat() {
        let day = RestDay {
            date: make_date("2026-10-01"),
            days_until: 3,
            kind: RestDayKind::Statutory {
                name: "国庆节".to_string(),
            },
        };
        let json = serde_json::to_string(&day).unwrap();
        assert!(json.contains("\"kind\":\"statutory\""));
        assert!(json.contains("\"name\":\"国庆节\""));
        assert!(json.contains("\"days_until\":3"));

        let back: RestDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, day);
    }
}
