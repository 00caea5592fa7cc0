//! Schedule configuration model.
//!
//! This module defines the [`ScheduleConfig`] supplied by the user: what they are
//! paid, how many hours a day they work, when their shift runs and which weekdays
//! they work.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Weekday indices used by [`ScheduleConfig::work_weekdays`]: 0 = Sunday .. 6 = Saturday.
pub const SUNDAY: u8 = 0;
/// Saturday's weekday index.
pub const SATURDAY: u8 = 6;

/// A user's compensation and weekly work schedule.
///
/// Weekdays are stored as indices counted from Sunday (0) to Saturday (6).
/// Times of day are written as `HH:MM`.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::ScheduleConfig;
/// use rust_decimal::Decimal;
///
/// let schedule = ScheduleConfig {
///     monthly_salary: Decimal::new(10000, 0),
///     ..ScheduleConfig::default()
/// };
/// assert!(schedule.validate().is_ok());
/// assert_eq!(schedule.salary_months_per_year, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Salary paid per salary month.
    pub monthly_salary: Decimal,
    /// Number of monthly salaries paid per year (12, 13, 14, ...).
    #[serde(default = "default_salary_months_per_year")]
    pub salary_months_per_year: u32,
    /// Paid hours per workday.
    #[serde(default = "default_daily_work_hours")]
    pub daily_work_hours: Decimal,
    /// Time of day the shift starts.
    #[serde(default = "default_shift_start", with = "clock_time")]
    pub shift_start: NaiveTime,
    /// Time of day the shift ends.
    #[serde(default = "default_shift_end", with = "clock_time")]
    pub shift_end: NaiveTime,
    /// Weekdays the user works, 0 = Sunday .. 6 = Saturday.
    #[serde(default = "default_work_weekdays")]
    pub work_weekdays: BTreeSet<u8>,
}

fn default_salary_months_per_year() -> u32 {
    12
}

fn default_daily_work_hours() -> Decimal {
    Decimal::new(8, 0)
}

fn default_shift_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

fn default_shift_end() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()
}

fn default_work_weekdays() -> BTreeSet<u8> {
    (1..=5).collect()
}

impl Default for ScheduleConfig {
    /// The settings form defaults: no salary yet, 12 months, 8 hours,
    /// 09:00 to 18:00, Monday to Friday.
    fn default() -> Self {
        Self {
            monthly_salary: Decimal::ZERO,
            salary_months_per_year: default_salary_months_per_year(),
            daily_work_hours: default_daily_work_hours(),
            shift_start: default_shift_start(),
            shift_end: default_shift_end(),
            work_weekdays: default_work_weekdays(),
        }
    }
}

impl ScheduleConfig {
    /// Checks that every field holds a usable value.
    ///
    /// Returns the first failing field as [`EngineError::InvalidSchedule`].
    /// A schedule that fails validation must never produce an earnings amount.
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::error::EngineError;
    /// use earnings_ticker::models::ScheduleConfig;
    ///
    /// // The default schedule has no salary yet.
    /// match ScheduleConfig::default().validate() {
    ///     Err(EngineError::InvalidSchedule { field, .. }) => assert_eq!(field, "monthly_salary"),
    ///     other => panic!("unexpected: {:?}", other),
    /// }
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_salary <= Decimal::ZERO {
            return Err(invalid("monthly_salary", "must be greater than zero"));
        }
        if self.salary_months_per_year < 1 {
            return Err(invalid("salary_months_per_year", "must be at least 1"));
        }
        if self.daily_work_hours <= Decimal::ZERO {
            return Err(invalid("daily_work_hours", "must be greater than zero"));
        }
        if self.work_weekdays.is_empty() {
            return Err(invalid("work_weekdays", "at least one workday is required"));
        }
        if let Some(day) = self.work_weekdays.iter().find(|&&d| d > SATURDAY) {
            return Err(invalid(
                "work_weekdays",
                format!("weekday index {} is outside 0..=6", day),
            ));
        }
        if self.shift_start >= self.shift_end {
            return Err(invalid(
                "shift_end",
                format!(
                    "shift must end after it starts ({} - {})",
                    self.shift_start.format("%H:%M"),
                    self.shift_end.format("%H:%M")
                ),
            ));
        }
        Ok(())
    }

    /// Returns `true` when the schedule passes [`ScheduleConfig::validate`].
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    /// Returns `true` when the given weekday is one of the user's workdays.
    pub fn works_on(&self, weekday: Weekday) -> bool {
        self.work_weekdays
            .contains(&(weekday.num_days_from_sunday() as u8))
    }

    /// Returns `true` when the weekday of `date` is one of the user's workdays.
    pub fn works_on_date(&self, date: NaiveDate) -> bool {
        self.works_on(date.weekday())
    }

    /// The clock span between shift start and shift end, in hours rounded to
    /// one decimal place.
    ///
    /// A shift end earlier than the start is read as crossing midnight. This is
    /// only a hint shown next to the daily hours; accrual always uses
    /// [`ScheduleConfig::daily_work_hours`].
    ///
    /// # Example
    ///
    /// ```
    /// use earnings_ticker::models::ScheduleConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let schedule = ScheduleConfig::default(); // 09:00 - 18:00
    /// assert_eq!(schedule.shift_span_hours(), Decimal::new(90, 1));
    /// ```
    pub fn shift_span_hours(&self) -> Decimal {
        let start = minutes_of_day(self.shift_start);
        let end = minutes_of_day(self.shift_end);
        let mut span = end - start;
        if span < 0 {
            span += 24 * 60;
        }
        (Decimal::new(span, 0) / Decimal::new(60, 0)).round_dp(1)
    }
}

fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidSchedule {
        field: field.to_string(),
        message: message.into(),
    }
}

/// Serde adapter for `HH:MM` times of day. Seconds are accepted on input.
mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time of day '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn configured() -> ScheduleConfig {
        ScheduleConfig {
            monthly_salary: dec("10000"),
            ..ScheduleConfig::default()
        }
    }

    fn invalid_field(schedule: &ScheduleConfig) -> String {
        match schedule.validate() {
            Err(EngineError::InvalidSchedule { field, .. }) => field,
            other => panic!("Expected InvalidSchedule, got {:?}", other),
        }
    }

    #[test]
    fn test_default_matches_settings_form() {
        let schedule = ScheduleConfig::default();
        assert_eq!(schedule.salary_months_per_year, 12);
        assert_eq!(schedule.daily_work_hours, dec("8"));
        assert_eq!(schedule.shift_start, time("09:00"));
        assert_eq!(schedule.shift_end, time("18:00"));
        assert_eq!(
            schedule.work_weekdays.iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
        assert!(!schedule.is_configured());
    }

    #[test]
    fn test_valid_schedule_passes() {
        assert!(configured().validate().is_ok());
        assert!(configured().is_configured());
    }

    #[test]
    fn test_zero_salary_is_invalid() {
        assert_eq!(invalid_field(&ScheduleConfig::default()), "monthly_salary");
    }

    #[test]
    fn test_negative_salary_is_invalid() {
        let schedule = ScheduleConfig {
            monthly_salary: dec("-1"),
            ..configured()
        };
        assert_eq!(invalid_field(&schedule), "monthly_salary");
    }

    #[test]
    fn test_zero_salary_months_is_invalid() {
        let schedule = ScheduleConfig {
            salary_months_per_year: 0,
            ..configured()
        };
        assert_eq!(invalid_field(&schedule), "salary_months_per_year");
    }

    #[test]
    fn test_non_positive_hours_is_invalid() {
        let schedule = ScheduleConfig {
            daily_work_hours: Decimal::ZERO,
            ..configured()
        };
        assert_eq!(invalid_field(&schedule), "daily_work_hours");
    }

    #[test]
    fn test_empty_work_weekdays_is_invalid() {
        let schedule = ScheduleConfig {
            work_weekdays: BTreeSet::new(),
            ..configured()
        };
        assert_eq!(invalid_field(&schedule), "work_weekdays");
    }

    #[test]
    fn test_out_of_range_weekday_is_invalid() {
        let schedule = ScheduleConfig {
            work_weekdays: [1, 7].into_iter().collect(),
            ..configured()
        };
        assert_eq!(invalid_field(&schedule), "work_weekdays");
    }

    #[test]
    fn test_shift_ending_before_start_is_invalid() {
        let schedule = ScheduleConfig {
            shift_start: time("18:00"),
            shift_end: time("09:00"),
            ..configured()
        };
        assert_eq!(invalid_field(&schedule), "shift_end");
    }

    #[test]
    fn test_works_on_uses_sunday_based_indices() {
        let schedule = ScheduleConfig {
            work_weekdays: [0, 6].into_iter().collect(),
            ..configured()
        };
        assert!(schedule.works_on(Weekday::Sun));
        assert!(schedule.works_on(Weekday::Sat));
        assert!(!schedule.works_on(Weekday::Mon));
        // 2026-01-17 is a Saturday
        assert!(schedule.works_on_date(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()));
    }

    #[test]
    fn test_shift_span_hours() {
        let schedule = ScheduleConfig {
            shift_start: time("09:30"),
            shift_end: time("18:00"),
            ..configured()
        };
        assert_eq!(schedule.shift_span_hours(), dec("8.5"));
    }

    #[test]
    fn test_shift_span_hours_wraps_midnight() {
        let schedule = ScheduleConfig {
            shift_start: time("22:00"),
            shift_end: time("06:00"),
            ..configured()
        };
        assert_eq!(schedule.shift_span_hours(), dec("8.0"));
    }

    #[test]
    fn test_shift_span_hours_rounds_to_one_decimal() {
        let schedule = ScheduleConfig {
            shift_start: time("09:00"),
            shift_end: time("17:20"),
            ..configured()
        };
        assert_eq!(schedule.shift_span_hours(), dec("8.3"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{ "monthly_salary": 12000 }"#;
        let schedule: ScheduleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.monthly_salary, dec("12000"));
        assert_eq!(schedule.shift_start, time("09:00"));
        assert!(schedule.is_configured());
    }

    #[test]
    fn test_deserialize_full_schedule() {
        let json = r#"{
            "monthly_salary": "15000.50",
            "salary_months_per_year": 13,
            "daily_work_hours": "7.5",
            "shift_start": "08:30",
            "shift_end": "17:00:00",
            "work_weekdays": [1, 2, 3, 4, 5, 6]
        }"#;
        let schedule: ScheduleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.monthly_salary, dec("15000.50"));
        assert_eq!(schedule.salary_months_per_year, 13);
        assert_eq!(schedule.daily_work_hours, dec("7.5"));
        assert_eq!(schedule.shift_start, time("08:30"));
        assert_eq!(schedule.shift_end, time("17:00"));
        assert!(schedule.work_weekdays.contains(&6));
    }

    #[test]
    fn test_deserialize_rejects_bad_time() {
        let json = r#"{ "monthly_salary": 1, "shift_start": "9am" }"#;
        let result: Result<ScheduleConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_writes_clock_times() {
        let json = serde_json::to_string(&configured()).unwrap();
        assert!(json.contains("\"shift_start\":\"09:00\""));
        assert!(json.contains("\"shift_end\":\"18:00\""));

        let back: ScheduleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, configured());
    }
}
