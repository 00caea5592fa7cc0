//! Monthly workday counting.
//!
//! The number of effective workdays in the current month is the denominator of
//! the per-second pay rate. It is found by classifying every day of the month.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{CalendarExceptionStore, DayClassification, ScheduleConfig};

use super::date_utils::month_days;
use super::day_classification::classify;

/// How the days of one month split across classifications.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::month_breakdown;
/// use earnings_ticker::models::{CalendarExceptionStore, ScheduleConfig};
///
/// // January 2026 has 22 weekdays
/// let breakdown = month_breakdown(2026, 1, &ScheduleConfig::default(), &CalendarExceptionStore::empty())
///     .unwrap();
/// assert_eq!(breakdown.days_in_month, 31);
/// assert_eq!(breakdown.effective(), 22);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyWorkdays {
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// Days classified [`DayClassification::Workday`].
    pub workdays: u32,
    /// Days classified [`DayClassification::MakeupWorkday`].
    pub makeup_workdays: u32,
    /// Days classified [`DayClassification::StatutoryHoliday`].
    pub statutory_holidays: u32,
    /// Days classified as weekend or scheduled rest.
    pub rest_days: u32,
}

impl MonthlyWorkdays {
    /// Days on which pay accrues.
    pub fn effective(&self) -> u32 {
        self.workdays + self.makeup_workdays
    }

    fn record(&mut self, classification: &DayClassification) {
        self.days_in_month += 1;
        match classification {
            DayClassification::Workday => self.workdays += 1,
            DayClassification::MakeupWorkday => self.makeup_workdays += 1,
            DayClassification::StatutoryHoliday { .. } => self.statutory_holidays += 1,
            DayClassification::WeekendRest | DayClassification::ScheduledRest => {
                self.rest_days += 1
            }
        }
    }
}

/// Classifies every day of a month and tallies the results.
///
/// Returns [`crate::error::EngineError::InvalidDate`] when `month` is not 1-12.
pub fn month_breakdown(
    year: i32,
    month: u32,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
) -> EngineResult<MonthlyWorkdays> {
    let mut breakdown = MonthlyWorkdays::default();
    for date in month_days(year, month)? {
        breakdown.record(&classify(date, schedule, exceptions));
    }
    Ok(breakdown)
}

/// Counts the days of a month on which pay accrues.
///
/// A result of 0 is valid; the caller must treat it as "no accrual possible".
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::effective_workdays;
/// use earnings_ticker::models::{CalendarExceptionStore, ScheduleConfig};
///
/// let workdays = effective_workdays(2026, 2, &ScheduleConfig::default(), &CalendarExceptionStore::empty())
///     .unwrap();
/// assert_eq!(workdays, 20);
/// ```
pub fn effective_workdays(
    year: i32,
    month: u32,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
) -> EngineResult<u32> {
    month_breakdown(year, month, schedule, exceptions).map(|b| b.effective())
}
