//! Earnings accrual.
//!
//! This module turns "now" into the amount earned so far today. It is called on
//! every clock tick by an external driver, so it only ever looks at today and the
//! current month and keeps no state between calls.

use std::time::Duration as StdDuration;

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    CalendarExceptionStore, DayClassification, EarningsState, ScheduleConfig, StatusReason,
    WorkPhase,
};

use super::date_utils::{shift_instants, whole_seconds_between};
use super::day_classification::classify;
use super::workday_counter::effective_workdays;

/// How often a display driver is expected to call [`tick`].
pub const DEFAULT_TICK_INTERVAL: StdDuration = StdDuration::from_millis(100);

const MONTHS_PER_YEAR: u32 = 12;
const SECONDS_PER_HOUR: u32 = 3600;

/// The pay earned per second of work.
///
/// `(monthly_salary × salary_months_per_year) / (12 × effective_workdays ×
/// daily_work_hours × 3600)`: the salary is annualized, spread over a
/// monthly-equivalent number of workdays, then over the seconds of a workday.
///
/// Returns `None` when there are no effective workdays, the daily hours are not
/// positive, or an intermediate product overflows `Decimal`, since no rate can
/// be derived.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::pay_per_second;
/// use earnings_ticker::models::ScheduleConfig;
/// use rust_decimal::Decimal;
///
/// let schedule = ScheduleConfig {
///     monthly_salary: Decimal::new(10000, 0),
///     ..ScheduleConfig::default()
/// };
/// let rate = pay_per_second(&schedule, 22).unwrap();
/// assert_eq!(rate.round_dp(6), Decimal::new(15783, 6));
/// assert!(pay_per_second(&schedule, 0).is_none());
/// ```
pub fn pay_per_second(schedule: &ScheduleConfig, effective_workdays: u32) -> Option<Decimal> {
    if effective_workdays == 0 || schedule.daily_work_hours <= Decimal::ZERO {
        return None;
    }
    let annual_salary = schedule
        .monthly_salary
        .checked_mul(Decimal::from(schedule.salary_months_per_year))?;
    let seconds_per_month = Decimal::from(MONTHS_PER_YEAR)
        .checked_mul(Decimal::from(effective_workdays))?
        .checked_mul(schedule.daily_work_hours)?
        .checked_mul(Decimal::from(SECONDS_PER_HOUR))?;
    annual_salary.checked_div(seconds_per_month)
}

/// A full day's pay at the given per-second rate, or `None` on overflow.
pub fn full_day_pay(schedule: &ScheduleConfig, pay_per_second: Decimal) -> Option<Decimal> {
    pay_per_second
        .checked_mul(schedule.daily_work_hours)?
        .checked_mul(Decimal::from(SECONDS_PER_HOUR))
}

fn off_day_reason(classification: &DayClassification) -> StatusReason {
    match classification {
        DayClassification::StatutoryHoliday { name } => {
            StatusReason::StatutoryHoliday { name: name.clone() }
        }
        DayClassification::WeekendRest => StatusReason::Weekend,
        _ => StatusReason::ScheduledRest,
    }
}

/// Computes the earnings state at `now`.
///
/// 1. An invalid schedule yields [`WorkPhase::NotConfigured`].
/// 2. A day that is not a workday yields [`WorkPhase::OffDay`].
/// 3. A month without effective workdays, or a salary too large for `Decimal`
///    arithmetic, yields [`WorkPhase::NoAccrualPossible`].
/// 4. Otherwise the day's pay accrues linearly from shift start, clamped to a
///    full day's pay, and stays at the full amount after shift end.
///
/// The result depends only on the arguments, so repeated calls with the same
/// `now` agree.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::tick;
/// use earnings_ticker::models::{CalendarExceptionStore, ScheduleConfig, WorkPhase};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let schedule = ScheduleConfig {
///     monthly_salary: Decimal::new(10000, 0),
///     ..ScheduleConfig::default()
/// };
/// // One hour into the shift on Wednesday 2026-01-14; January 2026 has 22 weekdays
/// let now = NaiveDateTime::parse_from_str("2026-01-14 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let state = tick(now, &schedule, &CalendarExceptionStore::empty());
///
/// assert_eq!(state.phase, WorkPhase::InShift);
/// assert_eq!(state.amount_accrued.round_dp(1), Decimal::new(568, 1));
/// ```
pub fn tick(
    now: NaiveDateTime,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
) -> EarningsState {
    let holiday_data = exceptions.status();

    if let Err(err) = schedule.validate() {
        debug!(error = %err, "Schedule not configured");
        return EarningsState::idle(
            WorkPhase::NotConfigured,
            StatusReason::NotConfigured {
                message: err.to_string(),
            },
            None,
            holiday_data,
        );
    }

    let today = now.date();
    let classification = classify(today, schedule, exceptions);
    if !classification.is_workday() {
        return EarningsState::idle(
            WorkPhase::OffDay,
            off_day_reason(&classification),
            Some(classification),
            holiday_data,
        );
    }

    let workdays = match effective_workdays(today.year(), today.month(), schedule, exceptions) {
        Ok(count) => count,
        Err(err) => {
            warn!(error = %err, "Could not count workdays");
            0
        }
    };
    let pay = pay_per_second(schedule, workdays)
        .and_then(|rate| full_day_pay(schedule, rate).map(|full_day| (rate, full_day)));
    let Some((rate, full_day)) = pay else {
        warn!(
            year = today.year(),
            month = today.month(),
            workdays,
            "No accrual possible for this month"
        );
        return EarningsState::idle(
            WorkPhase::NoAccrualPossible,
            StatusReason::NoAccrualPossible,
            Some(classification),
            holiday_data,
        );
    };

    let (shift_start, shift_end) = shift_instants(today, schedule);

    let (phase, reason, amount_accrued) = if now < shift_start {
        (WorkPhase::BeforeShift, StatusReason::BeforeShift, Decimal::ZERO)
    } else if now >= shift_end {
        (WorkPhase::AfterShift, StatusReason::AfterShift, full_day)
    } else {
        let elapsed_seconds = Decimal::new((now - shift_start).num_milliseconds(), 3);
        // An overflowing product is past any representable full day
        let accrued = rate
            .checked_mul(elapsed_seconds)
            .map_or(full_day, |amount| amount.min(full_day));
        (WorkPhase::InShift, StatusReason::InShift, accrued)
    };

    EarningsState {
        amount_accrued,
        phase,
        reason,
        classification: Some(classification),
        seconds_until_shift_end: (now < shift_end).then(|| whole_seconds_between(now, shift_end)),
        holiday_data,
    }
}
