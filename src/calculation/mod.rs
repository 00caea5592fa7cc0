//! Calculation logic for the earnings ticker engine.
//!
//! This module contains the day classifier, the monthly workday counter, the
//! rest-day lookahead, the per-tick earnings accrual calculator and the calendar
//! helpers they share. Every function here is pure: results depend only on the
//! arguments.

mod date_utils;
mod day_classification;
mod earnings_accrual;
mod rest_day_finder;
mod workday_counter;

pub use date_utils::{
    days_in_month, days_until_weekend, first_of_month, is_weekend, month_days, shift_instants,
    weekday_index,
};
pub use day_classification::{
    CLASSIFICATION_RULES, ClassificationRule, DayContext, classify, classify_with,
};
pub use earnings_accrual::{DEFAULT_TICK_INTERVAL, full_day_pay, pay_per_second, tick};
pub use rest_day_finder::{
    DEFAULT_HORIZON_DAYS, RestDay, RestDayKind, next_rest_day, upcoming_rest_days,
};
pub use workday_counter::{MonthlyWorkdays, effective_workdays, month_breakdown};
