//! Day classification.
//!
//! This module decides what kind of day a date is for a user by combining the
//! holiday feed's calendar exceptions with the user's weekly schedule. The
//! decision is an ordered rule table: the first rule that matches wins, so new
//! exception types slot in at the right precedence without touching the others.

use chrono::NaiveDate;

use crate::models::{CalendarExceptionRecord, CalendarExceptionStore, DayClassification, ScheduleConfig};

use super::date_utils::is_weekend;

/// Everything a classification rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct DayContext<'a> {
    /// The date being classified.
    pub date: NaiveDate,
    /// The user's schedule.
    pub schedule: &'a ScheduleConfig,
    /// The exception record for `date`, if the feed has one.
    pub exception: Option<&'a CalendarExceptionRecord>,
}

impl DayContext<'_> {
    fn scheduled_off(&self) -> bool {
        !self.schedule.works_on_date(self.date)
    }
}

/// A named precedence rule.
pub struct ClassificationRule {
    /// Identifier used in logs and tests.
    pub id: &'static str,
    /// Returns a classification when the rule applies.
    pub apply: fn(&DayContext<'_>) -> Option<DayClassification>,
}

/// The precedence table, highest priority first.
///
/// Policy days off beat makeup workdays, which beat the weekly schedule.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        id: "statutory_holiday",
        apply: statutory_holiday_rule,
    },
    ClassificationRule {
        id: "makeup_workday",
        apply: makeup_workday_rule,
    },
    ClassificationRule {
        id: "weekend_rest",
        apply: weekend_rest_rule,
    },
    ClassificationRule {
        id: "scheduled_rest",
        apply: scheduled_rest_rule,
    },
];

fn statutory_holiday_rule(ctx: &DayContext<'_>) -> Option<DayClassification> {
    ctx.exception
        .filter(|record| record.qualifies_as_statutory_holiday())
        .map(|record| DayClassification::StatutoryHoliday {
            name: record.holiday_name().to_string(),
        })
}

fn makeup_workday_rule(ctx: &DayContext<'_>) -> Option<DayClassification> {
    ctx.exception
        .filter(|record| record.is_makeup_workday)
        .map(|_| DayClassification::MakeupWorkday)
}

fn weekend_rest_rule(ctx: &DayContext<'_>) -> Option<DayClassification> {
    (is_weekend(ctx.date) && ctx.scheduled_off()).then_some(DayClassification::WeekendRest)
}

fn scheduled_rest_rule(ctx: &DayContext<'_>) -> Option<DayClassification> {
    ctx.scheduled_off().then_some(DayClassification::ScheduledRest)
}

/// Classifies a date against the rule table in [`CLASSIFICATION_RULES`].
///
/// Falls through to [`DayClassification::Workday`] when no rule matches. An empty
/// store simply leaves the weekly schedule in charge.
///
/// # Example
///
/// ```
/// use earnings_ticker::calculation::classify;
/// use earnings_ticker::models::{
///     CalendarExceptionRecord, CalendarExceptionStore, DayClassification, ScheduleConfig,
/// };
/// use chrono::NaiveDate;
///
/// let schedule = ScheduleConfig::default(); // Monday to Friday
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// let empty = CalendarExceptionStore::empty();
/// assert_eq!(classify(saturday, &schedule, &empty), DayClassification::WeekendRest);
///
/// // A makeup workday turns the Saturday into a workday
/// let store = CalendarExceptionStore::from_records(vec![
///     CalendarExceptionRecord::makeup_workday(saturday),
/// ]);
/// assert_eq!(classify(saturday, &schedule, &store), DayClassification::MakeupWorkday);
/// ```
pub fn classify(
    date: NaiveDate,
    schedule: &ScheduleConfig,
    exceptions: &CalendarExceptionStore,
) -> DayClassification {
    let ctx = DayContext {
        date,
        schedule,
        exception: exceptions.get(date),
    };
    classify_with(&ctx, CLASSIFICATION_RULES)
}

/// Runs an arbitrary rule table against a context.
pub fn classify_with(ctx: &DayContext<'_>, rules: &[ClassificationRule]) -> DayClassification {
    rules
        .iter()
        .find_map(|rule| (rule.apply)(ctx))
        .unwrap_or(DayClassification::Workday)
}
