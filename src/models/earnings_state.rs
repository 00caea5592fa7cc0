//! Earnings state models.
//!
//! This module contains the [`EarningsState`] produced on every clock tick and the
//! [`WorkPhase`] and [`StatusReason`] types that explain it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DataStatus, DayClassification};

/// Where the user stands in their working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPhase {
    /// The schedule failed validation; nothing is computed.
    NotConfigured,
    /// Today is not a workday.
    OffDay,
    /// Today is a workday but no pay rate can be derived.
    NoAccrualPossible,
    /// The shift has not started yet.
    BeforeShift,
    /// The shift is in progress.
    InShift,
    /// The shift is over.
    AfterShift,
}

/// Why the engine reports the state it does.
///
/// Renderers translate these into their own language; [`std::fmt::Display`]
/// gives the English message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusReason {
    /// The schedule is missing or invalid.
    NotConfigured {
        /// The validation failure.
        message: String,
    },
    /// Today is a statutory holiday.
    StatutoryHoliday {
        /// The holiday's name.
        name: String,
    },
    /// Today is a weekend day the user does not work.
    Weekend,
    /// Today is a weekday the user does not work.
    ScheduledRest,
    /// The month has no effective workdays or the daily hours are not positive.
    NoAccrualPossible,
    /// Before the shift start.
    BeforeShift,
    /// During the shift.
    InShift,
    /// After the shift end.
    AfterShift,
}

impl std::fmt::Display for StatusReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusReason::NotConfigured { message } => {
                write!(f, "Please set up your salary information ({})", message)
            }
            StatusReason::StatutoryHoliday { name } => write!(f, "Today is {}", name),
            StatusReason::Weekend => write!(f, "Day off today (weekend, per your schedule)"),
            StatusReason::ScheduledRest => {
                write!(f, "Day off today (not a workday in your schedule)")
            }
            StatusReason::NoAccrualPossible => {
                write!(f, "No valid workdays or work hours configured")
            }
            StatusReason::BeforeShift => write!(f, "Not work time yet"),
            StatusReason::InShift => write!(f, "Working hard..."),
            StatusReason::AfterShift => write!(f, "Work finished for today"),
        }
    }
}

/// The money earned so far today, recomputed on every tick.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::{DataStatus, EarningsState, StatusReason, WorkPhase};
/// use rust_decimal::Decimal;
///
/// let state = EarningsState::idle(
///     WorkPhase::OffDay,
///     StatusReason::Weekend,
///     None,
///     DataStatus::Loaded,
/// );
/// assert_eq!(state.amount_accrued, Decimal::ZERO);
/// assert!(!state.is_working());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsState {
    /// Pay accrued today.
    pub amount_accrued: Decimal,
    /// The current work phase.
    pub phase: WorkPhase,
    /// Why the state is what it is.
    pub reason: StatusReason,
    /// Today's classification, when the schedule was valid enough to classify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<DayClassification>,
    /// Whole seconds left until the shift ends, on workdays before the end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_until_shift_end: Option<i64>,
    /// Availability of the holiday data the classification was based on.
    pub holiday_data: DataStatus,
}

impl EarningsState {
    /// A state with nothing accrued.
    pub fn idle(
        phase: WorkPhase,
        reason: StatusReason,
        classification: Option<DayClassification>,
        holiday_data: DataStatus,
    ) -> Self {
        Self {
            amount_accrued: Decimal::ZERO,
            phase,
            reason,
            classification,
            seconds_until_shift_end: None,
            holiday_data,
        }
    }

    /// Returns `true` while the shift is in progress.
    pub fn is_working(&self) -> bool {
        self.phase == WorkPhase::InShift
    }

    /// The English status message.
    pub fn reason_message(&self) -> String {
        self.reason.to_string()
    }
}
