//! The classification of a calendar day.

use serde::{Deserialize, Serialize};

/// What kind of day a date is for the user.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::DayClassification;
///
/// assert!(DayClassification::MakeupWorkday.is_workday());
/// assert!(DayClassification::WeekendRest.is_rest_day());
/// assert_eq!(
///     DayClassification::StatutoryHoliday { name: "元旦".to_string() }.to_string(),
///     "元旦"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayClassification {
    /// Government-designated paid day off. No accrual.
    StatutoryHoliday {
        /// The holiday's name.
        name: String,
    },
    /// A conventional day off mandated as a workday.
    MakeupWorkday,
    /// Saturday or Sunday outside the user's workdays.
    WeekendRest,
    /// Any other weekday outside the user's workdays.
    ScheduledRest,
    /// A regular, accrual-eligible workday.
    Workday,
}

impl DayClassification {
    /// Returns `true` for days on which pay accrues.
    pub fn is_workday(&self) -> bool {
        matches!(
            self,
            DayClassification::Workday | DayClassification::MakeupWorkday
        )
    }

    /// Returns `true` for ordinary rest days (weekend or scheduled rest).
    pub fn is_rest_day(&self) -> bool {
        matches!(
            self,
            DayClassification::WeekendRest | DayClassification::ScheduledRest
        )
    }

    /// Returns `true` for statutory holidays.
    pub fn is_statutory_holiday(&self) -> bool {
        matches!(self, DayClassification::StatutoryHoliday { .. })
    }
}

impl std::fmt::Display for DayClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClassification::StatutoryHoliday { name } => write!(f, "{}", name),
            DayClassification::MakeupWorkday => write!(f, "Makeup workday"),
            DayClassification::WeekendRest => write!(f, "Weekend"),
            DayClassification::ScheduledRest => write!(f, "Rest day"),
            DayClassification::Workday => write!(f, "Workday"),
        }
    }
}
