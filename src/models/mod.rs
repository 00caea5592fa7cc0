//! Core data models for the earnings ticker engine.
//!
//! This module contains the schedule supplied by the user, the calendar exception
//! records supplied by the holiday feed, and the derived classification and
//! earnings state.

mod calendar_exception;
mod day_classification;
mod earnings_state;
mod holiday_feed;
mod schedule;

pub use calendar_exception::{
    CalendarExceptionRecord, CalendarExceptionStore, DEFAULT_HOLIDAY_NAME, DataStatus,
};
pub use day_classification::DayClassification;
pub use earnings_state::{EarningsState, StatusReason, WorkPhase};
pub use holiday_feed::{
    FEED_CODE_OK, FEED_STATUS_OFF, FEED_STATUS_WORK, HolidayFeedEntry, HolidayFeedResponse,
};
pub use schedule::{SATURDAY, SUNDAY, ScheduleConfig};
