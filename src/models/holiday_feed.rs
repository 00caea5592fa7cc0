//! Wire schema of the public holiday feed.
//!
//! The feed answers one request per year with a JSON envelope whose `data`
//! array describes every date that deviates from the conventional week. Only the
//! parsing lives here; fetching is the caller's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::CalendarExceptionRecord;

/// Feed status for a date that is worked.
pub const FEED_STATUS_WORK: u8 = 1;
/// Feed status for a date that is off.
pub const FEED_STATUS_OFF: u8 = 2;
/// Feed envelope code for success.
pub const FEED_CODE_OK: i32 = 0;

/// One date from the holiday feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayFeedEntry {
    /// The date described.
    pub date: NaiveDate,
    /// Lunar calendar date, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_date: Option<String>,
    /// ISO weekday, 1 = Monday .. 7 = Sunday, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_day: Option<u8>,
    /// 1 = work, 2 = day off.
    pub status: u8,
    /// Festival name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival: Option<String>,
    /// 1 when the date is a makeup workday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_day: Option<u8>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 1 when the day off is statutory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statutory: Option<u8>,
}

impl From<&HolidayFeedEntry> for CalendarExceptionRecord {
    fn from(entry: &HolidayFeedEntry) -> Self {
        CalendarExceptionRecord {
            date: entry.date,
            is_off_by_policy: entry.status == FEED_STATUS_OFF,
            is_makeup_workday: entry.status == FEED_STATUS_WORK && entry.bad_day == Some(1),
            is_statutory: entry.statutory.is_some_and(|s| s != 0),
            festival_name: entry
                .festival
                .as_ref()
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        }
    }
}

/// The feed's response envelope.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::HolidayFeedResponse;
///
/// let json = r#"{
///     "code": 0,
///     "msg": "ok",
///     "data": [
///         {"date": "2026-01-01", "lunarDate": "十一月十三", "weekDay": 4,
///          "status": 2, "festival": "元旦", "statutory": 1}
///     ]
/// }"#;
/// let response: HolidayFeedResponse = serde_json::from_str(json).unwrap();
/// let records = response.into_records().unwrap();
/// assert_eq!(records.len(), 1);
/// assert!(records[0].qualifies_as_statutory_holiday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayFeedResponse {
    /// 0 on success.
    pub code: i32,
    /// The described dates.
    #[serde(default)]
    pub data: Vec<HolidayFeedEntry>,
    /// Status message.
    #[serde(default)]
    pub msg: String,
}

impl HolidayFeedResponse {
    /// Converts a successful response into exception records.
    ///
    /// Returns [`EngineError::FeedError`] when the envelope reports a failure.
    pub fn into_records(self) -> EngineResult<Vec<CalendarExceptionRecord>> {
        if self.code != FEED_CODE_OK {
            return Err(EngineError::FeedError {
                code: self.code,
                message: self.msg,
            });
        }
        Ok(self.data.iter().map(CalendarExceptionRecord::from).collect())
    }
}
