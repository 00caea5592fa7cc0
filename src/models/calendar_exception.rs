//! Calendar exception records and the in-memory store that holds them.
//!
//! Exception records come from an external holiday feed and override the user's
//! weekly schedule on specific dates: statutory holidays turn a workday into a
//! paid day off, makeup workdays turn a conventional day off into a workday.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

/// Name used for statutory holidays the feed does not name.
pub const DEFAULT_HOLIDAY_NAME: &str = "Statutory Holiday";

/// A per-date override of the weekly schedule.
///
/// # Example
///
/// ```
/// use earnings_ticker::models::CalendarExceptionRecord;
/// use chrono::NaiveDate;
///
/// let new_year = CalendarExceptionRecord::statutory_holiday(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     "元旦",
/// );
/// assert!(new_year.qualifies_as_statutory_holiday());
/// assert_eq!(new_year.holiday_name(), "元旦");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarExceptionRecord {
    /// The date this record applies to.
    pub date: NaiveDate,
    /// The policy declares this date a day off.
    #[serde(default)]
    pub is_off_by_policy: bool,
    /// The policy declares this date a workday that would otherwise be off.
    #[serde(default)]
    pub is_makeup_workday: bool,
    /// The day off is a government-designated statutory holiday.
    #[serde(default)]
    pub is_statutory: bool,
    /// The festival this date belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival_name: Option<String>,
}

impl CalendarExceptionRecord {
    /// Creates a statutory day off with a festival name.
    pub fn statutory_holiday(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            is_off_by_policy: true,
            is_makeup_workday: false,
            is_statutory: true,
            festival_name: Some(name.into()),
        }
    }

    /// Creates a makeup workday.
    pub fn makeup_workday(date: NaiveDate) -> Self {
        Self {
            date,
            is_off_by_policy: false,
            is_makeup_workday: true,
            is_statutory: false,
            festival_name: None,
        }
    }

    /// Returns `true` when this record makes its date a statutory holiday:
    /// the date is off by policy and is either statutory or a named festival.
    pub fn qualifies_as_statutory_holiday(&self) -> bool {
        self.is_off_by_policy && (self.is_statutory || self.festival_name.is_some())
    }

    /// The display name of the holiday, falling back to [`DEFAULT_HOLIDAY_NAME`].
    pub fn holiday_name(&self) -> &str {
        self.festival_name.as_deref().unwrap_or(DEFAULT_HOLIDAY_NAME)
    }

    /// Rejects records that are both a day off and a makeup workday.
    pub fn check_consistency(&self) -> EngineResult<()> {
        if self.is_off_by_policy && self.is_makeup_workday {
            return Err(EngineError::AmbiguousException { date: self.date });
        }
        Ok(())
    }
}

/// How complete the holiday data behind a store is.
///
/// Anything other than [`DataStatus::Loaded`] means classification is running on
/// the weekly schedule alone (or on a partial calendar), which renderers should
/// surface as reduced fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataStatus {
    /// The feed has not delivered data yet.
    Loading,
    /// Feed data is loaded.
    Loaded,
    /// The feed failed or was never consulted.
    #[default]
    Unavailable,
}

impl DataStatus {
    /// Returns `true` unless holiday data is fully loaded.
    pub fn is_degraded(&self) -> bool {
        !matches!(self, DataStatus::Loaded)
    }
}

/// Read-only lookup of calendar exceptions by date.
///
/// The store tolerates being empty; a missing record always means "no exception".
///
/// # Example
///
/// ```
/// use earnings_ticker::models::{CalendarExceptionRecord, CalendarExceptionStore, DataStatus};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
/// let store = CalendarExceptionStore::from_records(vec![
///     CalendarExceptionRecord::statutory_holiday(date, "国庆节"),
/// ]);
///
/// assert_eq!(store.status(), DataStatus::Loaded);
/// assert!(store.get(date).is_some());
/// assert!(store.get(date.succ_opt().unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarExceptionStore {
    records: HashMap<NaiveDate, CalendarExceptionRecord>,
    status: DataStatus,
}

impl CalendarExceptionStore {
    /// An empty store with no holiday data available.
    pub fn empty() -> Self {
        Self::default()
    }

    /// An empty store waiting for the feed.
    pub fn loading() -> Self {
        Self {
            records: HashMap::new(),
            status: DataStatus::Loading,
        }
    }

    /// Builds a loaded store from records.
    ///
    /// Ambiguous records are logged and dropped. When two records share a date
    /// the later one wins.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CalendarExceptionRecord>,
    {
        let mut store = Self {
            records: HashMap::new(),
            status: DataStatus::Loaded,
        };
        store.extend(records);
        store
    }

    /// Inserts a single record, returning `false` if it was rejected.
    pub fn insert(&mut self, record: CalendarExceptionRecord) -> bool {
        if let Err(err) = record.check_consistency() {
            warn!(date = %record.date, error = %err, "Dropping ambiguous calendar exception");
            return false;
        }
        if let Some(previous) = self.records.insert(record.date, record) {
            warn!(date = %previous.date, "Duplicate calendar exception replaced");
        }
        true
    }

    /// Inserts every record, returning how many were accepted.
    pub fn extend<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = CalendarExceptionRecord>,
    {
        let accepted = records
            .into_iter()
            .map(|record| self.insert(record))
            .filter(|&ok| ok)
            .count();
        debug!(accepted, total = self.records.len(), "Calendar exceptions added");
        accepted
    }

    /// Looks up the record for an exact date.
    pub fn get(&self, date: NaiveDate) -> Option<&CalendarExceptionRecord> {
        self.records.get(&date)
    }

    /// The availability of the data behind this store.
    pub fn status(&self) -> DataStatus {
        self.status
    }

    /// Overrides the availability status.
    pub fn set_status(&mut self, status: DataStatus) {
        self.status = status;
    }

    /// Returns the store with a different availability status.
    pub fn with_status(mut self, status: DataStatus) -> Self {
        self.status = status;
        self
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, sorted by date.
    pub fn records(&self) -> Vec<&CalendarExceptionRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by_key(|r| r.date);
        records
    }
}
