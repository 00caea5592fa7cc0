//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the user's schedule
//! and the holiday feed data from a configuration directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalendarExceptionRecord, CalendarExceptionStore, DataStatus, HolidayFeedResponse,
    ScheduleConfig,
};

/// File name of the schedule inside a configuration directory.
pub const SCHEDULE_FILE: &str = "schedule.yaml";
/// Directory holding one holiday feed response per year.
pub const HOLIDAYS_DIR: &str = "holidays";

/// Loads and provides access to the engine's configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml       # The user's schedule (optional)
/// └── holidays/
///     ├── 2026.json       # Holiday feed response for 2026
///     └── 2027.json
/// ```
///
/// A missing `schedule.yaml` leaves the engine unconfigured. Missing or broken
/// holiday files are logged and skipped; classification then falls back to the
/// weekly schedule and the store reports [`DataStatus::Unavailable`].
///
/// # Example
///
/// ```no_run
/// use earnings_ticker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("{} calendar exceptions", loader.calendar().len());
/// # Ok::<(), earnings_ticker::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: Option<ScheduleConfig>,
    calendar: CalendarExceptionStore,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if the directory does not exist or `schedule.yaml`
    /// exists but cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(EngineError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let schedule = Self::load_schedule(&path.join(SCHEDULE_FILE))?;
        let calendar = Self::load_holidays(&path.join(HOLIDAYS_DIR));

        info!(
            path = %path.display(),
            configured = schedule.as_ref().is_some_and(ScheduleConfig::is_configured),
            exceptions = calendar.len(),
            holiday_data = ?calendar.status(),
            "Configuration loaded"
        );

        Ok(Self { schedule, calendar })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(schedule: Option<ScheduleConfig>, calendar: CalendarExceptionStore) -> Self {
        Self { schedule, calendar }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn load_schedule(path: &Path) -> EngineResult<Option<ScheduleConfig>> {
        if !path.exists() {
            info!(path = %path.display(), "No schedule file, engine is not configured");
            return Ok(None);
        }
        let schedule: ScheduleConfig = Self::load_yaml(path)?;
        if let Err(err) = schedule.validate() {
            warn!(path = %path.display(), error = %err, "Schedule loaded but not usable");
        }
        Ok(Some(schedule))
    }

    /// Reads one holiday feed response and converts it into exception records.
    pub fn load_feed_file(path: &Path) -> EngineResult<Vec<CalendarExceptionRecord>> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let response: HolidayFeedResponse =
            serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        response.into_records()
    }

    /// Loads every `*.json` feed response in the holidays directory.
    fn load_holidays(dir: &Path) -> CalendarExceptionStore {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "Holiday data unavailable");
                return CalendarExceptionStore::empty();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut store = CalendarExceptionStore::loading();
        let mut loaded_files = 0;
        for file in &files {
            match Self::load_feed_file(file) {
                Ok(records) => {
                    store.extend(records);
                    loaded_files += 1;
                }
                Err(err) => {
                    warn!(path = %file.display(), error = %err, "Skipping holiday feed file");
                }
            }
        }

        let status = if loaded_files > 0 {
            DataStatus::Loaded
        } else {
            DataStatus::Unavailable
        };
        store.with_status(status)
    }

    /// The user's schedule, if one was configured.
    pub fn schedule(&self) -> Option<&ScheduleConfig> {
        self.schedule.as_ref()
    }

    /// The calendar exceptions.
    pub fn calendar(&self) -> &CalendarExceptionStore {
        &self.calendar
    }
}
