//! Application state for the earnings ticker API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::{CalendarExceptionStore, ScheduleConfig};

/// Shared application state.
///
/// Holds the configuration loaded at startup. It is never mutated afterwards, so
/// handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The schedule loaded at startup, if any.
    pub fn schedule(&self) -> Option<&ScheduleConfig> {
        self.config.schedule()
    }

    /// The calendar exceptions loaded at startup.
    pub fn calendar(&self) -> &CalendarExceptionStore {
        self.config.calendar()
    }
}
