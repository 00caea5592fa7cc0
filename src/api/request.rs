//! Request types for the earnings ticker API.
//!
//! Every request may carry its own `schedule`. When it is omitted the schedule
//! loaded at startup is used.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::DEFAULT_HORIZON_DAYS;
use crate::models::ScheduleConfig;

/// Request body for the `/earnings` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsRequest {
    /// The local wall-clock instant to evaluate.
    pub now: NaiveDateTime,
    /// Schedule override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

/// Request body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// The date to classify.
    pub date: NaiveDate,
    /// Schedule override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

/// Request body for the `/workdays` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkdaysRequest {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Schedule override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

/// Request body for the `/rest-days` and `/rest-days/next` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestDaysRequest {
    /// The day the search starts from.
    pub today: NaiveDate,
    /// How many days ahead to look.
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
    /// Schedule override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}
