//! Response types for the earnings ticker API.
//!
//! This module defines the success bodies that are not plain model types, the
//! error body and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::MonthlyWorkdays;
use crate::error::EngineError;
use crate::models::DayClassification;

/// Response body for the `/classify` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// The date that was classified.
    pub date: NaiveDate,
    /// Its classification.
    pub classification: DayClassification,
}

/// Response body for the `/workdays` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdaysResponse {
    /// The per-classification tally.
    #[serde(flatten)]
    pub breakdown: MonthlyWorkdays,
    /// Days on which pay accrues.
    pub effective: u32,
}

impl From<MonthlyWorkdays> for WorkdaysResponse {
    fn from(breakdown: MonthlyWorkdays) -> Self {
        Self {
            effective: breakdown.effective(),
            breakdown,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error returned when no schedule is available.
    pub fn not_configured() -> Self {
        Self::with_details(
            "NOT_CONFIGURED",
            "No schedule configured",
            "Send a schedule with the request or configure one at startup",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidSchedule { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_SCHEDULE",
                    format!("Invalid schedule field '{}': {}", field, message),
                    "The schedule cannot be used for calculation",
                ))
            }
            EngineError::InvalidDate { year, month } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid calendar month {}-{:02}", year, month),
                    "Month must be between 1 and 12",
                ))
            }
            EngineError::FeedError { code, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "FEED_ERROR",
                    "Holiday feed error",
                    format!("Feed returned code {}: {}", code, message),
                ),
            },
            EngineError::AmbiguousException { date } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "AMBIGUOUS_EXCEPTION",
                    format!("Ambiguous calendar exception on {}", date),
                    "A date cannot be both a day off and a makeup workday",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_not_configured_error() {
        let error = ApiError::not_configured();
        assert_eq!(error.code, "NOT_CONFIGURED");
        assert!(error.details.is_some());
    }

    #[test]
    fn test_invalid_schedule_maps_to_bad_request() {
        let engine_error = EngineError::InvalidSchedule {
            field: "monthly_salary".to_string(),
            message: "must be greater than zero".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_SCHEDULE");
        assert!(api_error.error.message.contains("monthly_salary"));
    }

    #[test]
    fn test_invalid_date_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidDate {
            year: 2026,
            month: 13,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.message, "Invalid calendar month 2026-13");
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "schedule.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_workdays_response_is_flat() {
        let response = WorkdaysResponse::from(MonthlyWorkdays {
            days_in_month: 30,
            workdays: 21,
            makeup_workdays: 1,
            statutory_holidays: 1,
            rest_days: 7,
        });
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["effective"], 22);
        assert_eq!(json["days_in_month"], 30);
        assert_eq!(json["makeup_workdays"], 1);
    }
}
