//! HTTP request handlers for the earnings ticker API.
//!
//! Each endpoint exposes one engine operation. Bodies are JSON in both
//! directions and every request is logged with a correlation id.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify, month_breakdown, next_rest_day, tick, upcoming_rest_days};
use crate::models::ScheduleConfig;

use super::request::{ClassifyRequest, EarningsRequest, RestDaysRequest, WorkdaysRequest};
use super::response::{ApiError, ApiErrorResponse, ClassifyResponse, WorkdaysResponse};
use super::state::AppState;

/// Largest lookahead a rest-day request may ask for.
pub const MAX_HORIZON_DAYS: u32 = 730;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/earnings", post(earnings_handler))
        .route("/classify", post(classify_handler))
        .route("/workdays", post(workdays_handler))
        .route("/rest-days", post(rest_days_handler))
        .route("/rest-days/next", post(next_rest_day_handler))
        .with_state(state)
}

/// Unwraps a JSON body, turning extractor rejections into API errors.
fn parse_payload<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(request)) => return Ok(request),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

/// Picks the request's schedule, else the startup schedule, and validates it.
fn resolve_schedule(
    state: &AppState,
    requested: Option<ScheduleConfig>,
) -> Result<ScheduleConfig, ApiErrorResponse> {
    let schedule = requested
        .or_else(|| state.schedule().cloned())
        .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::not_configured()))?;
    schedule.validate()?;
    Ok(schedule)
}

fn check_horizon(horizon_days: u32) -> Result<(), ApiErrorResponse> {
    if horizon_days > MAX_HORIZON_DAYS {
        return Err(ApiErrorResponse::bad_request(ApiError::validation_error(
            format!(
                "horizon_days must be at most {}, got {}",
                MAX_HORIZON_DAYS, horizon_days
            ),
        )));
    }
    Ok(())
}

fn respond<T: Serialize>(result: Result<T, ApiErrorResponse>, correlation_id: Uuid) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                status = %err.status,
                code = %err.error.code,
                message = %err.error.message,
                "Request failed"
            );
            err.into_response()
        }
    }
}

/// Handler for POST /earnings.
///
/// Always answers 200 for a well-formed body: an unusable schedule is reported
/// as the `not_configured` phase of the returned state.
async fn earnings_handler(
    State(state): State<AppState>,
    payload: Result<Json<EarningsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing earnings request");

    let result = parse_payload(payload, correlation_id).map(|request| {
        let schedule = request
            .schedule
            .or_else(|| state.schedule().cloned())
            .unwrap_or_default();

        let start_time = Instant::now();
        let earnings = tick(request.now, &schedule, state.calendar());
        info!(
            correlation_id = %correlation_id,
            now = %request.now,
            phase = ?earnings.phase,
            amount = %earnings.amount_accrued,
            duration_us = start_time.elapsed().as_micros(),
            "Earnings computed"
        );
        earnings
    });
    respond(result, correlation_id)
}

/// Handler for POST /classify.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classify request");

    let result = parse_payload(payload, correlation_id).and_then(|request| {
        let schedule = resolve_schedule(&state, request.schedule)?;
        let classification = classify(request.date, &schedule, state.calendar());
        info!(
            correlation_id = %correlation_id,
            date = %request.date,
            classification = %classification,
            "Date classified"
        );
        Ok(ClassifyResponse {
            date: request.date,
            classification,
        })
    });
    respond(result, correlation_id)
}

/// Handler for POST /workdays.
async fn workdays_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkdaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing workdays request");

    let result = parse_payload(payload, correlation_id).and_then(|request| {
        let schedule = resolve_schedule(&state, request.schedule)?;
        let breakdown = month_breakdown(request.year, request.month, &schedule, state.calendar())?;
        info!(
            correlation_id = %correlation_id,
            year = request.year,
            month = request.month,
            effective = breakdown.effective(),
            "Workdays counted"
        );
        Ok(WorkdaysResponse::from(breakdown))
    });
    respond(result, correlation_id)
}

/// Handler for POST /rest-days/next.
///
/// Answers `null` when no day off falls within the horizon.
async fn next_rest_day_handler(
    State(state): State<AppState>,
    payload: Result<Json<RestDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing next rest day request");

    let result = parse_payload(payload, correlation_id).and_then(|request| {
        check_horizon(request.horizon_days)?;
        let schedule = resolve_schedule(&state, request.schedule)?;
        let next = next_rest_day(
            request.today,
            &schedule,
            state.calendar(),
            request.horizon_days,
        );
        info!(
            correlation_id = %correlation_id,
            today = %request.today,
            found = next.is_some(),
            days_until = next.as_ref().map(|day| day.days_until),
            "Next rest day searched"
        );
        Ok(next)
    });
    respond(result, correlation_id)
}

/// Handler for POST /rest-days.
async fn rest_days_handler(
    State(state): State<AppState>,
    payload: Result<Json<RestDaysRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing rest days request");

    let result = parse_payload(payload, correlation_id).and_then(|request| {
        check_horizon(request.horizon_days)?;
        let schedule = resolve_schedule(&state, request.schedule)?;
        let days = upcoming_rest_days(
            request.today,
            &schedule,
            state.calendar(),
            request.horizon_days,
        );
        info!(
            correlation_id = %correlation_id,
            today = %request.today,
            count = days.len(),
            "Rest days listed"
        );
        Ok(days)
    });
    respond(result, correlation_id)
}
