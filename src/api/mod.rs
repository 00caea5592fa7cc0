//! HTTP API module for the earnings ticker engine.
//!
//! This module exposes classification, workday counting, the rest-day finder
//! and the per-tick earnings calculation as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_HORIZON_DAYS, create_router};
pub use request::{ClassifyRequest, EarningsRequest, RestDaysRequest, WorkdaysRequest};
pub use response::{ApiError, ApiErrorResponse, ClassifyResponse, WorkdaysResponse};
pub use state::AppState;
