pub mod form;
pub mod json;

use axum::http::StatusCode;
use tracing::debug;

use crate::error::AppError;

/// Map an extractor rejection to a validation error naming the body `format`.
fn body_rejection(format: &'static str, status: StatusCode, detail: String) -> AppError {
    debug!(format, %status, %detail, "Rejected request body");
    AppError::Validation(format!("Malformed {format} body: {detail}"))
}
