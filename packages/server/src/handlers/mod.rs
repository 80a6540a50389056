pub mod pages;
pub mod student;

use crate::error::AppError;

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("The requested resource could not be found.".into())
}
