use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use super::body_rejection;
use crate::error::AppError;

/// `Json<T>` for the student API: a body that is not valid JSON, has the wrong
/// content type or misses a field becomes a `400 VALIDATION_ERROR`.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(payload)| AppJson(payload))
            .map_err(|e| body_rejection("JSON", e.status(), e.body_text()))
    }
}
