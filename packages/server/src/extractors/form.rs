use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use serde::de::DeserializeOwned;

use super::body_rejection;
use crate::error::AppError;

/// `Form<T>` for the HTML submission. Missing fields are left to the
/// validators; only an undecodable body is rejected here.
pub struct AppForm<T>(pub T);

impl<S, T> FromRequest<S> for AppForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Form::<T>::from_request(req, state)
            .await
            .map(|Form(fields)| AppForm(fields))
            .map_err(|e| body_rejection("form", e.status(), e.body_text()))
    }
}
