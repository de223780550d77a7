//! Request body extraction with errors in the API's own format

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use shared::error::AppError;

/// `Json<T>` whose rejection renders as a 400 `ValidationFailed` response
///
/// Unknown enum values (a time slot outside the closed set, an order status
/// nobody defined) are rejected here before a handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        }
    }
}
