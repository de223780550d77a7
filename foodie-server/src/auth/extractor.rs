//! Session extractors
//!
//! Handlers name the access level they need by taking one of these.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;
use shared::models::SessionUser;

use super::session::Session;
use crate::core::ServerState;

impl FromRequestParts<ServerState> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            tracing::error!(uri = %parts.uri, "Session middleware not installed");
            AppError::internal("Session unavailable")
        })
    }
}

/// Signed-in customer; 401 otherwise
#[derive(Debug, Clone)]
pub struct CurrentCustomer(pub SessionUser);

impl FromRequestParts<ServerState> for CurrentCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        match session.user() {
            Some(user) => Ok(CurrentCustomer(user)),
            None => Err(AppError::not_authenticated()),
        }
    }
}

/// Admin console session; 401 otherwise
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl FromRequestParts<ServerState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        if !session.is_admin() {
            tracing::warn!(uri = %parts.uri, "Admin route accessed without admin session");
            return Err(AppError::admin_required());
        }
        Ok(AdminSession(session))
    }
}
