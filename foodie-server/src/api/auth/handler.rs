//! Customer Auth Handlers

use axum::{Json, extract::State};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{AuthStatus, LoginRequest, SessionUser, SignupRequest};

use crate::auth::{Session, hash_password, verify_password};
use crate::api::extract::ValidJson;
use crate::core::ServerState;
use crate::db::repository::{RepoError, user};

const MIN_PASSWORD_LEN: usize = 6;

fn require(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}

/// POST /api/auth/signup - register and sign in
pub async fn signup(
    State(state): State<ServerState>,
    session: Session,
    ValidJson(req): ValidJson<SignupRequest>,
) -> AppResult<Json<AuthStatus>> {
    require(&req.name, "name")?;
    require(&req.email, "email")?;
    require(&req.phone, "phone")?;
    require(&req.password, "password")?;
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let email = req.email.trim();
    if user::email_exists(&state.pool, email).await? {
        return Err(AppError::new(ErrorCode::EmailAlreadyRegistered));
    }

    let hash = hash_password(&req.password).map_err(|e| {
        tracing::error!(error = %e, "Password hashing failed");
        AppError::internal("Failed to create account")
    })?;

    let created = match user::create(&state.pool, req.name.trim(), email, req.phone.trim(), &hash).await {
        Ok(created) => created,
        // Lost a race with a concurrent signup for the same email
        Err(RepoError::Duplicate(_)) => return Err(AppError::new(ErrorCode::EmailAlreadyRegistered)),
        Err(e) => return Err(e.into()),
    };

    let session_user = SessionUser {
        id: created.id,
        name: created.name,
    };
    session.set_user(session_user.clone());
    tracing::info!(user_id = session_user.id, "Customer registered");

    Ok(Json(AuthStatus {
        authenticated: true,
        user: Some(session_user),
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    session: Session,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AppResult<Json<AuthStatus>> {
    require(&req.email, "email")?;
    require(&req.password, "password")?;

    let credentials = user::find_credentials(&state.pool, req.email.trim())
        .await?
        .filter(|c| verify_password(&req.password, &c.password_hash))
        .ok_or_else(|| {
            tracing::warn!("Customer login failed");
            AppError::invalid_credentials()
        })?;

    let session_user = SessionUser {
        id: credentials.id,
        name: credentials.name,
    };
    session.set_user(session_user.clone());
    tracing::info!(user_id = session_user.id, "Customer logged in");

    Ok(Json(AuthStatus {
        authenticated: true,
        user: Some(session_user),
    }))
}

/// POST /api/auth/logout
pub async fn logout(session: Session) -> Json<ApiResponse<()>> {
    session.destroy();
    Json(ApiResponse::ok_with_message("Logged out successfully"))
}

/// GET /api/auth/status
pub async fn status(session: Session) -> Json<AuthStatus> {
    let user = session.user();
    Json(AuthStatus {
        authenticated: user.is_some(),
        user,
    })
}
