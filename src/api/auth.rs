//! Admin login, session check and logout.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::Duration;
use serde::Serialize;

use super::{success, ApiResult, Done};
use crate::auth::{bearer_token, constant_time_compare};
use crate::errors::AppError;
use crate::models::{AdminSession, LoginRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub authenticated: bool,
}

/// POST /auth/login - Exchange the admin passphrase for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<AdminSession> {
    if let Some(expected) = state.config.admin_password.as_deref() {
        if !constant_time_compare(&request.password, expected) {
            tracing::warn!("Rejected admin login attempt");
            return Err(AppError::Unauthorized("Incorrect password".to_string()));
        }
    }

    if let Err(e) = state.repo.purge_expired_sessions().await {
        tracing::warn!("Failed to purge expired sessions: {}", e);
    }

    let ttl = Duration::try_hours(state.config.session_ttl_hours)
        .ok_or_else(|| AppError::Internal("Session lifetime out of range".to_string()))?;
    let session = state.repo.create_session(ttl).await?;
    tracing::info!(expires_at = %session.expires_at, "Admin session issued");
    success(session)
}

/// GET /auth/session - Confirms the presented token is still valid.
///
/// Sits behind the admin gate, so reaching the handler means it is.
pub async fn session_status() -> ApiResult<SessionStatus> {
    success(SessionStatus {
        authenticated: true,
    })
}

/// POST /auth/logout - Revoke the presented session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Done> {
    if let Some(token) = bearer_token(&headers) {
        state.repo.delete_session(token).await?;
    }
    success(Done {})
}
