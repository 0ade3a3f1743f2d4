//! Failures surfaced by the API.
//!
//! Every handler error becomes `{ "success": false, "error": "<message>", "code": "<CODE>" }`.
//! The site and the admin panel only read `error`; `code` is for scripts and tests.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Values of the envelope's `code` field.
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

#[derive(Debug)]
pub enum AppError {
    /// Missing or rejected admin credentials
    Unauthorized(String),
    /// Unknown route with no site bundle to fall back to
    NotFound(String),
    /// A required field was missing or blank
    Validation(String),
    /// Store failure
    Database(String),
    /// Stored JSON that fails to (de)serialize, or a session lifetime out of range
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Text shown to the admin user in the panel's alert.
    pub fn message(&self) -> &str {
        match self {
            AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("SQLite error: {:?}", err);
        AppError::Database(format!("Store unavailable: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Stored record JSON error: {:?}", err);
        AppError::Internal(format!("Stored record JSON error: {}", err))
    }
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: error.message().to_string(),
            code: error.error_code().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_keeps_error_as_string() {
        let body = serde_json::to_value(ErrorResponse::new(&AppError::Validation(
            "title is required".into(),
        )))
        .unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "title is required");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[test]
    fn test_every_kind_maps_to_a_code() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cases = [
            (AppError::Unauthorized("x".into()), "UNAUTHORIZED"),
            (AppError::NotFound("x".into()), "NOT_FOUND"),
            (AppError::Validation("x".into()), "VALIDATION_ERROR"),
            (AppError::Database("x".into()), "DATABASE_ERROR"),
            (AppError::from(json_err), "INTERNAL_ERROR"),
        ];

        for (err, code) in cases {
            assert_eq!(err.error_code(), code);
            assert!(err.to_string().starts_with(code));
        }
    }
}
