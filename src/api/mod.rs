//! REST API module.
//!
//! Handlers for the public site, the contact forms and the admin panel. Every
//! response is `{ "success": bool, ...payload }`.

mod articles;
mod auth;
mod news;
mod site_content;
mod submissions;
mod videos;

pub use articles::*;
pub use auth::*;
pub use news::*;
pub use site_content::*;
pub use submissions::*;
pub use videos::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// Success response envelope. The payload's fields sit next to `success`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Payload for operations that return nothing beyond `success`.
#[derive(Debug, Serialize)]
pub struct Done {}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(payload: T) -> ApiResult<T> {
    Ok(ApiResponse::new(payload))
}

/// Reject blank required fields.
pub(crate) fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        news: Vec<u32>,
    }

    #[test]
    fn test_envelope_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::new(Payload { news: vec![1, 2] })).unwrap();
        assert_eq!(body, serde_json::json!({ "success": true, "news": [1, 2] }));

        let body = serde_json::to_value(ApiResponse::new(Done {})).unwrap();
        assert_eq!(body, serde_json::json!({ "success": true }));
    }

    #[test]
    fn test_require() {
        assert!(require("title", "افتتاح").is_ok());
        let err = require("title", "   ").unwrap_err();
        assert_eq!(err.message(), "title is required");
    }
}
