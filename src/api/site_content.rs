//! Site content API endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use super::{success, ApiResult, Done};
use crate::models::SiteContent;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SiteContentPayload {
    pub content: SiteContent,
}

/// GET /site-content - The editable page copy, or the built-in default.
pub async fn get_site_content(State(state): State<AppState>) -> ApiResult<SiteContentPayload> {
    let content = state.repo.get_site_content().await?;
    success(SiteContentPayload { content })
}

/// POST /site-content - Replace the page copy wholesale.
pub async fn save_site_content(
    State(state): State<AppState>,
    Json(content): Json<SiteContent>,
) -> ApiResult<Done> {
    state.repo.set_site_content(&content).await?;
    tracing::info!("Site content replaced");
    success(Done {})
}
