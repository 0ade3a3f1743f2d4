//! News API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{require, success, ApiResult, Done};
use crate::db::NEWS_PREFIX;
use crate::models::{NewNewsItem, NewsItem};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NewsPayload<T: Serialize> {
    pub news: T,
}

/// GET /news - All news, newest display date first.
pub async fn list_news(State(state): State<AppState>) -> ApiResult<NewsPayload<Vec<NewsItem>>> {
    let news = state.repo.list_news().await?;
    success(NewsPayload { news })
}

/// POST /news - Publish a news item.
pub async fn create_news(
    State(state): State<AppState>,
    Json(request): Json<NewNewsItem>,
) -> ApiResult<NewsPayload<NewsItem>> {
    require("title", &request.title)?;
    require("date", &request.date)?;

    let news = state.repo.create_news(&request).await?;
    tracing::info!(id = %news.id, "News item created");
    success(NewsPayload { news })
}

/// DELETE /news/{id} - Remove a news item. Unknown ids succeed.
pub async fn delete_news(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Done> {
    // Ids outside the collection are treated as already absent
    if id.starts_with(NEWS_PREFIX) {
        state.repo.delete_news(&id).await?;
        tracing::info!(id = %id, "News item deleted");
    }
    success(Done {})
}
