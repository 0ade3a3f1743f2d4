//! Article API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{require, success, ApiResult, Done};
use crate::db::ARTICLE_PREFIX;
use crate::models::{Article, NewArticle};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ArticleListPayload {
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub struct ArticlePayload {
    pub article: Article,
}

/// GET /articles - All articles, newest display date first.
pub async fn list_articles(State(state): State<AppState>) -> ApiResult<ArticleListPayload> {
    let articles = state.repo.list_articles().await?;
    success(ArticleListPayload { articles })
}

/// POST /articles - Publish an article.
pub async fn create_article(
    State(state): State<AppState>,
    Json(request): Json<NewArticle>,
) -> ApiResult<ArticlePayload> {
    require("title", &request.title)?;
    require("date", &request.date)?;

    let article = state.repo.create_article(&request).await?;
    tracing::info!(id = %article.id, "Article created");
    success(ArticlePayload { article })
}

/// DELETE /articles/{id} - Remove an article. Unknown ids succeed.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Done> {
    if id.starts_with(ARTICLE_PREFIX) {
        state.repo.delete_article(&id).await?;
        tracing::info!(id = %id, "Article deleted");
    }
    success(Done {})
}
