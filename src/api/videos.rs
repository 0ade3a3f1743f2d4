//! Video API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{require, success, ApiResult, Done};
use crate::db::VIDEO_PREFIX;
use crate::models::{NewVideo, Video};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct VideoListPayload {
    pub videos: Vec<Video>,
}

#[derive(Debug, Serialize)]
pub struct VideoPayload {
    pub video: Video,
}

/// GET /videos - All videos, most recently added first.
pub async fn list_videos(State(state): State<AppState>) -> ApiResult<VideoListPayload> {
    let videos = state.repo.list_videos().await?;
    success(VideoListPayload { videos })
}

/// POST /videos - Add a video.
pub async fn create_video(
    State(state): State<AppState>,
    Json(request): Json<NewVideo>,
) -> ApiResult<VideoPayload> {
    require("title", &request.title)?;
    require("url", &request.url)?;

    let video = state.repo.create_video(&request).await?;
    tracing::info!(id = %video.id, "Video created");
    success(VideoPayload { video })
}

/// DELETE /videos/{id} - Remove a video. Unknown ids succeed.
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Done> {
    if id.starts_with(VIDEO_PREFIX) {
        state.repo.delete_video(&id).await?;
        tracing::info!(id = %id, "Video deleted");
    }
    success(Done {})
}
