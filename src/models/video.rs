//! Video model.

use serde::{Deserialize, Serialize};

/// An embedded campaign video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Vimeo or YouTube link; the public page derives the embed URL
    pub url: String,
    #[serde(default)]
    pub duration: String,
    pub created_at: String,
}

/// Request body for adding a video.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub duration: String,
}
