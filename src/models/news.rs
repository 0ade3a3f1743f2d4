//! News item model.

use serde::{Deserialize, Serialize};

/// A news entry shown in the media center.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    /// Display date as typed by the editor, e.g. "1 يناير 2025"
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    pub created_at: String,
}

/// Request body for publishing a news item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNewsItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
}
