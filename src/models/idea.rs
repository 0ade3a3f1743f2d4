//! Idea suggestion model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: i64,
    pub name: String,
    pub idea: String,
    /// How the citizen suggests carrying the idea out
    pub implementation: String,
    pub created_at: String,
}

/// Request body from the public idea form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub idea: String,
    #[serde(default)]
    pub implementation: String,
}
