//! Volunteer signup model.

use serde::{Deserialize, Serialize};

/// A citizen who signed up to volunteer. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub district: String,
    /// Field the volunteer wants to help in
    pub area: String,
    pub created_at: String,
}

/// Request body from the public volunteer form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVolunteer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub area: String,
}
