//! Complaint ticket model.

use serde::{Deserialize, Serialize};

/// Status every ticket is created with. No code path moves a ticket out of it.
pub const TICKET_STATUS_PENDING: &str = "pending";

/// A complaint filed through the public form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    pub district: String,
    pub problem_type: String,
    pub details: String,
    /// `TICKET-` followed by six digits, quoted back to the citizen
    pub ticket_number: String,
    pub status: String,
    pub created_at: String,
}

/// Request body from the public complaint form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub problem_type: String,
    #[serde(default)]
    pub details: String,
}
