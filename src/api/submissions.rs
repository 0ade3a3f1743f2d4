//! Contact form endpoints: volunteer signups, complaint tickets and ideas.
//!
//! Submitting is public; listing is for the admin panel. Records are append-only.

use axum::{extract::State, Json};
use serde::Serialize;

use super::{require, success, ApiResult};
use crate::models::{Idea, NewIdea, NewTicket, NewVolunteer, Ticket, Volunteer};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct VolunteerListPayload {
    pub volunteers: Vec<Volunteer>,
}

#[derive(Debug, Serialize)]
pub struct VolunteerPayload {
    pub volunteer: Volunteer,
}

#[derive(Debug, Serialize)]
pub struct TicketListPayload {
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Serialize)]
pub struct TicketPayload {
    pub ticket: Ticket,
}

#[derive(Debug, Serialize)]
pub struct IdeaListPayload {
    pub ideas: Vec<Idea>,
}

#[derive(Debug, Serialize)]
pub struct IdeaPayload {
    pub idea: Idea,
}

/// POST /volunteers - Sign up as a volunteer.
pub async fn create_volunteer(
    State(state): State<AppState>,
    Json(request): Json<NewVolunteer>,
) -> ApiResult<VolunteerPayload> {
    require("name", &request.name)?;
    require("phone", &request.phone)?;

    let volunteer = state.repo.create_volunteer(&request).await?;
    tracing::info!(id = volunteer.id, "Volunteer signup received");
    success(VolunteerPayload { volunteer })
}

/// GET /volunteers - All signups, newest first.
pub async fn list_volunteers(State(state): State<AppState>) -> ApiResult<VolunteerListPayload> {
    let volunteers = state.repo.list_volunteers().await?;
    success(VolunteerListPayload { volunteers })
}

/// POST /tickets - File a complaint. The response carries the ticket number.
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<NewTicket>,
) -> ApiResult<TicketPayload> {
    require("name", &request.name)?;
    require("details", &request.details)?;

    let ticket = state.repo.create_ticket(&request).await?;
    tracing::info!(id = ticket.id, ticket_number = %ticket.ticket_number, "Ticket filed");
    success(TicketPayload { ticket })
}

/// GET /tickets - All complaint tickets, newest first.
pub async fn list_tickets(State(state): State<AppState>) -> ApiResult<TicketListPayload> {
    let tickets = state.repo.list_tickets().await?;
    success(TicketListPayload { tickets })
}

/// POST /ideas - Suggest an idea.
pub async fn create_idea(
    State(state): State<AppState>,
    Json(request): Json<NewIdea>,
) -> ApiResult<IdeaPayload> {
    require("name", &request.name)?;
    require("idea", &request.idea)?;

    let idea = state.repo.create_idea(&request).await?;
    tracing::info!(id = idea.id, "Idea received");
    success(IdeaPayload { idea })
}

/// GET /ideas - All ideas, newest first.
pub async fn list_ideas(State(state): State<AppState>) -> ApiResult<IdeaListPayload> {
    let ideas = state.repo.list_ideas().await?;
    success(IdeaListPayload { ideas })
}
