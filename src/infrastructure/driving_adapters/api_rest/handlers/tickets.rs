//! Ticket Handlers
//!
//! HTTP handlers for ticket CRUD operations.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::ticket::TicketId;
use crate::infrastructure::driving_adapters::api_rest::dto::ticket::{
    TicketRequestDto, TicketResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for ticket endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets))
        .route("/", post(create_ticket))
        .route("/:id", get(get_ticket_by_id))
        .route("/:id", put(update_ticket))
        .route("/:id", delete(delete_ticket))
}

/// GET /tickets - List all tickets
///
/// # Responses
///
/// * 200 OK - List of tickets (sorted by departure time)
/// * 204 No Content - No tickets registered
#[axum::debug_handler]
async fn list_tickets(State(state): State<AppState>) -> Result<Response, ApiError> {
    let tickets = state.list_tickets_use_case.execute().await?;

    // Empty-result sentinel
    if tickets.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let response: Vec<TicketResponseDto> = tickets.into_iter().map(TicketResponseDto::from).collect();
    Ok(Json(response).into_response())
}

/// GET /tickets/:id - Get a ticket by ID
///
/// # Responses
///
/// * 200 OK - Ticket found
/// * 404 Not Found - Ticket does not exist
#[axum::debug_handler]
async fn get_ticket_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TicketResponseDto>, ApiError> {
    let ticket = state
        .get_ticket_by_id_use_case
        .execute(TicketId::from_i32(id))
        .await?;

    Ok(Json(TicketResponseDto::from(ticket)))
}

/// POST /tickets - Create a new ticket
///
/// # Responses
///
/// * 201 Created - Ticket created; Location header points at the new resource
/// * 400 Bad Request - Malformed body or validation error
/// * 404 Not Found - Referenced passenger does not exist
#[axum::debug_handler]
async fn create_ticket(
    State(state): State<AppState>,
    Json(dto): Json<TicketRequestDto>,
) -> Result<Response, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let ticket = state.create_ticket_use_case.execute(dto.into()).await?;

    // Return response with a location reference to the new ticket
    let location = format!("/tickets/{}", ticket.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TicketResponseDto::from(ticket)),
    )
        .into_response())
}

/// PUT /tickets/:id - Replace an existing ticket
///
/// # Responses
///
/// * 200 OK - Ticket replaced successfully
/// * 400 Bad Request - Malformed body or validation error
/// * 404 Not Found - Ticket or referenced passenger does not exist
#[axum::debug_handler]
async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<TicketRequestDto>,
) -> Result<Json<TicketResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let ticket = state
        .update_ticket_use_case
        .execute(TicketId::from_i32(id), dto.into())
        .await?;

    Ok(Json(TicketResponseDto::from(ticket)))
}

/// DELETE /tickets/:id - Delete a ticket
///
/// # Responses
///
/// * 200 OK - Ticket deleted successfully
/// * 404 Not Found - Ticket does not exist
#[axum::debug_handler]
async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_ticket_use_case
        .execute(TicketId::from_i32(id))
        .await?;

    Ok(StatusCode::OK)
}
