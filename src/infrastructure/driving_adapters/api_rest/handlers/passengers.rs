//! Passenger Handlers
//!
//! HTTP handlers for passenger CRUD operations.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::passenger::PassengerId;
use crate::infrastructure::driving_adapters::api_rest::dto::passenger::{
    PassengerRequestDto, PassengerResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for passenger endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_passengers))
        .route("/", post(create_passenger))
        .route("/:id", get(get_passenger_by_id))
        .route("/:id", put(update_passenger))
        .route("/:id", delete(delete_passenger))
}

/// GET /passengers - List all passengers
///
/// # Responses
///
/// * 200 OK - List of passengers (sorted by name)
/// * 204 No Content - No passengers registered
#[axum::debug_handler]
async fn list_passengers(State(state): State<AppState>) -> Result<Response, ApiError> {
    let passengers = state.list_passengers_use_case.execute().await?;

    if passengers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let response: Vec<PassengerResponseDto> = passengers
        .into_iter()
        .map(PassengerResponseDto::from)
        .collect();
    Ok(Json(response).into_response())
}

/// GET /passengers/:id - Get a passenger by ID
///
/// # Responses
///
/// * 200 OK - Passenger found
/// * 404 Not Found - Passenger does not exist
#[axum::debug_handler]
async fn get_passenger_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PassengerResponseDto>, ApiError> {
    let passenger = state
        .get_passenger_by_id_use_case
        .execute(PassengerId::from_i32(id))
        .await?;

    Ok(Json(PassengerResponseDto::from(passenger)))
}

/// POST /passengers - Register a new passenger
///
/// # Responses
///
/// * 201 Created - Passenger created; Location header points at the new resource
/// * 400 Bad Request - Malformed body or validation error
/// * 409 Conflict - Passenger with same document already exists
#[axum::debug_handler]
async fn create_passenger(
    State(state): State<AppState>,
    Json(dto): Json<PassengerRequestDto>,
) -> Result<Response, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let passenger = state.create_passenger_use_case.execute(dto.into()).await?;

    let location = format!("/passengers/{}", passenger.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(PassengerResponseDto::from(passenger)),
    )
        .into_response())
}

/// PUT /passengers/:id - Replace an existing passenger
///
/// # Responses
///
/// * 200 OK - Passenger replaced successfully
/// * 400 Bad Request - Malformed body or validation error
/// * 404 Not Found - Passenger does not exist
/// * 409 Conflict - Document registered to another passenger
#[axum::debug_handler]
async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<PassengerRequestDto>,
) -> Result<Json<PassengerResponseDto>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let passenger = state
        .update_passenger_use_case
        .execute(PassengerId::from_i32(id), dto.into())
        .await?;

    Ok(Json(PassengerResponseDto::from(passenger)))
}

/// DELETE /passengers/:id - Delete a passenger
///
/// # Responses
///
/// * 200 OK - Passenger deleted successfully
/// * 404 Not Found - Passenger does not exist
/// * 409 Conflict - Tickets still reference the passenger
#[axum::debug_handler]
async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_passenger_use_case
        .execute(PassengerId::from_i32(id))
        .await?;

    Ok(StatusCode::OK)
}
