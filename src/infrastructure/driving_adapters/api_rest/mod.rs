//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use crate::application::use_cases::passengers::{
    CreatePassengerUseCase, DeletePassengerUseCase, GetPassengerByIdUseCase, ListPassengersUseCase,
    UpdatePassengerUseCase,
};
use crate::application::use_cases::tickets::{
    CreateTicketUseCase, DeleteTicketUseCase, GetTicketByIdUseCase, ListTicketsUseCase,
    UpdateTicketUseCase,
};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub create_ticket_use_case: Arc<CreateTicketUseCase>,
    pub list_tickets_use_case: Arc<ListTicketsUseCase>,
    pub get_ticket_by_id_use_case: Arc<GetTicketByIdUseCase>,
    pub update_ticket_use_case: Arc<UpdateTicketUseCase>,
    pub delete_ticket_use_case: Arc<DeleteTicketUseCase>,
    pub create_passenger_use_case: Arc<CreatePassengerUseCase>,
    pub list_passengers_use_case: Arc<ListPassengersUseCase>,
    pub get_passenger_by_id_use_case: Arc<GetPassengerByIdUseCase>,
    pub update_passenger_use_case: Arc<UpdatePassengerUseCase>,
    pub delete_passenger_use_case: Arc<DeletePassengerUseCase>,
}
