//! Create Ticket Use Case
//!
//! Issues a new ticket after resolving its passenger reference.

use std::sync::Arc;

use crate::domain::gateways::{PassengerRepository, TicketRepository};
use crate::domain::models::ticket::{NewTicket, Ticket, TicketData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new ticket
pub struct CreateTicketUseCase {
    ticket_repository: Arc<dyn TicketRepository>,
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl CreateTicketUseCase {
    /// Create a new CreateTicketUseCase
    #[must_use]
    pub fn new(
        ticket_repository: Arc<dyn TicketRepository>,
        passenger_repository: Arc<dyn PassengerRepository>,
    ) -> Self {
        Self {
            ticket_repository,
            passenger_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the referenced passenger doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: TicketData) -> Result<Ticket, UseCaseError> {
        tracing::info!(
            passenger_id = %data.passenger_id,
            origin = %data.origin,
            destination = %data.destination,
            "Creating new ticket"
        );

        // Resolve the passenger reference before persisting
        let passenger = self
            .passenger_repository
            .find_by_id(data.passenger_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(passenger_id = %data.passenger_id, "Referenced passenger not found");
                UseCaseError::NotFound {
                    resource: "Passenger".to_string(),
                    id: data.passenger_id.to_string(),
                }
            })?;

        let ticket = NewTicket::new(passenger, data);
        let created = self.ticket_repository.create(&ticket).await?;

        tracing::info!(
            ticket_id = %created.id(),
            passenger_id = %created.passenger().id(),
            "Ticket created successfully"
        );

        Ok(created)
    }
}
