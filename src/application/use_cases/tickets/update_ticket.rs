//! Update Ticket Use Case (PUT)
//!
//! Replaces a stored ticket. Both the target ticket and the referenced
//! passenger must already exist.

use std::sync::Arc;

use crate::domain::gateways::{PassengerRepository, TicketRepository};
use crate::domain::models::ticket::{NewTicket, Ticket, TicketData, TicketId};
use crate::shared::errors::UseCaseError;

/// Use case for replacing an existing ticket
pub struct UpdateTicketUseCase {
    ticket_repository: Arc<dyn TicketRepository>,
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl UpdateTicketUseCase {
    /// Create a new UpdateTicketUseCase
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
    /// Returns `UseCaseError::NotFound` if the ticket or the referenced
    /// passenger doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: TicketId, data: TicketData) -> Result<Ticket, UseCaseError> {
        tracing::info!(ticket_id = %id, passenger_id = %data.passenger_id, "Updating ticket");

        // The target ticket must exist before it can be replaced
        if self.ticket_repository.find_by_id(id).await?.is_none() {
            tracing::warn!(ticket_id = %id, "Ticket not found for update");
            return Err(UseCaseError::NotFound {
                resource: "Ticket".to_string(),
                id: id.to_string(),
            });
        }

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

        let replacement = NewTicket::new(passenger, data);
        let updated = self
            .ticket_repository
            .update(id, &replacement)
            .await?
            .ok_or_else(|| UseCaseError::NotFound {
                resource: "Ticket".to_string(),
                id: id.to_string(),
            })?;

        tracing::info!(ticket_id = %id, "Ticket updated successfully");
        Ok(updated)
    }
}
