//! Get Ticket By ID Use Case
//!
//! Retrieves a single ticket by its ID.

use std::sync::Arc;

use crate::domain::gateways::TicketRepository;
use crate::domain::models::ticket::{Ticket, TicketId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a ticket by ID
pub struct GetTicketByIdUseCase {
    ticket_repository: Arc<dyn TicketRepository>,
}

impl GetTicketByIdUseCase {
    /// Create a new GetTicketByIdUseCase
    #[must_use]
    pub fn new(ticket_repository: Arc<dyn TicketRepository>) -> Self {
        Self { ticket_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the ticket doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: TicketId) -> Result<Ticket, UseCaseError> {
        tracing::debug!(ticket_id = %id, "Getting ticket by ID");

        let ticket = self.ticket_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(ticket_id = %id, "Ticket not found");
            UseCaseError::NotFound {
                resource: "Ticket".to_string(),
                id: id.to_string(),
            }
        })?;

        tracing::debug!(ticket_id = %id, "Ticket found");
        Ok(ticket)
    }
}
