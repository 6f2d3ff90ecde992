//! Delete Ticket Use Case
//!
//! Removes a ticket after checking it exists.

use std::sync::Arc;

use crate::domain::gateways::TicketRepository;
use crate::domain::models::ticket::TicketId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a ticket
pub struct DeleteTicketUseCase {
    ticket_repository: Arc<dyn TicketRepository>,
}

impl DeleteTicketUseCase {
    /// Create a new DeleteTicketUseCase
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
    pub async fn execute(&self, id: TicketId) -> Result<(), UseCaseError> {
        tracing::info!(ticket_id = %id, "Deleting ticket");

        let deleted = self.ticket_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(ticket_id = %id, "Ticket not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Ticket".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(ticket_id = %id, "Ticket deleted successfully");
        Ok(())
    }
}
