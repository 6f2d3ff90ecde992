//! Ticket Repository Gateway
//!
//! Abstract trait defining the contract for ticket persistence operations.

use async_trait::async_trait;

use crate::domain::models::passenger::PassengerId;
use crate::domain::models::ticket::{NewTicket, Ticket, TicketId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Ticket persistence operations
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find a ticket by its ID, with its passenger attached
    async fn find_by_id(&self, id: TicketId) -> Result<Option<Ticket>, RepositoryError>;

    /// Find all tickets, sorted by departure time ascending
    async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError>;

    /// Persist a new ticket, returning it with its database-assigned id
    async fn create(&self, ticket: &NewTicket) -> Result<Ticket, RepositoryError>;

    /// Replace an existing ticket; returns None when the id does not exist
    async fn update(&self, id: TicketId, ticket: &NewTicket) -> Result<Option<Ticket>, RepositoryError>;

    /// Delete a ticket; returns false when the id does not exist
    async fn delete(&self, id: TicketId) -> Result<bool, RepositoryError>;

    /// Check whether any ticket references the given passenger
    async fn exists_for_passenger(&self, passenger_id: PassengerId) -> Result<bool, RepositoryError>;
}
