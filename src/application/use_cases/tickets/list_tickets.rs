//! List Tickets Use Case
//!
//! Retrieves all tickets, sorted by departure time.

use std::sync::Arc;

use crate::domain::gateways::TicketRepository;
use crate::domain::models::ticket::Ticket;
use crate::shared::errors::UseCaseError;

/// Use case for listing all tickets
pub struct ListTicketsUseCase {
    ticket_repository: Arc<dyn TicketRepository>,
}

impl ListTicketsUseCase {
    /// Create a new ListTicketsUseCase
    #[must_use]
    pub fn new(ticket_repository: Arc<dyn TicketRepository>) -> Self {
        Self { ticket_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Ticket>, UseCaseError> {
        tracing::debug!("Listing all tickets");

        let tickets = self.ticket_repository.find_all().await?;

        tracing::debug!(count = tickets.len(), "Found tickets");
        Ok(tickets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::passenger::{Passenger, PassengerId};
    use crate::domain::models::ticket::{NewTicket, TicketId};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    struct MockTicketRepository {
        find_all_result: Mutex<Option<Result<Vec<Ticket>, RepositoryError>>>,
    }

    impl MockTicketRepository {
        fn new() -> Self {
            Self {
                find_all_result: Mutex::new(None),
            }
        }

        fn with_find_all(self, result: Result<Vec<Ticket>, RepositoryError>) -> Self {
            *self.find_all_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl TicketRepository for MockTicketRepository {
        async fn find_by_id(&self, _id: TicketId) -> Result<Option<Ticket>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
            self.find_all_result.lock().unwrap().take().unwrap_or(Ok(vec![]))
        }

        async fn create(&self, _ticket: &NewTicket) -> Result<Ticket, RepositoryError> {
            Err(RepositoryError::Mapping("unexpected call".to_string()))
        }

        async fn update(&self, _id: TicketId, _ticket: &NewTicket) -> Result<Option<Ticket>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _id: TicketId) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn exists_for_passenger(&self, _passenger_id: PassengerId) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    fn test_ticket(id: i32) -> Ticket {
        let now = Utc::now();
        let passenger = Passenger::restore(
            PassengerId::from_i32(7),
            "Maria Silva".to_string(),
            "maria.silva@example.com".to_string(),
            "12345678901".to_string(),
            now,
            now,
        );
        Ticket::restore(
            TicketId::from_i32(id),
            passenger,
            "Sao Paulo".to_string(),
            "Rio de Janeiro".to_string(),
            now + Duration::days(30),
            "12A".to_string(),
            dec!(349.90),
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_return_all_tickets() {
        let repo = Arc::new(
            MockTicketRepository::new().with_find_all(Ok(vec![test_ticket(1), test_ticket(2)])),
        );

        let use_case = ListTicketsUseCase::new(repo);
        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_tickets() {
        let repo = Arc::new(MockTicketRepository::new().with_find_all(Ok(vec![])));

        let use_case = ListTicketsUseCase::new(repo);
        let result = use_case.execute().await;

        assert!(result.unwrap().is_empty());
    }
}
