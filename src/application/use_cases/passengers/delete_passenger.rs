//! Delete Passenger Use Case
//!
//! Removes a passenger unless tickets still reference them.

use std::sync::Arc;

use crate::domain::gateways::{PassengerRepository, TicketRepository};
use crate::domain::models::passenger::PassengerId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting a passenger
pub struct DeletePassengerUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
}

impl DeletePassengerUseCase {
    /// Create a new DeletePassengerUseCase
    #[must_use]
    pub fn new(
        passenger_repository: Arc<dyn PassengerRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
    ) -> Self {
        Self {
            passenger_repository,
            ticket_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if tickets still reference the passenger.
    /// Returns `UseCaseError::NotFound` if the passenger doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PassengerId) -> Result<(), UseCaseError> {
        tracing::info!(passenger_id = %id, "Deleting passenger");

        if self.ticket_repository.exists_for_passenger(id).await? {
            tracing::warn!(passenger_id = %id, "Passenger still referenced by tickets");
            return Err(UseCaseError::Conflict(format!(
                "Passenger {id} is still referenced by tickets"
            )));
        }

        let deleted = self.passenger_repository.delete(id).await?;

        if !deleted {
            tracing::warn!(passenger_id = %id, "Passenger not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Passenger".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(passenger_id = %id, "Passenger deleted successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::passenger::{Passenger, PassengerData};
    use crate::domain::models::ticket::{NewTicket, Ticket, TicketId};
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockPassengerRepository {
        delete_result: Mutex<Option<Result<bool, RepositoryError>>>,
    }

    impl MockPassengerRepository {
        fn new() -> Self {
            Self {
                delete_result: Mutex::new(None),
            }
        }

        fn with_delete(self, result: Result<bool, RepositoryError>) -> Self {
            *self.delete_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl PassengerRepository for MockPassengerRepository {
        async fn find_by_id(&self, _id: PassengerId) -> Result<Option<Passenger>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Passenger>, RepositoryError> {
            Ok(vec![])
        }

        async fn create(&self, _data: &PassengerData) -> Result<Passenger, RepositoryError> {
            Err(RepositoryError::Mapping("unexpected call".to_string()))
        }

        async fn update(
            &self,
            _id: PassengerId,
            _data: &PassengerData,
        ) -> Result<Option<Passenger>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _id: PassengerId) -> Result<bool, RepositoryError> {
            self.delete_result.lock().unwrap().take().unwrap_or(Ok(false))
        }

        async fn exists_by_document(
            &self,
            _document: &str,
            _exclude_id: Option<PassengerId>,
        ) -> Result<bool, RepositoryError> {
            Ok(false)
        }
    }

    struct MockTicketRepository {
        exists_for_passenger_result: Mutex<Option<Result<bool, RepositoryError>>>,
    }

    impl MockTicketRepository {
        fn new() -> Self {
            Self {
                exists_for_passenger_result: Mutex::new(None),
            }
        }

        fn with_exists_for_passenger(self, result: Result<bool, RepositoryError>) -> Self {
            *self.exists_for_passenger_result.lock().unwrap() = Some(result);
            self
        }
    }

    #[async_trait]
    impl TicketRepository for MockTicketRepository {
        async fn find_by_id(&self, _id: TicketId) -> Result<Option<Ticket>, RepositoryError> {
            Ok(None)
        }

        async fn find_all(&self) -> Result<Vec<Ticket>, RepositoryError> {
            Ok(vec![])
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
            self.exists_for_passenger_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(false))
        }
    }

    #[tokio::test]
    async fn should_delete_passenger_when_found_and_unreferenced() {
        let passengers = Arc::new(MockPassengerRepository::new().with_delete(Ok(true)));
        let tickets = Arc::new(MockTicketRepository::new().with_exists_for_passenger(Ok(false)));

        let use_case = DeletePassengerUseCase::new(passengers, tickets);
        let result = use_case.execute(PassengerId::from_i32(7)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_conflict_when_tickets_reference_passenger() {
        let passengers = Arc::new(MockPassengerRepository::new().with_delete(Ok(true)));
        let tickets = Arc::new(MockTicketRepository::new().with_exists_for_passenger(Ok(true)));

        let use_case = DeletePassengerUseCase::new(passengers, tickets);
        let result = use_case.execute(PassengerId::from_i32(7)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_passenger_does_not_exist() {
        let passengers = Arc::new(MockPassengerRepository::new().with_delete(Ok(false)));
        let tickets = Arc::new(MockTicketRepository::new().with_exists_for_passenger(Ok(false)));

        let use_case = DeletePassengerUseCase::new(passengers, tickets);
        let result = use_case.execute(PassengerId::from_i32(99)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
