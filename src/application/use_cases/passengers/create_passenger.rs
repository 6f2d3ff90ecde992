//! Create Passenger Use Case
//!
//! Registers a new passenger, enforcing document uniqueness.

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{Passenger, PassengerData};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new passenger
pub struct CreatePassengerUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl CreatePassengerUseCase {
    /// Create a new CreatePassengerUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Conflict` if a passenger with the same document already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: PassengerData) -> Result<Passenger, UseCaseError> {
        tracing::info!(name = %data.name, "Creating new passenger");

        if self
            .passenger_repository
            .exists_by_document(&data.document, None)
            .await?
        {
            tracing::warn!(document = %data.document, "Passenger with document already exists");
            return Err(UseCaseError::Conflict(format!(
                "Passenger with document {} already exists",
                data.document
            )));
        }

        let created = self.passenger_repository.create(&data).await?;

        tracing::info!(passenger_id = %created.id(), "Passenger created successfully");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::passenger::PassengerId;
    use crate::shared::errors::RepositoryError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    struct MockPassengerRepository {
        exists_by_document_result: Mutex<Option<Result<bool, RepositoryError>>>,
        create_result: Mutex<Option<Result<Passenger, RepositoryError>>>,
    }

    impl MockPassengerRepository {
        fn new() -> Self {
            Self {
                exists_by_document_result: Mutex::new(None),
                create_result: Mutex::new(None),
            }
        }

        fn with_exists_by_document(self, result: Result<bool, RepositoryError>) -> Self {
            *self.exists_by_document_result.lock().unwrap() = Some(result);
            self
        }

        fn with_create(self, result: Result<Passenger, RepositoryError>) -> Self {
            *self.create_result.lock().unwrap() = Some(result);
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

        async fn create(&self, data: &PassengerData) -> Result<Passenger, RepositoryError> {
            self.create_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(persisted(data)))
        }

        async fn update(
            &self,
            _id: PassengerId,
            _data: &PassengerData,
        ) -> Result<Option<Passenger>, RepositoryError> {
            Ok(None)
        }

        async fn delete(&self, _id: PassengerId) -> Result<bool, RepositoryError> {
            Ok(false)
        }

        async fn exists_by_document(
            &self,
            _document: &str,
            _exclude_id: Option<PassengerId>,
        ) -> Result<bool, RepositoryError> {
            self.exists_by_document_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Ok(false))
        }
    }

    fn persisted(data: &PassengerData) -> Passenger {
        let now = Utc::now();
        Passenger::restore(
            PassengerId::from_i32(1),
            data.name.clone(),
            data.email.clone(),
            data.document.clone(),
            now,
            now,
        )
    }

    fn create_test_data() -> PassengerData {
        PassengerData {
            name: "Maria Silva".to_string(),
            email: "maria.silva@example.com".to_string(),
            document: "12345678901".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_passenger_when_document_does_not_exist() {
        let repo = Arc::new(MockPassengerRepository::new().with_exists_by_document(Ok(false)));

        let use_case = CreatePassengerUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_ok());
        let passenger = result.unwrap();
        assert_eq!(passenger.name(), "Maria Silva");
        assert_eq!(passenger.document(), "12345678901");
    }

    #[tokio::test]
    async fn should_return_conflict_when_document_exists() {
        let repo = Arc::new(MockPassengerRepository::new().with_exists_by_document(Ok(true)));

        let use_case = CreatePassengerUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), UseCaseError::Conflict(_)));
    }

    #[tokio::test]
    async fn should_propagate_repository_error_on_create() {
        let repo = Arc::new(
            MockPassengerRepository::new()
                .with_exists_by_document(Ok(false))
                .with_create(Err(RepositoryError::Mapping("boom".to_string()))),
        );

        let use_case = CreatePassengerUseCase::new(repo);
        let result = use_case.execute(create_test_data()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
