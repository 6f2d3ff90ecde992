//! Update Passenger Use Case (PUT)
//!
//! Replaces a stored passenger, enforcing document uniqueness.

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::{Passenger, PassengerData, PassengerId};
use crate::shared::errors::UseCaseError;

/// Use case for replacing an existing passenger
pub struct UpdatePassengerUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl UpdatePassengerUseCase {
    /// Create a new UpdatePassengerUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the passenger doesn't exist.
    /// Returns `UseCaseError::Conflict` if another passenger holds the same document.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: PassengerId, data: PassengerData) -> Result<Passenger, UseCaseError> {
        tracing::info!(passenger_id = %id, "Updating passenger");

        if self
            .passenger_repository
            .exists_by_document(&data.document, Some(id))
            .await?
        {
            tracing::warn!(
                passenger_id = %id,
                document = %data.document,
                "Cannot update: document already registered to another passenger"
            );
            return Err(UseCaseError::Conflict(format!(
                "Passenger with document {} already exists",
                data.document
            )));
        }

        let updated = self
            .passenger_repository
            .update(id, &data)
            .await?
            .ok_or_else(|| {
                tracing::warn!(passenger_id = %id, "Passenger not found for update");
                UseCaseError::NotFound {
                    resource: "Passenger".to_string(),
                    id: id.to_string(),
                }
            })?;

        tracing::info!(passenger_id = %id, "Passenger updated successfully");
        Ok(updated)
    }
}
