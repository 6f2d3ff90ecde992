//! List Passengers Use Case
//!
//! Retrieves all passengers, sorted by name.

use std::sync::Arc;

use crate::domain::gateways::PassengerRepository;
use crate::domain::models::passenger::Passenger;
use crate::shared::errors::UseCaseError;

/// Use case for listing all passengers
pub struct ListPassengersUseCase {
    passenger_repository: Arc<dyn PassengerRepository>,
}

impl ListPassengersUseCase {
    /// Create a new ListPassengersUseCase
    #[must_use]
    pub fn new(passenger_repository: Arc<dyn PassengerRepository>) -> Self {
        Self { passenger_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Passenger>, UseCaseError> {
        tracing::debug!("Listing all passengers");

        let passengers = self.passenger_repository.find_all().await?;

        tracing::debug!(count = passengers.len(), "Found passengers");
        Ok(passengers)
    }
}
