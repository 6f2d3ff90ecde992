//! Passenger Repository Gateway
//!
//! Abstract trait defining the contract for passenger persistence operations.

use async_trait::async_trait;

use crate::domain::models::passenger::{Passenger, PassengerData, PassengerId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Passenger persistence operations
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    /// Find a passenger by its ID
    async fn find_by_id(&self, id: PassengerId) -> Result<Option<Passenger>, RepositoryError>;

    /// Find all passengers, sorted by name ascending
    async fn find_all(&self) -> Result<Vec<Passenger>, RepositoryError>;

    /// Persist a new passenger, returning it with its database-assigned id
    async fn create(&self, data: &PassengerData) -> Result<Passenger, RepositoryError>;

    /// Replace an existing passenger; returns None when the id does not exist
    async fn update(&self, id: PassengerId, data: &PassengerData) -> Result<Option<Passenger>, RepositoryError>;

    /// Delete a passenger; returns false when the id does not exist
    async fn delete(&self, id: PassengerId) -> Result<bool, RepositoryError>;

    /// Check if a document number exists, optionally excluding a specific passenger ID
    async fn exists_by_document(
        &self,
        document: &str,
        exclude_id: Option<PassengerId>,
    ) -> Result<bool, RepositoryError>;
}
