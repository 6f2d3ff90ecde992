//! Passenger Domain Model
//!
//! Represents a person that travel tickets are issued to.

use chrono::{DateTime, Utc};

/// Newtype wrapper for Passenger ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassengerId(i32);

impl PassengerId {
    /// Create a PassengerId from a raw database id
    #[must_use]
    pub fn from_i32(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying integer value
    #[must_use]
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for PassengerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PassengerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Data required to create or replace a Passenger
#[derive(Debug, Clone)]
pub struct PassengerData {
    pub name: String,
    pub email: String,
    pub document: String,
}

/// Passenger domain entity
///
/// Ids are assigned by the database on insert, so entities only exist in
/// restored form; new passengers travel as [`PassengerData`] until persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    id: PassengerId,
    name: String,
    email: String,
    document: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Passenger {
    /// Restore a Passenger from persisted data
    #[must_use]
    pub fn restore(
        id: PassengerId,
        name: String,
        email: String,
        document: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            document,
            created_at,
            updated_at,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> PassengerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
