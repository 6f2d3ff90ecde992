//! Ticket Domain Model
//!
//! Represents a travel ticket tied to exactly one passenger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::passenger::{Passenger, PassengerId};

/// Newtype wrapper for Ticket ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(i32);

impl TicketId {
    /// Create a TicketId from a raw database id
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

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TicketId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

/// Ticket fields plus the bare id of the referenced passenger.
///
/// This is the write-side shape: the passenger is carried as an id until the
/// use case resolves it against the repository.
#[derive(Debug, Clone)]
pub struct TicketData {
    pub passenger_id: PassengerId,
    pub origin: String,
    pub destination: String,
    pub departure_at: DateTime<Utc>,
    pub seat: String,
    pub price: Decimal,
}

/// A ticket assembled with its resolved passenger, not yet persisted.
#[derive(Debug, Clone)]
pub struct NewTicket {
    passenger: Passenger,
    origin: String,
    destination: String,
    departure_at: DateTime<Utc>,
    seat: String,
    price: Decimal,
}

impl NewTicket {
    /// Attach the resolved passenger to the ticket fields
    #[must_use]
    pub fn new(passenger: Passenger, data: TicketData) -> Self {
        Self {
            passenger,
            origin: data.origin,
            destination: data.destination,
            departure_at: data.departure_at,
            seat: data.seat,
            price: data.price,
        }
    }

    #[must_use]
    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn departure_at(&self) -> DateTime<Utc> {
        self.departure_at
    }

    #[must_use]
    pub fn seat(&self) -> &str {
        &self.seat
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Ticket domain entity with its embedded passenger
#[derive(Debug, Clone)]
pub struct Ticket {
    id: TicketId,
    passenger: Passenger,
    origin: String,
    destination: String,
    departure_at: DateTime<Utc>,
    seat: String,
    price: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Restore a Ticket from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: TicketId,
        passenger: Passenger,
        origin: String,
        destination: String,
        departure_at: DateTime<Utc>,
        seat: String,
        price: Decimal,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            passenger,
            origin,
            destination,
            departure_at,
            seat,
            price,
            created_at,
            updated_at,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> TicketId {
        self.id
    }

    #[must_use]
    pub fn passenger(&self) -> &Passenger {
        &self.passenger
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn departure_at(&self) -> DateTime<Utc> {
        self.departure_at
    }

    #[must_use]
    pub fn seat(&self) -> &str {
        &self.seat
    }

    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
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
